use leptos::prelude::*;

use crate::content::{AVERAGE_RATING, REVIEW_COUNT, TESTIMONIALS, Testimonial, stars};

#[component]
pub fn Testimonials() -> impl IntoView {
    let review_note = format!("Based on {REVIEW_COUNT} Chrome Web Store reviews");
    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Loved by Digital Monks"</h2>
                    <p class="section-description">
                        "Join thousands of users who have transformed their productivity"
                    </p>
                </div>
                <div class="rating-summary">
                    <div class="rating-stars">{stars(5)}</div>
                    <p class="rating-score">{AVERAGE_RATING}</p>
                    <p class="rating-note">{review_note}</p>
                </div>
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        .collect_view()}
                </div>
                <StoreBadge />
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    let quote = format!("\"{}\"", testimonial.text);
    view! {
        <div class="glow-card testimonial-card">
            <div class="testimonial-stars">{stars(testimonial.rating)}</div>
            <p class="testimonial-text">{quote}</p>
            <div class="testimonial-author">
                <div class="testimonial-avatar">
                    <img src={testimonial.avatar} alt={testimonial.name} />
                    {testimonial
                        .verified
                        .then(|| view! { <span class="verified-badge" title="Verified">"✓"</span> })}
                </div>
                <div>
                    <p class="testimonial-name">{testimonial.name}</p>
                    <p class="testimonial-role">{testimonial.role}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StoreBadge() -> impl IntoView {
    view! {
        <div class="store-badge">
            <div class="store-badge-icon">"✔"</div>
            <div class="store-badge-text">
                <p class="store-badge-title">"Available on Chrome Web Store"</p>
                <p class="store-badge-subtitle">"Free Chrome Extension"</p>
            </div>
        </div>
    }
}
