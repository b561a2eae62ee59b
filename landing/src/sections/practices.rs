use leptos::prelude::*;

use crate::content::{PRACTICES, Practice, STORE_URL};

#[component]
pub fn Practices() -> impl IntoView {
    view! {
        <section id="practices" class="practices">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Ancient Wisdom,"
                        <br />
                        "Modern Practice"
                    </h2>
                    <p class="section-description">
                        "Productivity theories integrated into your digital meditation practice"
                    </p>
                </div>
                <div class="practices-grid">
                    {PRACTICES
                        .iter()
                        .map(|practice| view! { <PracticeCard practice=practice /> })
                        .collect_view()}
                </div>
                <div class="section-cta">
                    <a href=STORE_URL target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                        "🧠 Discover More Practices in Extension"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PracticeCard(practice: &'static Practice) -> impl IntoView {
    view! {
        <div class="glow-card practice-card">
            <div class="practice-icon">{practice.icon}</div>
            <h3 class="practice-name">{practice.name}</h3>
            <p class="practice-description">{practice.description}</p>
        </div>
    }
}
