use leptos::prelude::*;

use crate::content::{FEATURES, Feature};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Futuristic Features"</h2>
                    <p class="section-description">
                        "Advanced productivity tools designed for the modern digital monk"
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class="glow-card feature-card">
            <div class="feature-icon">{feature.icon}</div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </div>
    }
}
