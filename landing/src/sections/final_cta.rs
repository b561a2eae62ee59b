use leptos::prelude::*;

use crate::content::STORE_URL;

#[component]
pub fn FinalCta() -> impl IntoView {
    view! {
        <section id="start" class="final-cta">
            <div class="container">
                <h2 class="final-cta-title">
                    "Start Your Monk"
                    <br />
                    "Journey Today"
                </h2>
                <a href=STORE_URL target="_blank" rel="noopener noreferrer" class="btn btn-primary btn-large">
                    "★ Install Monk Focus Now"
                </a>
                <div class="final-cta-orb">
                    <span class="final-cta-orb-icon">"🧠"</span>
                </div>
            </div>
        </section>
    }
}
