use leptos::prelude::*;

use super::CountdownDial;
use crate::content::STORE_URL;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-emblem">
                    <span class="hero-emblem-icon">"🧠"</span>
                </div>
                <h1 class="hero-title">
                    "Master Your Time"
                    <br />
                    <span class="hero-title-accent">"Like a Monk"</span>
                </h1>
                <p class="hero-description">
                    "Monk Focus helps you sharpen your mind, track your time, "
                    "and embrace modern productivity rituals."
                </p>
                <div class="hero-actions">
                    <a href=STORE_URL target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                        "✦ Install Extension"
                    </a>
                </div>
                <CountdownDial />
            </div>
        </section>
    }
}
