// Monk Focus Landing Page — Leptos 0.8 Edition
// Built with ♥ by Monk Focus (c)2025

mod content;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <ConsoleBanner />
        <div class="page">
            <div class="page-backdrop"></div>
            <main>
                <Hero />
                <Features />
                <Practices />
                <Testimonials />
                <FinalCta />
            </main>
            <Footer />
        </div>
    }
}
