use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">
                    "Built with "
                    <span class="footer-heart">"♥"</span>
                    " © 2025 Monk Focus. Embrace the future of productivity."
                </p>
            </div>
        </footer>
    }
}
