// Landing page sections
// Built with ♥ by Monk Focus (c)2025

mod console_banner;
mod countdown_dial;
mod features;
mod final_cta;
mod footer;
mod hero;
mod practices;
mod testimonials;

pub use console_banner::ConsoleBanner;
pub use countdown_dial::CountdownDial;
pub use features::Features;
pub use final_cta::FinalCta;
pub use footer::Footer;
pub use hero::Hero;
pub use practices::Practices;
pub use testimonials::Testimonials;
