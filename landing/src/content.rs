//! Copy for the landing page sections.
//!
//! Fixed lists, rendered in order. Nothing here changes at runtime.

/// Chrome Web Store listing every install button points at.
pub const STORE_URL: &str =
    "https://chromewebstore.google.com/detail/monk-focus/dgckhghgnhikghhnlbakchgmbhobblop";

pub const AVERAGE_RATING: &str = "4.9/5 Stars";
pub const REVIEW_COUNT: &str = "2,847+";

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Practice {
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub verified: bool,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "⏱",
        title: "Smart Pomodoro Timer",
        description: "Custom durations tailored to your focus rhythm",
    },
    Feature {
        icon: "◎",
        title: "Auto Break Support",
        description: "Intelligent break scheduling for optimal productivity",
    },
    Feature {
        icon: "⚡",
        title: "Streak Tracker",
        description: "Build momentum with visual progress tracking",
    },
    Feature {
        icon: "✓",
        title: "Focus Mode To-Do",
        description: "Distraction-free task management",
    },
    Feature {
        icon: "⛨",
        title: "Website Blocker",
        description: "Block distracting sites during focus sessions",
    },
    Feature {
        icon: "▥",
        title: "Analytics Dashboard",
        description: "Visual insights into your productivity patterns",
    },
];

pub const PRACTICES: &[Practice] = &[
    Practice {
        icon: "⏲",
        name: "The 2-Minute Rule",
        description: "If it takes less than 2 minutes, do it now.",
    },
    Practice {
        icon: "🚀",
        name: "The 52/17 Rule",
        description: "Work for 52 minutes, break for 17 minutes.",
    },
    Practice {
        icon: "📅",
        name: "Timeboxing",
        description: "Allocate fixed time periods for specific tasks.",
    },
    Practice {
        icon: "🏃",
        name: "The Marathon Method",
        description: "Sustainable long-term productivity approach.",
    },
];

const PLACEHOLDER_AVATAR: &str = "/placeholder.svg?height=60&width=60";

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Chen",
        role: "Software Engineer",
        avatar: PLACEHOLDER_AVATAR,
        rating: 5,
        text: "Monk Focus completely transformed my coding sessions. The Pomodoro timer with ambient sounds keeps me in the zone for hours!",
        verified: true,
    },
    Testimonial {
        name: "Marcus Rodriguez",
        role: "Digital Designer",
        avatar: PLACEHOLDER_AVATAR,
        rating: 5,
        text: "The website blocker feature is a game-changer. I can finally focus without getting distracted by social media.",
        verified: true,
    },
    Testimonial {
        name: "Emily Watson",
        role: "Content Writer",
        avatar: PLACEHOLDER_AVATAR,
        rating: 5,
        text: "Love the zen mode! The minimalist interface and productivity quotes keep me motivated throughout the day.",
        verified: true,
    },
    Testimonial {
        name: "David Kim",
        role: "Product Manager",
        avatar: PLACEHOLDER_AVATAR,
        rating: 5,
        text: "The analytics dashboard shows exactly where my time goes. It's like having a personal productivity coach!",
        verified: true,
    },
    Testimonial {
        name: "Lisa Thompson",
        role: "Freelancer",
        avatar: PLACEHOLDER_AVATAR,
        rating: 5,
        text: "Best productivity extension I've ever used. The streak tracker keeps me motivated to maintain my focus habits.",
        verified: true,
    },
    Testimonial {
        name: "Alex Johnson",
        role: "Student",
        avatar: PLACEHOLDER_AVATAR,
        rating: 5,
        text: "Perfect for study sessions! The break reminders and focus music help me study for hours without burning out.",
        verified: true,
    },
];

/// `count` filled stars, for the aggregate rating and each review card.
pub fn stars(count: u8) -> String {
    "★".repeat(usize::from(count.min(5)))
}
