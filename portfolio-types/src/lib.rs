//! Page logic shared by the portfolio UI
//!
//! Everything in here is independent of the browser so it can be
//! unit-tested natively:
//! - page resolution and navigation matching
//! - link classification for page transitions
//! - the typing-effect state machine
//! - the dark-mode preference and its storage seam
//! - page configuration and the DOM class/selector contract

pub mod config;
pub mod links;
pub mod page;
pub mod preference;
pub mod typing;
pub mod viewport;

pub use config::*;
pub use links::*;
pub use page::*;
pub use preference::*;
pub use typing::*;
pub use viewport::*;

// ============================================================================
// DOM contract
// ============================================================================

/// Class names written or read by the UI.
pub mod classes {
    pub const ACTIVE: &str = "active";
    pub const MOBILE_ACTIVE: &str = "mobile-active";
    pub const VISIBLE: &str = "visible";
    pub const TRANSITION_IN: &str = "transition-in";
    pub const TRANSITION_OUT: &str = "transition-out";
    pub const TYPING_COMPLETE: &str = "typing-complete";
    pub const DARK_MODE: &str = "dark-mode";
    pub const FLOATING: &str = "floating";
    pub const EXPANDED: &str = "expanded";
    pub const ACTIVE_CARD: &str = "active-card";
}

/// Selectors the UI queries.
pub mod selectors {
    pub const NAV: &str = "nav";
    pub const NAV_LINKS: &str = "nav a";
    pub const ANCHOR: &str = "a";
    pub const MENU_TOGGLE: &str = ".menu-toggle";
    pub const BACK_TO_TOP: &str = ".back-to-top";
    pub const NAV_ARROW: &str = ".nav-arrow";
    pub const FADE_IN: &str = ".fade-in";
    pub const SLIDE_IN: &str = ".slide-in";
    pub const TYPE_EFFECT: &str = ".type-effect";
    pub const SKILL_CARD: &str = ".skill-card";
    pub const SKILL_ICON: &str = "i";
    pub const PROJECT_CARD: &str = ".project-card";
    pub const EDUCATION_CARD: &str = ".education-card";
    pub const BUTTON: &str = ".btn";

    /// Element id of the dark-mode checkbox.
    pub const DARK_MODE_TOGGLE_ID: &str = "dark-mode-toggle";
    /// Data attribute carried by navigation arrows.
    pub const NAV_ARROW_TARGET_ATTR: &str = "data-target";
    /// Body attribute holding optional JSON page configuration.
    pub const CONFIG_ATTR: &str = "data-portfolio-config";
}

/// Inline styles applied to a skill card's icon on hover.
pub mod icon_style {
    pub const HOVER_TRANSFORM: &str = "scale(1.2)";
    pub const REST_TRANSFORM: &str = "scale(1)";
    pub const TRANSITION: &str = "transform 0.3s ease";
}
