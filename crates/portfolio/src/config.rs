//! Page identifiers and timing constants.
//!
//! Defaults match the shipped page. The CLI can override them from a
//! `portfolio.toml`; missing keys keep their defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GRID_ID: &str = "projectGrid";
pub const DEFAULT_CONTACT_FORM_ID: &str = "contactForm";
pub const DEFAULT_HOME_ID: &str = "home";
pub const DEFAULT_TYPING_CLASS: &str = "typing-effect";
pub const DEFAULT_NAV_LINKS_CLASS: &str = "nav-links";
pub const PROJECT_CARD_CLASS: &str = "project-card";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub grid_id: String,
    pub contact_form_id: String,
    pub home_id: String,
    pub typing_class: String,
    pub nav_links_class: String,
    pub typing_start_delay_ms: u64,
    pub typing_interval_ms: u64,
    pub form_reset_delay_ms: u64,
    pub card_observe_delay_ms: u64,
    pub card_stagger_ms: u64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: f64,
    pub active_nav_offset_px: f64,
    pub viewport_height_px: f64,
    pub highlight_color: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            grid_id: DEFAULT_GRID_ID.to_string(),
            contact_form_id: DEFAULT_CONTACT_FORM_ID.to_string(),
            home_id: DEFAULT_HOME_ID.to_string(),
            typing_class: DEFAULT_TYPING_CLASS.to_string(),
            nav_links_class: DEFAULT_NAV_LINKS_CLASS.to_string(),
            typing_start_delay_ms: 500,
            typing_interval_ms: 100,
            form_reset_delay_ms: 3000,
            card_observe_delay_ms: 100,
            card_stagger_ms: 100,
            reveal_threshold: 0.1,
            reveal_bottom_margin_px: 50.0,
            active_nav_offset_px: 200.0,
            viewport_height_px: 800.0,
            highlight_color: "#ffffff".to_string(),
        }
    }
}
