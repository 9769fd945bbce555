//! Color themes

mod tokyo_night;
mod tokyo_night_day;

pub use tokyo_night::TOKYO_NIGHT;
pub use tokyo_night_day::TOKYO_NIGHT_DAY;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A color theme for the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub error: Color,
    pub info: Color,

    /// Inline code spans
    pub code: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub cursor: Color,
}

impl Theme {
    /// Look up a built-in theme by name. Unknown names give `None`.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "dark" | "tokyo night" | "tokyo-night" => Some(Self::tokyo_night()),
            "light" | "day" | "tokyo night day" | "tokyo-night-day" => {
                Some(Self::tokyo_night_day())
            }
            _ => None,
        }
    }

    /// Whether the background is dark (picks the code highlighting palette)
    pub fn is_dark(&self) -> bool {
        match self.bg_primary {
            Color::Rgb(r, g, b) => (u32::from(r) + u32::from(g) + u32::from(b)) < 384,
            _ => true,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}
