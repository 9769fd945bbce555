//! DOM Dojo - a terminal dojo for learning DOM manipulation
//!
//! Three modes share one screen: guided learning steps, a catalogue of
//! manipulation techniques, and a short quiz with answer checking.

pub mod app;
pub mod config;
pub mod content;
pub mod syntax;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use content::Catalogs;
pub use theme::Theme;
