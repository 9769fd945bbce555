//! Lesson content: the fixed catalogs each mode walks through
//!
//! Catalogs are built once at startup, either from the built-in lessons or from a
//! JSON catalog file, and never change afterwards.

pub mod builtin;
pub mod loader;
pub mod model;
pub mod render;

pub use loader::ContentError;
pub use model::{Catalogs, ContentCatalog, LearningStep, Mode, QuizQuestion, Technique};
pub use render::{Fragment, Render, Rendered, listing};
