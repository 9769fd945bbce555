//! Linear progression through a fixed catalog
//!
//! Used by the learning and technique modes. Nothing is shown until the first
//! advance; each advance displays the item under the cursor and then moves the
//! cursor on. Advancing past the last item shows a completion message and hides
//! the advance control for good.

use crate::content::{ContentCatalog, Render, Rendered};

/// Completion message for learning mode
pub const LEARNING_COMPLETE: &str = "You've completed Learning Mode!";

/// Completion message for the technique catalogue
pub const TECHNIQUES_COMPLETE: &str = "You've completed DOM Manipulation Techniques!";

/// Where a controller is in its catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    /// Cursor is before the end of the catalog
    InProgress,
    /// Cursor has reached the end; terminal
    Completed,
}

/// What the step panel currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepDisplay {
    /// Nothing yet (before the first advance)
    Empty,
    /// The item at this catalog index
    Item { index: usize, rendered: Rendered },
    /// The completion message
    Completed(Rendered),
}

/// A cursor over a catalog plus its display state
#[derive(Debug, Clone)]
pub struct Progression<T> {
    catalog: ContentCatalog<T>,
    cursor: usize,
    display: StepDisplay,
    advance_visible: bool,
    completion_message: &'static str,
}

impl<T: Render> Progression<T> {
    pub fn new(catalog: ContentCatalog<T>, completion_message: &'static str) -> Self {
        Self {
            catalog,
            cursor: 0,
            display: StepDisplay::Empty,
            advance_visible: true,
            completion_message,
        }
    }

    /// Display the item under the cursor, or the completion message at the end
    pub fn render_current(&mut self) {
        match self.catalog.get(self.cursor) {
            Some(item) => {
                self.display = StepDisplay::Item { index: self.cursor, rendered: item.render() };
            }
            None => self.show_completed(),
        }
    }

    /// Show the item under the cursor and move past it
    pub fn advance(&mut self) {
        if self.cursor < self.catalog.len() {
            self.render_current();
            self.cursor += 1;
            tracing::debug!(cursor = self.cursor, len = self.catalog.len(), "advanced");
        } else {
            self.show_completed();
        }
    }

    /// Back to the initial state
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.display = StepDisplay::Empty;
        self.advance_visible = true;
    }

    fn show_completed(&mut self) {
        if self.advance_visible {
            tracing::info!(notice = self.completion_message, "progression completed");
        }
        self.display = StepDisplay::Completed(Rendered::notice(self.completion_message));
        self.advance_visible = false;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn status(&self) -> ProgressStatus {
        if self.cursor < self.catalog.len() {
            ProgressStatus::InProgress
        } else {
            ProgressStatus::Completed
        }
    }

    pub fn display(&self) -> &StepDisplay {
        &self.display
    }

    /// Whether the "next" control should be offered
    pub fn advance_visible(&self) -> bool {
        self.advance_visible
    }

    pub fn completion_message(&self) -> &'static str {
        self.completion_message
    }
}
