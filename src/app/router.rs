//! Section routing: which view is on screen

use crate::content::Mode;

/// The four top-level views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Menu,
    Learning,
    Techniques,
    Quiz,
}

impl View {
    pub const ALL: [View; 4] = [View::Menu, View::Learning, View::Techniques, View::Quiz];
}

impl From<Mode> for View {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Learning => View::Learning,
            Mode::Techniques => View::Techniques,
            Mode::Quiz => View::Quiz,
        }
    }
}

/// Tracks the single visible view
#[derive(Debug, Clone, Default)]
pub struct SectionRouter {
    current: View,
}

impl SectionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `view` visible and hide every other view
    pub fn show(&mut self, view: View) {
        if self.current != view {
            tracing::debug!(from = ?self.current, to = ?view, "switching view");
        }
        self.current = view;
    }

    /// Back to the menu
    pub fn reset(&mut self) {
        self.show(View::Menu);
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn is_visible(&self, view: View) -> bool {
        self.current == view
    }

    /// Views that are currently visible (always exactly one)
    pub fn visible_views(&self) -> impl Iterator<Item = View> + '_ {
        View::ALL.into_iter().filter(|v| self.is_visible(*v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_menu() {
        let router = SectionRouter::new();
        assert_eq!(router.current(), View::Menu);
    }

    #[test]
    fn show_leaves_exactly_one_view_visible() {
        let mut router = SectionRouter::new();
        for view in View::ALL {
            router.show(view);
            let visible: Vec<_> = router.visible_views().collect();
            assert_eq!(visible, vec![view]);
        }
    }

    #[test]
    fn show_is_idempotent() {
        let mut router = SectionRouter::new();
        router.show(View::Quiz);
        router.show(View::Quiz);
        assert!(router.is_visible(View::Quiz));
        assert!(!router.is_visible(View::Menu));
    }

    #[test]
    fn reset_returns_to_menu() {
        let mut router = SectionRouter::new();
        router.show(View::Techniques);
        router.reset();
        assert_eq!(router.current(), View::Menu);
    }

    #[test]
    fn view_from_mode() {
        assert_eq!(View::from(Mode::Learning), View::Learning);
        assert_eq!(View::from(Mode::Techniques), View::Techniques);
        assert_eq!(View::from(Mode::Quiz), View::Quiz);
    }
}
