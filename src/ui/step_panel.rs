//! Step panel shared by learning mode and the technique catalogue

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::fragments;
use super::layout::Hint;
use crate::app::progression::{Progression, StepDisplay};
use crate::content::{Mode, Render};
use crate::theme::Theme;

const NEXT_HINTS: &[Hint] = &[("Enter", "next"), ("Esc", "menu"), ("q", "quit")];
const DONE_HINTS: &[Hint] = &[("Esc", "menu"), ("q", "quit")];

/// Footer hints: the advance key is only offered while it does something
pub fn hints<T: Render>(progression: &Progression<T>) -> &'static [Hint] {
    if progression.advance_visible() { NEXT_HINTS } else { DONE_HINTS }
}

/// Border title, with a step counter once an item is showing
fn panel_title<T: Render>(mode: Mode, progression: &Progression<T>) -> String {
    match progression.display() {
        StepDisplay::Item { index, .. } => {
            format!(" {} ({}/{}) ", mode.title(), index + 1, progression.len())
        }
        _ => format!(" {} ", mode.title()),
    }
}

/// Draw a progression panel
pub fn draw<T: Render>(
    frame: &mut Frame,
    area: Rect,
    mode: Mode,
    progression: &Progression<T>,
    theme: &Theme,
) {
    let block = Block::default()
        .title(panel_title(mode, progression))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .padding(Padding::new(2, 2, 1, 1))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match progression.display() {
        StepDisplay::Empty => vec![Line::from(Span::styled(
            "Press [Enter] to begin.",
            Style::default().fg(theme.fg_muted),
        ))],
        StepDisplay::Item { rendered, .. } | StepDisplay::Completed(rendered) => {
            fragments::to_lines(rendered, theme)
        }
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::progression::LEARNING_COMPLETE;
    use crate::content::{ContentCatalog, LearningStep};

    fn progression(n: usize) -> Progression<LearningStep> {
        let items = (0..n).map(|i| LearningStep::new(format!("s{}", i))).collect();
        Progression::new(ContentCatalog::new(items), LEARNING_COMPLETE)
    }

    #[test]
    fn title_counts_steps() {
        let mut p = progression(3);
        assert_eq!(panel_title(Mode::Learning, &p), " Learning Mode ");
        p.advance();
        assert_eq!(panel_title(Mode::Learning, &p), " Learning Mode (1/3) ");
    }

    #[test]
    fn next_hint_disappears_when_done() {
        let mut p = progression(1);
        assert_eq!(hints(&p), NEXT_HINTS);
        p.advance();
        p.advance();
        assert_eq!(hints(&p), DONE_HINTS);
    }
}
