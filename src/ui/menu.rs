//! Mode selection menu

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::layout::{self, Hint};
use crate::app::state::AppState;
use crate::content::Mode;
use crate::theme::Theme;

const TITLE: &str = "DOM Dojo";
const TAGLINE: &str = "Learn to manipulate the DOM, one step at a time";

const VIM_HINTS: &[Hint] = &[("1-3", "choose"), ("j/k", "move"), ("Enter", "open"), ("q", "quit")];
const ARROW_HINTS: &[Hint] =
    &[("1-3", "choose"), ("Up/Down", "move"), ("Enter", "open"), ("q", "quit")];

/// Footer hints; `j/k` are only offered when vim keys are on
pub fn hints(vim_keys: bool) -> &'static [Hint] {
    if vim_keys { VIM_HINTS } else { ARROW_HINTS }
}

/// One-line summary shown under each mode
fn mode_summary(mode: Mode) -> &'static str {
    match mode {
        Mode::Learning => "Step through the core DOM APIs",
        Mode::Techniques => "Browse manipulation techniques with examples",
        Mode::Quiz => "Test yourself with a short quiz",
    }
}

/// Draw the menu
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let menu_area = layout::centered_rect(60, 70, area);

    let block = Block::default()
        .title(format!(" {} ", TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(menu_area);
    frame.render_widget(block, menu_area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(TAGLINE, Style::default().fg(theme.fg_muted))),
        Line::from(""),
        Line::from(""),
    ];

    for (i, mode) in Mode::ALL.iter().enumerate() {
        let is_selected = i == state.menu.selected;
        let prefix = if is_selected { "\u{25CF}" } else { "\u{25CB}" }; // ● or ○

        let style = if is_selected {
            Style::default()
                .fg(theme.accent_primary)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary)
        };

        lines.push(Line::from(Span::styled(
            format!("{} {}) {}", prefix, i + 1, mode.title()),
            style,
        )));
        lines.push(Line::from(Span::styled(
            mode_summary(*mode),
            Style::default().fg(theme.fg_muted),
        )));
        lines.push(Line::from(""));
    }

    let para = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_hints_only_when_enabled() {
        assert!(hints(true).contains(&("j/k", "move")));
        assert!(!hints(false).iter().any(|(key, _)| *key == "j/k"));
    }
}
