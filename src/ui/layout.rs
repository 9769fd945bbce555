//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::Theme;

/// A key hint: (key, what it does)
pub type Hint = (&'static str, &'static str);

/// Split the screen into the main area and a one-line hint footer
pub fn split_footer(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);
    (chunks[0], chunks[1])
}

/// Build the hint line, e.g. "[Enter] next  [Esc] menu"
pub fn hint_line(hints: &[Hint], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, label)) in hints.iter().enumerate() {
        let label =
            if i + 1 < hints.len() { format!(" {}  ", label) } else { format!(" {}", label) };
        spans.push(Span::styled(format!("[{}]", key), Style::default().fg(theme.fg_muted)));
        spans.push(Span::styled(label, Style::default().fg(theme.fg_secondary)));
    }
    Line::from(spans)
}

/// Draw the hint footer
pub fn draw_hints(frame: &mut Frame, area: Rect, hints: &[Hint], theme: &Theme) {
    let para = Paragraph::new(hint_line(hints, theme)).style(Style::default().bg(theme.bg_primary));
    frame.render_widget(para, area);
}

/// Create a centered rectangle with the given percentage of width and height
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_line_text() {
        let theme = Theme::default();
        let line = hint_line(&[("Enter", "next"), ("Esc", "menu")], &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[Enter] next  [Esc] menu");
    }

    #[test]
    fn footer_is_one_line() {
        let (main, footer) = split_footer(Rect::new(0, 0, 80, 24));
        assert_eq!(footer.height, 1);
        assert_eq!(main.height, 23);
    }

    #[test]
    fn centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(70, 70, outer);
        assert!(inner.x > 0 && inner.y > 0);
        assert!(inner.right() < outer.right() && inner.bottom() < outer.bottom());
    }
}
