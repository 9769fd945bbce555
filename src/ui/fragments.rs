//! Styling of rendered content fragments

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::{Fragment, Rendered};
use crate::syntax;
use crate::theme::Theme;

/// Convert a rendered item into styled lines
pub fn to_lines(rendered: &Rendered, theme: &Theme) -> Vec<Line<'static>> {
    rendered.lines().iter().map(|line| fragments_to_line(line, theme)).collect()
}

/// Style one line of fragments
pub fn fragments_to_line(fragments: &[Fragment], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for fragment in fragments {
        match fragment {
            Fragment::Heading(text) => spans.push(Span::styled(
                text.clone(),
                Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
            )),
            Fragment::Label(text) => spans.push(Span::styled(
                text.clone(),
                Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
            )),
            Fragment::Code { text, language: Some(lang) } => {
                spans.extend(syntax::highlight_line(text, Some(lang.as_str()), theme));
            }
            Fragment::Code { text, language: None } => {
                spans.push(Span::styled(text.clone(), Style::default().fg(theme.code)));
            }
            Fragment::Text(text) => {
                spans.push(Span::styled(text.clone(), Style::default().fg(theme.fg_primary)));
            }
            Fragment::Notice(text) => spans.push(Span::styled(
                text.clone(),
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            )),
        }
    }
    Line::from(spans)
}

/// Style fragments in a single color, bolding code spans (used for quiz feedback)
pub fn tinted_line(fragments: &[Fragment], style: Style) -> Line<'static> {
    let spans: Vec<Span<'static>> = fragments
        .iter()
        .map(|fragment| match fragment {
            Fragment::Code { text, .. } => {
                Span::styled(text.clone(), style.add_modifier(Modifier::BOLD))
            }
            other => Span::styled(other.text().to_string(), style),
        })
        .collect();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{LearningStep, Render, Technique};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn inline_code_uses_code_color() {
        let theme = Theme::default();
        let rendered = LearningStep::new("Use `element.remove()` now").render();
        let lines = to_lines(&rendered, &theme);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[1].content, "element.remove()");
        assert_eq!(lines[0].spans[1].style.fg, Some(theme.code));
        assert_eq!(line_text(&lines[0]), "Use element.remove() now");
    }

    #[test]
    fn technique_example_text_survives_highlighting() {
        let theme = Theme::default();
        let technique = Technique::new("T", "element.innerHTML = '<p>x</p>';", "d");
        let lines = to_lines(&technique.render(), &theme);
        assert_eq!(line_text(&lines[2]), "Example: element.innerHTML = '<p>x</p>';");
    }

    #[test]
    fn tinted_line_keeps_one_color() {
        let theme = Theme::default();
        let style = Style::default().fg(theme.error);
        let fragments = vec![
            Fragment::Text("Wrong! The ".into()),
            Fragment::Code { text: "createElement".into(), language: None },
        ];
        let line = tinted_line(&fragments, style);
        assert!(line.spans.iter().all(|s| s.style.fg == Some(theme.error)));
        assert_eq!(line_text(&line), "Wrong! The createElement");
    }
}
