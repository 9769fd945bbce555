//! Quiz panel: question, answer input and feedback

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::fragments;
use super::layout::Hint;
use crate::app::quiz::QuizController;
use crate::content::{Mode, render};
use crate::theme::Theme;

const ANSWER_PROMPT: &str = "> ";

/// Footer hints for the controls that are currently visible
pub fn hints(quiz: &QuizController) -> Vec<Hint> {
    let mut hints = Vec::new();
    if quiz.submit_visible() {
        hints.push(("Enter", "submit"));
    }
    if quiz.next_visible() {
        hints.push(("Tab", "next question"));
    }
    hints.push(("Esc", "menu"));
    hints.push(("Ctrl-C", "quit"));
    hints
}

/// Draw the quiz panel
pub fn draw(frame: &mut Frame, area: Rect, quiz: &QuizController, theme: &Theme) {
    let title = if quiz.is_finished() {
        format!(" {} - Results ", Mode::Quiz.title())
    } else {
        format!(" {} ", Mode::Quiz.title())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .padding(Padding::new(2, 2, 1, 1))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![];

    if !quiz.is_finished() {
        lines.push(Line::from(Span::styled(
            format!("Question {} of {}", quiz.cursor() + 1, quiz.len()),
            Style::default().fg(theme.fg_muted),
        )));
        lines.push(Line::from(""));
    }

    let question_style = if quiz.is_finished() {
        Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(quiz.question_text().to_string(), question_style)));
    lines.push(Line::from(""));

    if quiz.input_visible() {
        let mut spans =
            vec![Span::styled(ANSWER_PROMPT, Style::default().fg(theme.accent_primary))];
        spans.extend(input_spans(quiz.input().value(), quiz.input().cursor(), theme));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if let Some(feedback) = quiz.feedback() {
        let color = if feedback.is_positive() { theme.success } else { theme.error };
        for fragment_line in render::render_inline(&feedback.text) {
            lines.push(fragments::tinted_line(&fragment_line, Style::default().fg(color)));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Spans for the answer text with a visible block cursor
fn input_spans(text: &str, cursor_pos: usize, theme: &Theme) -> Vec<Span<'static>> {
    let base_style = Style::default().fg(theme.fg_secondary);
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();

    // Text before cursor
    if cursor_pos > 0 {
        let before: String = chars.iter().take(cursor_pos).collect();
        spans.push(Span::styled(before, base_style));
    }

    // Cursor character (or space if at end)
    let cursor_char = chars.get(cursor_pos).copied().unwrap_or(' ');
    let cursor_style =
        Style::default().fg(theme.bg_primary).bg(theme.cursor).add_modifier(Modifier::BOLD);
    spans.push(Span::styled(cursor_char.to_string(), cursor_style));

    // Text after cursor
    if cursor_pos + 1 < chars.len() {
        let after: String = chars.iter().skip(cursor_pos + 1).collect();
        spans.push(Span::styled(after, base_style));
    }

    spans
}
