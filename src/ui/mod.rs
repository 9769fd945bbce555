//! UI rendering components

pub mod fragments;
pub mod layout;
pub mod menu;
pub mod quiz_panel;
pub mod step_panel;

use ratatui::{Frame, style::Style, widgets::Block};

use crate::app::router::View;
use crate::app::state::AppState;
use crate::content::Mode;
use crate::theme::Theme;

/// Main draw function: renders whichever view the router has visible
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme, vim_keys: bool) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    let (main, footer) = layout::split_footer(area);

    match state.view() {
        View::Menu => {
            menu::draw(frame, main, state, theme);
            layout::draw_hints(frame, footer, menu::hints(vim_keys), theme);
        }
        View::Learning => {
            step_panel::draw(frame, main, Mode::Learning, &state.learning, theme);
            layout::draw_hints(frame, footer, step_panel::hints(&state.learning), theme);
        }
        View::Techniques => {
            step_panel::draw(frame, main, Mode::Techniques, &state.techniques, theme);
            layout::draw_hints(frame, footer, step_panel::hints(&state.techniques), theme);
        }
        View::Quiz => {
            quiz_panel::draw(frame, main, &state.quiz, theme);
            layout::draw_hints(frame, footer, &quiz_panel::hints(&state.quiz), theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::app::input::Control;
    use crate::content::{Catalogs, QuizQuestion};

    fn render_buffer(state: &AppState, theme: &Theme) -> Buffer {
        render_with_keys(state, theme, true)
    }

    fn render_with_keys(state: &AppState, theme: &Theme, vim_keys: bool) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, state, theme, vim_keys)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows_of(buffer: &Buffer) -> Vec<String> {
        (0..buffer.area.height)
            .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    fn render(state: &AppState) -> Vec<String> {
        rows_of(&render_buffer(state, &Theme::default()))
    }

    /// Quiz state over one question whose explanation looks like markup
    fn quiz_state(explanation: &str) -> AppState {
        let catalogs = Catalogs {
            quiz: vec![QuizQuestion::new("Which method?", "querySelector", explanation)].into(),
            ..Catalogs::builtin()
        };
        let mut state = AppState::new(catalogs);
        state.apply(Control::SelectMode(Mode::Quiz));
        state
    }

    /// Cell position of `needle` on screen, as (x, y)
    fn find(rows: &[String], needle: &str) -> Option<(u16, u16)> {
        rows.iter().enumerate().find_map(|(y, row)| {
            let byte = row.find(needle)?;
            Some((row[..byte].chars().count() as u16, y as u16))
        })
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn menu_lists_all_modes() {
        let rows = render(&AppState::default());
        for mode in Mode::ALL {
            assert!(screen_contains(&rows, mode.title()), "missing {}", mode.title());
        }
    }

    #[test]
    fn quiz_view_shows_question_and_prompt() {
        let mut state = AppState::default();
        state.apply(Control::SelectMode(Mode::Quiz));
        let rows = render(&state);
        assert!(screen_contains(&rows, "How do you select an element by its unique ID?"));
        assert!(screen_contains(&rows, "[Enter] submit"));
        assert!(!screen_contains(&rows, "[Tab]"));
    }

    #[test]
    fn learning_view_shows_current_step() {
        let mut state = AppState::default();
        state.apply(Control::SelectMode(Mode::Learning));
        state.apply(Control::AdvanceLearning);
        let rows = render(&state);
        assert!(screen_contains(&rows, "document.getElementById()"));
        assert!(screen_contains(&rows, "(1/9)"));
    }

    #[test]
    fn finished_quiz_hides_input() {
        let mut state = AppState::default();
        state.apply(Control::SelectMode(Mode::Quiz));
        for _ in 0..3 {
            state.apply(Control::SubmitAnswer);
            state.apply(Control::NextQuestion);
        }
        let rows = render(&state);
        assert!(screen_contains(&rows, "Quiz Complete!"));
        assert!(!screen_contains(&rows, "> "));
    }

    const MARKUP_EXPLANATION: &str = "Use *querySelector* & &lt;div&gt; # not a heading";

    #[test]
    fn wrong_answer_feedback_is_verbatim_in_error_color() {
        let theme = Theme::default();
        let mut state = quiz_state(MARKUP_EXPLANATION);
        state.quiz.submit_answer("getElementById");

        let buffer = render_buffer(&state, &theme);
        let rows = rows_of(&buffer);
        let expected = format!("Wrong! {}", MARKUP_EXPLANATION);
        let (x, y) = find(&rows, &expected).expect("feedback line on screen");
        for offset in 0..expected.len() as u16 {
            assert_eq!(buffer[(x + offset, y)].fg, theme.error);
        }
        assert!(screen_contains(&rows, "[Tab] next question"));
    }

    #[test]
    fn correct_answer_feedback_is_verbatim_in_success_color() {
        let theme = Theme::default();
        let mut state = quiz_state(MARKUP_EXPLANATION);
        state.quiz.submit_answer("  querySelector ");

        let buffer = render_buffer(&state, &theme);
        let rows = rows_of(&buffer);
        let expected = format!("Correct! {}", MARKUP_EXPLANATION);
        let (x, y) = find(&rows, &expected).expect("feedback line on screen");
        for offset in 0..expected.len() as u16 {
            assert_eq!(buffer[(x + offset, y)].fg, theme.success);
        }
    }

    #[test]
    fn menu_hints_follow_vim_setting() {
        let theme = Theme::default();
        let state = AppState::default();

        let rows = rows_of(&render_with_keys(&state, &theme, true));
        assert!(screen_contains(&rows, "[j/k] move"));

        let rows = rows_of(&render_with_keys(&state, &theme, false));
        assert!(!screen_contains(&rows, "[j/k]"));
        assert!(screen_contains(&rows, "[Up/Down] move"));
    }
}
