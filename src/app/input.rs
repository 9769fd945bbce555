//! Key handling: maps key presses to controls for the visible view

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::router::View;
use crate::content::Mode;

/// The named controls a user can activate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// One of the three mode buttons on the menu
    SelectMode(Mode),
    BackToMenu,
    AdvanceLearning,
    AdvanceTechniques,
    SubmitAnswer,
    NextQuestion,
    /// Restart every mode from the beginning
    ResetAll,
    Quit,
}

/// Edits to the quiz answer input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// What a key press means in the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Control(Control),
    Edit(Edit),
    MenuUp,
    MenuDown,
    /// Activate the highlighted menu entry
    MenuSelect,
}

/// Map a key press to an input for `view`
pub fn map_key(view: View, key: KeyEvent, vim_keys: bool) -> Option<Input> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Input::Control(Control::Quit)),
            KeyCode::Char('r') => Some(Input::Control(Control::ResetAll)),
            _ => None,
        };
    }

    match view {
        View::Menu => map_menu_key(key.code, vim_keys),
        View::Learning => map_step_key(key.code, Control::AdvanceLearning, vim_keys),
        View::Techniques => map_step_key(key.code, Control::AdvanceTechniques, vim_keys),
        View::Quiz => map_quiz_key(key.code),
    }
}

fn map_menu_key(code: KeyCode, vim_keys: bool) -> Option<Input> {
    match code {
        KeyCode::Char('1') => Some(Input::Control(Control::SelectMode(Mode::Learning))),
        KeyCode::Char('2') => Some(Input::Control(Control::SelectMode(Mode::Techniques))),
        KeyCode::Char('3') => Some(Input::Control(Control::SelectMode(Mode::Quiz))),
        KeyCode::Up => Some(Input::MenuUp),
        KeyCode::Down => Some(Input::MenuDown),
        KeyCode::Char('k') if vim_keys => Some(Input::MenuUp),
        KeyCode::Char('j') if vim_keys => Some(Input::MenuDown),
        KeyCode::Enter => Some(Input::MenuSelect),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Control(Control::Quit)),
        _ => None,
    }
}

fn map_step_key(code: KeyCode, advance: Control, vim_keys: bool) -> Option<Input> {
    match code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Right => {
            Some(Input::Control(advance))
        }
        KeyCode::Char('l') if vim_keys => Some(Input::Control(advance)),
        KeyCode::Esc => Some(Input::Control(Control::BackToMenu)),
        KeyCode::Char('b') if vim_keys => Some(Input::Control(Control::BackToMenu)),
        KeyCode::Char('q') => Some(Input::Control(Control::Quit)),
        _ => None,
    }
}

// Every printable key is answer text here, so there are no letter shortcuts
fn map_quiz_key(code: KeyCode) -> Option<Input> {
    match code {
        KeyCode::Enter => Some(Input::Control(Control::SubmitAnswer)),
        KeyCode::Tab => Some(Input::Control(Control::NextQuestion)),
        KeyCode::Esc => Some(Input::Control(Control::BackToMenu)),
        KeyCode::Char(c) => Some(Input::Edit(Edit::Insert(c))),
        KeyCode::Backspace => Some(Input::Edit(Edit::Backspace)),
        KeyCode::Delete => Some(Input::Edit(Edit::Delete)),
        KeyCode::Left => Some(Input::Edit(Edit::Left)),
        KeyCode::Right => Some(Input::Edit(Edit::Right)),
        KeyCode::Home => Some(Input::Edit(Edit::Home)),
        KeyCode::End => Some(Input::Edit(Edit::End)),
        _ => None,
    }
}
