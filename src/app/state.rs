//! Application state: the router plus one controller per mode

use super::input::{Control, Edit, Input};
use super::progression::{LEARNING_COMPLETE, Progression, TECHNIQUES_COMPLETE};
use super::quiz::QuizController;
use super::router::{SectionRouter, View};
use crate::content::{Catalogs, LearningStep, Mode, Technique};

/// Menu selection state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    /// Index into `Mode::ALL`
    pub selected: usize,
}

impl MenuState {
    pub fn selected_mode(&self) -> Mode {
        Mode::ALL[self.selected % Mode::ALL.len()]
    }

    pub fn up(&mut self) {
        self.selected = self.selected.checked_sub(1).unwrap_or(Mode::ALL.len() - 1);
    }

    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % Mode::ALL.len();
    }
}

/// Whether the application should keep running after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Full application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub router: SectionRouter,
    pub menu: MenuState,
    pub learning: Progression<LearningStep>,
    pub techniques: Progression<Technique>,
    pub quiz: QuizController,
}

impl AppState {
    pub fn new(catalogs: Catalogs) -> Self {
        Self {
            router: SectionRouter::new(),
            menu: MenuState::default(),
            learning: Progression::new(catalogs.learning, LEARNING_COMPLETE),
            techniques: Progression::new(catalogs.techniques, TECHNIQUES_COMPLETE),
            quiz: QuizController::new(catalogs.quiz),
        }
    }

    /// The currently visible view
    pub fn view(&self) -> View {
        self.router.current()
    }

    /// Handle a mapped key press
    pub fn handle(&mut self, input: Input) -> Flow {
        match input {
            Input::Control(control) => return self.apply(control),
            Input::Edit(edit) => self.edit_answer(edit),
            Input::MenuUp => self.menu.up(),
            Input::MenuDown => self.menu.down(),
            Input::MenuSelect => {
                let mode = self.menu.selected_mode();
                return self.apply(Control::SelectMode(mode));
            }
        }
        Flow::Continue
    }

    /// Activate a named control. Controls that are currently hidden do nothing.
    pub fn apply(&mut self, control: Control) -> Flow {
        match control {
            Control::SelectMode(mode) => {
                if let Some(i) = Mode::ALL.iter().position(|m| *m == mode) {
                    self.menu.selected = i;
                }
                self.router.show(View::from(mode));
            }
            Control::BackToMenu => self.router.show(View::Menu),
            Control::AdvanceLearning => {
                if self.learning.advance_visible() {
                    self.learning.advance();
                }
            }
            Control::AdvanceTechniques => {
                if self.techniques.advance_visible() {
                    self.techniques.advance();
                }
            }
            Control::SubmitAnswer => {
                if self.quiz.submit_visible() {
                    self.quiz.submit();
                }
            }
            Control::NextQuestion => {
                if self.quiz.next_visible() {
                    self.quiz.go_to_next_question();
                }
            }
            Control::ResetAll => self.reset(),
            Control::Quit => return Flow::Exit,
        }
        Flow::Continue
    }

    /// Put every mode and the router back to their initial state
    pub fn reset(&mut self) {
        tracing::info!("resetting all modes");
        self.router.reset();
        self.menu = MenuState::default();
        self.learning.reset();
        self.techniques.reset();
        self.quiz.reset();
    }

    fn edit_answer(&mut self, edit: Edit) {
        if !self.quiz.input_visible() {
            return;
        }
        let input = self.quiz.input_mut();
        match edit {
            Edit::Insert(c) => input.insert_char(c),
            Edit::Backspace => input.delete_char(),
            Edit::Delete => input.delete_char_forward(),
            Edit::Left => input.move_left(),
            Edit::Right => input.move_right(),
            Edit::Home => input.move_start(),
            Edit::End => input.move_end(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalogs::builtin())
    }
}
