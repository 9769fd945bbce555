//! Quiz controller
//!
//! Each question waits for an answer, checks it, and only then offers the
//! next-question control. Moving past the last question finishes the quiz and
//! hides every input control.

use crate::content::{ContentCatalog, QuizQuestion};

/// Question text shown once every question has been answered
pub const QUIZ_COMPLETE: &str = "Quiz Complete! You've answered all the questions.";

const CORRECT_PREFIX: &str = "Correct! ";
const WRONG_PREFIX: &str = "Wrong! ";

/// Outcome of checking an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Per-question attempt state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuizAttempt {
    #[default]
    AwaitingAnswer,
    Answered(Verdict),
    /// Every question has been visited; terminal
    Finished,
}

/// Feedback shown after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub verdict: Verdict,
    pub text: String,
}

impl Feedback {
    pub fn is_positive(&self) -> bool {
        self.verdict == Verdict::Correct
    }
}

/// Text input for the answer, with a character-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerInput {
    value: String,
    cursor: usize,
}

impl AnswerInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position as a character index
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Replace the whole value and put the cursor at the end
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.value.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.value.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.value.remove(byte_idx);
        }
    }

    /// Delete the character under the cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.value.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }
}

/// Check a raw answer against the expected one.
///
/// Only the user input is trimmed; the comparison is exact and case-sensitive.
pub fn check_answer(input: &str, correct_answer: &str) -> Verdict {
    if input.trim() == correct_answer { Verdict::Correct } else { Verdict::Incorrect }
}

/// Drives a quiz over a fixed list of questions
#[derive(Debug, Clone)]
pub struct QuizController {
    catalog: ContentCatalog<QuizQuestion>,
    cursor: usize,
    attempt: QuizAttempt,
    question_text: String,
    input: AnswerInput,
    feedback: Option<Feedback>,
    input_visible: bool,
    submit_visible: bool,
    next_visible: bool,
}

impl QuizController {
    /// Create a controller with the first question loaded
    pub fn new(catalog: ContentCatalog<QuizQuestion>) -> Self {
        let mut quiz = Self {
            catalog,
            cursor: 0,
            attempt: QuizAttempt::AwaitingAnswer,
            question_text: String::new(),
            input: AnswerInput::default(),
            feedback: None,
            input_visible: true,
            submit_visible: true,
            next_visible: false,
        };
        quiz.load_question(0);
        quiz
    }

    /// Display question `index`, clearing the input and feedback.
    ///
    /// An out-of-range index finishes the quiz.
    pub fn load_question(&mut self, index: usize) {
        let Some(question) = self.catalog.get(index) else {
            self.cursor = self.catalog.len();
            self.finish();
            return;
        };
        self.cursor = index;
        self.question_text = question.question.clone();
        self.input.clear();
        self.feedback = None;
        self.next_visible = false;
        self.attempt = QuizAttempt::AwaitingAnswer;
        tracing::debug!(index, "loaded quiz question");
    }

    /// Check `user_input` against the current question.
    ///
    /// Returns `None` once the quiz is finished. Re-submitting an answered
    /// question checks it again.
    pub fn submit_answer(&mut self, user_input: &str) -> Option<Verdict> {
        if self.attempt == QuizAttempt::Finished {
            return None;
        }
        let question = self.catalog.get(self.cursor)?;

        let verdict = check_answer(user_input, &question.correct_answer);
        let prefix = match verdict {
            Verdict::Correct => CORRECT_PREFIX,
            Verdict::Incorrect => WRONG_PREFIX,
        };
        let text = format!("{}{}", prefix, question.explanation);
        self.feedback = Some(Feedback { verdict, text });
        self.next_visible = true;
        self.attempt = QuizAttempt::Answered(verdict);
        tracing::debug!(index = self.cursor, ?verdict, "answer submitted");
        Some(verdict)
    }

    /// Submit whatever is in the answer input
    pub fn submit(&mut self) -> Option<Verdict> {
        let value = self.input.value().to_string();
        self.submit_answer(&value)
    }

    /// Move to the next question, or finish after the last one
    pub fn go_to_next_question(&mut self) {
        if self.cursor >= self.catalog.len() {
            self.finish();
            return;
        }
        self.cursor += 1;
        if self.cursor < self.catalog.len() {
            self.load_question(self.cursor);
        } else {
            self.finish();
        }
    }

    /// Start over from the first question
    pub fn reset(&mut self) {
        self.input_visible = true;
        self.submit_visible = true;
        self.load_question(0);
    }

    fn finish(&mut self) {
        if self.attempt != QuizAttempt::Finished {
            tracing::info!(questions = self.catalog.len(), "quiz finished");
        }
        self.attempt = QuizAttempt::Finished;
        self.question_text = QUIZ_COMPLETE.to_string();
        self.feedback = None;
        self.input_visible = false;
        self.submit_visible = false;
        self.next_visible = false;
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

    pub fn attempt(&self) -> QuizAttempt {
        self.attempt
    }

    pub fn is_finished(&self) -> bool {
        self.attempt == QuizAttempt::Finished
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn input(&self) -> &AnswerInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut AnswerInput {
        &mut self.input
    }

    pub fn input_visible(&self) -> bool {
        self.input_visible
    }

    pub fn submit_visible(&self) -> bool {
        self.submit_visible
    }

    pub fn next_visible(&self) -> bool {
        self.next_visible
    }
}
