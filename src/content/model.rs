//! Content model for the three modes
//!
//! Every mode owns an ordered, fixed-length list of items. The list is shared
//! behind an `Arc` so controllers can hold it without copying.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One of the three interactive activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Learning,
    Techniques,
    Quiz,
}

impl Mode {
    /// All modes in menu order
    pub const ALL: [Mode; 3] = [Mode::Learning, Mode::Techniques, Mode::Quiz];

    /// Title shown in the menu and panel borders
    pub fn title(&self) -> &'static str {
        match self {
            Self::Learning => "Learning Mode",
            Self::Techniques => "DOM Manipulation Techniques",
            Self::Quiz => "Quiz Mode",
        }
    }

    /// Key used for this mode in catalog files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Self::Learning => "learning",
            Self::Techniques => "techniques",
            Self::Quiz => "quiz",
        }
    }

    /// Parse a mode name (accepts a few aliases)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "learning" | "learn" | "steps" => Some(Self::Learning),
            "techniques" | "technique" | "manipulation" | "dom" => Some(Self::Techniques),
            "quiz" | "questions" => Some(Self::Quiz),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single guided learning step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LearningStep(pub String);

impl LearningStep {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

/// A DOM-manipulation technique with a code example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technique {
    /// Short name of the technique
    pub title: String,
    /// JavaScript example, shown verbatim
    pub example: String,
    /// What the technique does
    pub description: String,
}

impl Technique {
    pub fn new(
        title: impl Into<String>,
        example: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self { title: title.into(), example: example.into(), description: description.into() }
    }
}

/// A quiz question with its expected answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    /// Compared exactly (case-sensitive) against the trimmed user input
    #[serde(rename = "correctAnswer", alias = "correct_answer")]
    pub correct_answer: String,
    /// Shown after every submission, right or wrong
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new(
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            correct_answer: correct_answer.into(),
            explanation: explanation.into(),
        }
    }
}

/// An ordered, immutable list of items for one mode
#[derive(Debug)]
pub struct ContentCatalog<T> {
    items: Arc<[T]>,
}

impl<T> ContentCatalog<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items: items.into() }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

// Manual impl: cloning shares the list and must not require `T: Clone`
impl<T> Clone for ContentCatalog<T> {
    fn clone(&self) -> Self {
        Self { items: Arc::clone(&self.items) }
    }
}

impl<T> Deref for ContentCatalog<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for ContentCatalog<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

/// The catalogs for all three modes
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub learning: ContentCatalog<LearningStep>,
    pub techniques: ContentCatalog<Technique>,
    pub quiz: ContentCatalog<QuizQuestion>,
}

impl Catalogs {
    /// Number of items in the catalog for `mode`
    pub fn len_of(&self, mode: Mode) -> usize {
        match mode {
            Mode::Learning => self.learning.len(),
            Mode::Techniques => self.techniques.len(),
            Mode::Quiz => self.quiz.len(),
        }
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_past_end_is_none() {
        let catalog = ContentCatalog::new(vec![LearningStep::new("one")]);
        assert!(catalog.get(0).is_some());
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn clone_shares_items() {
        let catalog = ContentCatalog::new(vec![LearningStep::new("one")]);
        let other = catalog.clone();
        assert!(std::ptr::eq(catalog.get(0).unwrap(), other.get(0).unwrap()));
    }

    #[test]
    fn mode_parse_aliases() {
        assert_eq!(Mode::parse("learning"), Some(Mode::Learning));
        assert_eq!(Mode::parse("DOM"), Some(Mode::Techniques));
        assert_eq!(Mode::parse(" quiz "), Some(Mode::Quiz));
        assert_eq!(Mode::parse("nope"), None);
    }

    #[test]
    fn quiz_question_uses_camel_case_answer_key() {
        let json = r#"{"question":"Q","correctAnswer":"A","explanation":"E"}"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.correct_answer, "A");

        let json = r#"{"question":"Q","correct_answer":"B","explanation":"E"}"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.correct_answer, "B");
    }

    #[test]
    fn learning_step_is_a_plain_string_in_json() {
        let step: LearningStep = serde_json::from_str(r#""Step 1""#).unwrap();
        assert_eq!(step.text(), "Step 1");
    }
}
