//! Loading catalogs from a JSON catalog file

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::builtin;
use super::model::{Catalogs, ContentCatalog, LearningStep, Mode, QuizQuestion, Technique};

/// Errors that can occur while loading a catalog file
#[derive(Debug, Error)]
pub enum ContentError {
    /// The catalog file could not be read
    #[error("Failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid catalog JSON
    #[error("Failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is empty
    #[error("{mode} item {index}: field `{field}` must not be empty")]
    EmptyField { mode: Mode, index: usize, field: &'static str },

    /// A quiz answer that trimmed user input could never match
    #[error("{mode} item {index}: correct answer {answer:?} has surrounding whitespace")]
    UntrimmedAnswer { mode: Mode, index: usize, answer: String },
}

/// On-disk shape of a catalog file. Missing modes fall back to the built-in lists.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    learning: Option<Vec<LearningStep>>,
    #[serde(default)]
    techniques: Option<Vec<Technique>>,
    #[serde(default)]
    quiz: Option<Vec<QuizQuestion>>,
}

impl Catalogs {
    /// Load catalogs from a JSON file
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ContentError::Io { path: path.to_path_buf(), source })?;
        let catalogs = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            learning = catalogs.learning.len(),
            techniques = catalogs.techniques.len(),
            quiz = catalogs.quiz.len(),
            "loaded catalog file"
        );
        Ok(catalogs)
    }

    /// Parse and validate catalogs from JSON text
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let learning = file.learning.unwrap_or_else(builtin::learning_steps);
        let techniques = file.techniques.unwrap_or_else(builtin::techniques);
        let quiz = file.quiz.unwrap_or_else(builtin::quiz_questions);

        validate_techniques(&techniques)?;
        validate_quiz(&quiz)?;

        Ok(Self {
            learning: ContentCatalog::new(learning),
            techniques: ContentCatalog::new(techniques),
            quiz: ContentCatalog::new(quiz),
        })
    }
}

fn require(value: &str, mode: Mode, index: usize, field: &'static str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField { mode, index, field });
    }
    Ok(())
}

fn validate_techniques(techniques: &[Technique]) -> Result<(), ContentError> {
    for (index, technique) in techniques.iter().enumerate() {
        require(&technique.title, Mode::Techniques, index, "title")?;
    }
    Ok(())
}

fn validate_quiz(questions: &[QuizQuestion]) -> Result<(), ContentError> {
    for (index, q) in questions.iter().enumerate() {
        require(&q.question, Mode::Quiz, index, "question")?;
        require(&q.correct_answer, Mode::Quiz, index, "correctAnswer")?;
        if q.correct_answer.trim() != q.correct_answer {
            return Err(ContentError::UntrimmedAnswer {
                mode: Mode::Quiz,
                index,
                answer: q.correct_answer.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_object_uses_builtin_lists() {
        let catalogs = Catalogs::from_json("{}").unwrap();
        assert_eq!(catalogs.learning.len(), 9);
        assert_eq!(catalogs.techniques.len(), 8);
        assert_eq!(catalogs.quiz.len(), 3);
    }

    #[test]
    fn present_mode_replaces_builtin() {
        let json = r#"{"learning": ["only step"]}"#;
        let catalogs = Catalogs::from_json(json).unwrap();
        assert_eq!(catalogs.learning.len(), 1);
        assert_eq!(catalogs.learning.get(0), Some(&LearningStep::new("only step")));
        assert_eq!(catalogs.quiz.len(), 3);
    }

    #[test]
    fn empty_list_is_allowed() {
        let catalogs = Catalogs::from_json(r#"{"quiz": []}"#).unwrap();
        assert!(catalogs.quiz.is_empty());
    }

    #[test]
    fn empty_answer_is_rejected_with_index() {
        let json = r#"{"quiz": [
            {"question": "Q1", "correctAnswer": "a", "explanation": ""},
            {"question": "Q2", "correctAnswer": "  ", "explanation": ""}
        ]}"#;
        match Catalogs::from_json(json) {
            Err(ContentError::EmptyField { mode, index, field }) => {
                assert_eq!(mode, Mode::Quiz);
                assert_eq!(index, 1);
                assert_eq!(field, "correctAnswer");
            }
            other => panic!("Expected EmptyField, got {:?}", other),
        }
    }

    #[test]
    fn untrimmed_answer_is_rejected() {
        let json = r#"{"quiz": [{"question": "Q", "correctAnswer": " a", "explanation": ""}]}"#;
        assert!(matches!(
            Catalogs::from_json(json),
            Err(ContentError::UntrimmedAnswer { index: 0, .. })
        ));
    }

    #[test]
    fn empty_technique_title_is_rejected() {
        let json =
            r#"{"techniques": [{"title": "", "example": "x();", "description": "d"}]}"#;
        let err = Catalogs::from_json(json).unwrap_err();
        assert_eq!(err.to_string(), "techniques item 0: field `title` must not be empty");
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(Catalogs::from_json(r#"{"extra": []}"#), Err(ContentError::Json(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"learning": ["a", "b"]}}"#).unwrap();

        let catalogs = Catalogs::load(file.path()).unwrap();
        assert_eq!(catalogs.learning.len(), 2);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalogs::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ContentError::Io { .. })));
    }
}
