//! Structured rendering of content items
//!
//! Items never produce markup. They render to lines of [`Fragment`]s that the
//! terminal UI styles, so any text (including text that looks like HTML) is shown
//! exactly as written.

use pulldown_cmark::{Event, Parser};

use super::model::{Catalogs, LearningStep, Mode, QuizQuestion, Technique};

/// Language tag attached to technique examples
pub const EXAMPLE_LANGUAGE: &str = "javascript";

/// A styled piece of a rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Item title
    Heading(String),
    /// Field label such as "Example:"
    Label(String),
    /// Code, either inline (no language) or a highlighted example
    Code { text: String, language: Option<String> },
    /// Body text
    Text(String),
    /// Status line, e.g. a completion message
    Notice(String),
}

impl Fragment {
    /// The underlying text, without any decoration
    pub fn text(&self) -> &str {
        match self {
            Self::Heading(s) | Self::Label(s) | Self::Text(s) | Self::Notice(s) => s,
            Self::Code { text, .. } => text,
        }
    }
}

/// A rendered item: lines of fragments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    lines: Vec<Vec<Fragment>>,
}

impl Rendered {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single notice line
    pub fn notice(message: impl Into<String>) -> Self {
        Self { lines: vec![vec![Fragment::Notice(message.into())]] }
    }

    /// Append a line
    pub fn push_line(&mut self, line: Vec<Fragment>) {
        self.lines.push(line);
    }

    /// Append an empty spacer line
    pub fn push_blank(&mut self) {
        self.lines.push(Vec::new());
    }

    pub fn lines(&self) -> &[Vec<Fragment>] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain-text form. Inline code keeps its back-ticks.
    pub fn to_plain(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(|fragment| match fragment {
                        Fragment::Code { text, language: None } => format!("`{}`", text),
                        other => other.text().to_string(),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Anything a progression controller can display
pub trait Render {
    fn render(&self) -> Rendered;
}

impl Render for LearningStep {
    fn render(&self) -> Rendered {
        let mut rendered = Rendered::new();
        for line in render_inline(self.text()) {
            rendered.push_line(line);
        }
        rendered
    }
}

impl Render for Technique {
    fn render(&self) -> Rendered {
        let mut rendered = Rendered::new();
        rendered.push_line(vec![Fragment::Heading(self.title.clone())]);
        rendered.push_blank();
        rendered.push_line(vec![
            Fragment::Label("Example: ".to_string()),
            Fragment::Code {
                text: self.example.clone(),
                language: Some(EXAMPLE_LANGUAGE.to_string()),
            },
        ]);
        rendered.push_blank();
        for line in render_inline(&self.description) {
            rendered.push_line(line);
        }
        rendered
    }
}

impl Render for QuizQuestion {
    fn render(&self) -> Rendered {
        let mut rendered = Rendered::new();
        rendered.push_line(vec![Fragment::Heading(self.question.clone())]);
        rendered.push_line(vec![
            Fragment::Label("Answer: ".to_string()),
            Fragment::Code { text: self.correct_answer.clone(), language: None },
        ]);
        for line in render_inline(&self.explanation) {
            rendered.push_line(line);
        }
        rendered
    }
}

/// Plain-text listing of every item in one mode, numbered from 1
pub fn listing(catalogs: &Catalogs, mode: Mode) -> String {
    fn numbered<T: Render>(items: &[T]) -> Vec<String> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item.render().to_plain()))
            .collect()
    }

    let entries = match mode {
        Mode::Learning => numbered(catalogs.learning.as_slice()),
        Mode::Techniques => numbered(catalogs.techniques.as_slice()),
        Mode::Quiz => numbered(catalogs.quiz.as_slice()),
    };
    let separator = if mode == Mode::Learning { "\n" } else { "\n\n" };
    entries.join(separator)
}

/// Split text into lines of verbatim `Text` and inline `Code` fragments.
///
/// Only back-tick code spans are given meaning. Every other character is kept
/// exactly as written, so emphasis markers, list numbers, headings, entities,
/// escapes and HTML all show up unchanged.
pub fn render_inline(source: &str) -> Vec<Vec<Fragment>> {
    let mut lines: Vec<Vec<Fragment>> = vec![Vec::new()];
    let mut pos = 0;

    for (event, range) in Parser::new(source).into_offset_iter() {
        let Event::Code(code) = event else {
            continue;
        };
        if range.start < pos {
            continue;
        }
        push_verbatim(&mut lines, &source[pos..range.start]);
        if let Some(line) = lines.last_mut() {
            line.push(Fragment::Code { text: code.to_string(), language: None });
        }
        pos = range.end;
    }
    push_verbatim(&mut lines, &source[pos..]);

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Append source text, starting a new line at each line break
fn push_verbatim(lines: &mut Vec<Vec<Fragment>>, text: &str) {
    for (i, part) in text.split('\n').enumerate() {
        if i > 0 {
            lines.push(Vec::new());
        }
        push_text(lines.last_mut(), part.strip_suffix('\r').unwrap_or(part));
    }
}

/// Append text to a line, merging with a trailing text fragment
fn push_text(line: Option<&mut Vec<Fragment>>, part: &str) {
    let Some(line) = line else {
        return;
    };
    if part.is_empty() {
        return;
    }
    if let Some(Fragment::Text(existing)) = line.last_mut() {
        existing.push_str(part);
    } else {
        line.push(Fragment::Text(part.to_string()));
    }
}
