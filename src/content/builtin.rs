//! Built-in lesson content

use super::model::{Catalogs, ContentCatalog, LearningStep, QuizQuestion, Technique};

const LEARNING_STEPS: &[&str] = &[
    "Step 1: Use `document.getElementById()` to select an element by its ID.",
    "Step 2: Use `document.querySelector()` to select elements with CSS selectors.",
    "Step 3: Use `document.createElement()` to create new elements.",
    "Step 4: Use `element.appendChild()` to append a new element to a parent.",
    "Step 5: Use `element.classList.add()` to add classes for styling.",
    "Step 6: Use `element.setAttribute()` to add or modify attributes.",
    "Step 7: Use `element.remove()` to remove elements from the DOM.",
    "Step 8: Use `element.textContent` or `element.innerHTML` to update content.",
    "Step 9: Use `element.style` to update inline styles dynamically.",
];

/// (title, example, description)
const TECHNIQUES: &[(&str, &str, &str)] = &[
    (
        "Select Elements by Class or Tag",
        "document.querySelectorAll('.class-name');",
        "Select all elements matching a specific CSS selector.",
    ),
    (
        "Insert HTML Content",
        "element.innerHTML = '<p>New Content</p>';",
        "Directly set HTML content for an element. Use cautiously to avoid security risks.",
    ),
    (
        "Event Listeners",
        "element.addEventListener('click', callbackFunction);",
        "Attach event listeners to handle user interactions like clicks or key presses.",
    ),
    (
        "Remove Classes",
        "element.classList.remove('class-name');",
        "Remove specific classes from an element for styling changes.",
    ),
    (
        "Toggle Classes",
        "element.classList.toggle('class-name');",
        "Add or remove a class based on its current state.",
    ),
    (
        "Modify Styles Dynamically",
        "element.style.backgroundColor = 'red';",
        "Directly modify inline styles for elements.",
    ),
    (
        "Clone Nodes",
        "const clone = element.cloneNode(true);",
        "Clone an element, optionally including its child nodes.",
    ),
    ("Remove Nodes", "element.remove();", "Remove an element from the DOM entirely."),
];

/// (question, correct answer, explanation)
const QUIZ_QUESTIONS: &[(&str, &str, &str)] = &[
    (
        "How do you select an element by its unique ID?",
        "getElementById",
        "The `getElementById` method is used to select an element using its unique ID.",
    ),
    (
        "How do you create a new element?",
        "createElement",
        "The `createElement` method is used to create new elements in the DOM.",
    ),
    (
        "How do you attach an event listener to an element?",
        "addEventListener",
        "The `addEventListener` method allows you to listen for events like clicks or keypresses.",
    ),
];

pub fn learning_steps() -> Vec<LearningStep> {
    LEARNING_STEPS.iter().map(|s| LearningStep::new(*s)).collect()
}

pub fn techniques() -> Vec<Technique> {
    TECHNIQUES.iter().map(|&(t, e, d)| Technique::new(t, e, d)).collect()
}

pub fn quiz_questions() -> Vec<QuizQuestion> {
    QUIZ_QUESTIONS.iter().map(|&(q, a, e)| QuizQuestion::new(q, a, e)).collect()
}

impl Catalogs {
    /// The lessons that ship with the binary
    pub fn builtin() -> Self {
        Self {
            learning: ContentCatalog::new(learning_steps()),
            techniques: ContentCatalog::new(techniques()),
            quiz: ContentCatalog::new(quiz_questions()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Mode;

    #[test]
    fn builtin_sizes() {
        let catalogs = Catalogs::builtin();
        assert_eq!(catalogs.len_of(Mode::Learning), 9);
        assert_eq!(catalogs.len_of(Mode::Techniques), 8);
        assert_eq!(catalogs.len_of(Mode::Quiz), 3);
    }

    #[test]
    fn first_quiz_answer_is_get_element_by_id() {
        let catalogs = Catalogs::builtin();
        assert_eq!(catalogs.quiz.get(0).map(|q| q.correct_answer.as_str()), Some("getElementById"));
    }

    #[test]
    fn builtin_answers_have_no_surrounding_whitespace() {
        for q in quiz_questions() {
            assert_eq!(q.correct_answer.trim(), q.correct_answer);
        }
    }
}
