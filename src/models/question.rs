// ABOUTME: Question model for the qualification funnel
// A question is either free text or a single selection among fixed options

use serde::{Deserialize, Serialize};

/// How a question is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    FreeText,
    SingleChoice,
}

/// One selectable option of a single-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Stored in the answer set when selected
    pub value: String,
    /// Shown to the visitor
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique key into the answer set
    pub id: String,
    pub prompt: String,
    pub kind: QuestionKind,
    /// Ordered options, empty for free text questions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
}

impl Question {
    pub fn free_text(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind: QuestionKind::FreeText,
            options: Vec::new(),
        }
    }

    pub fn single_choice(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind: QuestionKind::SingleChoice,
            options,
        }
    }

    pub fn is_choice(&self) -> bool {
        self.kind == QuestionKind::SingleChoice
    }

    /// Position of the option whose value matches `value`
    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }
}
