// ABOUTME: Step definitions for the qualification wizard
// Steps are defined once, validated at construction, and never mutated afterwards

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;
use thiserror::Error;

use super::question::{ChoiceOption, Question, QuestionKind};

/// Icon reference rendered next to a step in the progress header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepIcon {
    Users,
    Target,
    Trophy,
}

impl StepIcon {
    /// Terminal glyph for this icon
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Users => "👥",
            Self::Target => "🎯",
            Self::Trophy => "🏆",
        }
    }
}

/// One page of the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Position within the wizard, assigned by [`Steps::new`]
    pub index: usize,
    pub title: String,
    pub subtitle: String,
    pub icon: StepIcon,
    pub questions: Vec<Question>,
}

impl Step {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        icon: StepIcon,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            index: 0,
            title: title.into(),
            subtitle: subtitle.into(),
            icon,
            questions,
        }
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// Reasons a wizard definition is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("wizard must contain at least one step")]
    NoSteps,

    #[error("step {index} ('{title}') has no questions")]
    EmptyStep { index: usize, title: String },

    #[error("question id '{0}' is used more than once")]
    DuplicateQuestion(String),

    #[error("choice question '{0}' has no options")]
    NoOptions(String),

    #[error("choice question '{question}' repeats option value '{value}'")]
    DuplicateOption { question: String, value: String },
}

/// Validated, immutable, cheaply clonable list of wizard steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Steps(Arc<[Step]>);

impl Steps {
    pub fn new(mut steps: Vec<Step>) -> Result<Self, DefinitionError> {
        if steps.is_empty() {
            return Err(DefinitionError::NoSteps);
        }

        let mut seen = HashSet::new();
        for (index, step) in steps.iter_mut().enumerate() {
            step.index = index;
            if step.questions.is_empty() {
                return Err(DefinitionError::EmptyStep {
                    index,
                    title: step.title.clone(),
                });
            }
            for question in &step.questions {
                if !seen.insert(question.id.clone()) {
                    return Err(DefinitionError::DuplicateQuestion(question.id.clone()));
                }
                Self::check_options(question)?;
            }
        }

        Ok(Self(steps.into()))
    }

    fn check_options(question: &Question) -> Result<(), DefinitionError> {
        if question.kind != QuestionKind::SingleChoice {
            return Ok(());
        }
        if question.options.is_empty() {
            return Err(DefinitionError::NoOptions(question.id.clone()));
        }
        let mut values = HashSet::new();
        for option in &question.options {
            if !values.insert(option.value.as_str()) {
                return Err(DefinitionError::DuplicateOption {
                    question: question.id.clone(),
                    value: option.value.clone(),
                });
            }
        }
        Ok(())
    }

    /// Index of the final step
    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }

    pub fn as_slice(&self) -> &[Step] {
        &self.0
    }
}

impl Deref for Steps {
    type Target = [Step];

    fn deref(&self) -> &[Step] {
        &self.0
    }
}

fn choices(pairs: &[(&str, &str)]) -> Vec<ChoiceOption> {
    pairs.iter().map(|(v, l)| ChoiceOption::new(*v, *l)).collect()
}

/// The built-in BrandMagnet qualification questionnaire
pub fn qualification_steps() -> Result<Steps, DefinitionError> {
    let steps = vec![
        Step::new(
            "Personal Information",
            "Tell us about yourself",
            StepIcon::Users,
            vec![
                Question::free_text("name", "What is your name?"),
                Question::free_text("email", "What is your email address?"),
                Question::single_choice(
                    "experience",
                    "How many years of professional experience do you have?",
                    choices(&[
                        ("0-2", "0-2 years"),
                        ("3-5", "3-5 years"),
                        ("6-10", "6-10 years"),
                        ("10+", "10+ years"),
                    ]),
                ),
            ],
        ),
        Step::new(
            "Current Status",
            "Your career situation",
            StepIcon::Target,
            vec![
                Question::single_choice(
                    "employment",
                    "What is your current employment status?",
                    choices(&[
                        ("employed", "Employed full-time"),
                        ("part-time", "Employed part-time"),
                        ("freelance", "Freelancer/Self-employed"),
                        ("unemployed", "Looking for opportunities"),
                    ]),
                ),
                Question::single_choice(
                    "social_presence",
                    "How would you rate your current social media presence?",
                    choices(&[
                        ("none", "No presence"),
                        ("basic", "Basic profiles but inactive"),
                        ("active", "Active but not strategic"),
                        ("strategic", "Strategic and well-maintained"),
                    ]),
                ),
            ],
        ),
        Step::new(
            "Goals & Objectives",
            "What you want to achieve",
            StepIcon::Trophy,
            vec![
                Question::single_choice(
                    "primary_goal",
                    "What is your primary goal with personal branding?",
                    choices(&[
                        ("job_opportunities", "Better job opportunities"),
                        ("visibility", "Industry recognition"),
                        ("networking", "Expanded professional network"),
                        ("business", "Growing my business"),
                    ]),
                ),
                Question::single_choice(
                    "timeline",
                    "What is your timeline for achieving results?",
                    choices(&[
                        ("immediate", "As soon as possible"),
                        ("3months", "Within 3 months"),
                        ("6months", "Within 6 months"),
                        ("1year", "Within a year"),
                    ]),
                ),
            ],
        ),
    ];

    Steps::new(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_steps_are_valid() {
        let steps = qualification_steps().unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps.last_index(), 2);
        assert_eq!(steps[0].questions.len(), 3);
        assert_eq!(steps[1].icon, StepIcon::Target);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.index, i);
        }
    }

    #[test]
    fn test_rejects_empty_wizard() {
        assert_eq!(Steps::new(vec![]), Err(DefinitionError::NoSteps));
    }

    #[test]
    fn test_rejects_step_without_questions() {
        let err = Steps::new(vec![Step::new("Empty", "", StepIcon::Users, vec![])]).unwrap_err();
        assert!(matches!(err, DefinitionError::EmptyStep { index: 0, .. }));
    }

    #[test]
    fn test_rejects_duplicate_question_ids_across_steps() {
        let err = Steps::new(vec![
            Step::new("A", "", StepIcon::Users, vec![Question::free_text("name", "?")]),
            Step::new("B", "", StepIcon::Target, vec![Question::free_text("name", "?")]),
        ])
        .unwrap_err();
        assert_eq!(err, DefinitionError::DuplicateQuestion("name".to_string()));
    }

    #[test]
    fn test_rejects_bad_options() {
        let err = Steps::new(vec![Step::new(
            "A",
            "",
            StepIcon::Users,
            vec![Question::single_choice("goal", "?", vec![])],
        )])
        .unwrap_err();
        assert_eq!(err, DefinitionError::NoOptions("goal".to_string()));

        let err = Steps::new(vec![Step::new(
            "A",
            "",
            StepIcon::Users,
            vec![Question::single_choice("goal", "?", choices(&[("x", "X"), ("x", "Y")]))],
        )])
        .unwrap_err();
        assert!(matches!(err, DefinitionError::DuplicateOption { .. }));
    }
}
