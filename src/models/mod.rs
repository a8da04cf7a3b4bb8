// ABOUTME: Core data models for the qualification funnel and testimonial carousel

pub mod answers;
pub mod question;
pub mod step;
pub mod testimonial;

pub use answers::AnswerSet;
pub use question::{ChoiceOption, Question, QuestionKind};
pub use step::{qualification_steps, DefinitionError, Step, StepIcon, Steps};
pub use testimonial::{default_testimonials, Testimonial};
