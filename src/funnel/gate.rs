// ABOUTME: Validation gate guarding forward navigation between wizard steps
// A step passes when every question has a non-empty-after-trim answer; no format checks

use crate::models::{AnswerSet, Step};

/// Is the step's answer set complete?
pub fn gate(step: &Step, answers: &AnswerSet) -> bool {
    step.questions.iter().all(|q| answers.is_answered(&q.id))
}

/// Ids of the step's questions that still block the gate, in question order
pub fn missing<'a>(step: &'a Step, answers: &AnswerSet) -> Vec<&'a str> {
    step.questions
        .iter()
        .filter(|q| !answers.is_answered(&q.id))
        .map(|q| q.id.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, StepIcon};

    fn contact_step() -> Step {
        Step::new(
            "Contact",
            "",
            StepIcon::Users,
            vec![
                Question::free_text("name", "Name?"),
                Question::free_text("email", "Email?"),
            ],
        )
    }

    #[test]
    fn test_gate_requires_every_question() {
        let step = contact_step();
        let mut answers = AnswerSet::new();
        assert!(!gate(&step, &answers));
        assert_eq!(missing(&step, &answers), vec!["name", "email"]);

        answers.record("name", "Jo");
        answers.record("email", "");
        assert!(!gate(&step, &answers));
        assert_eq!(missing(&step, &answers), vec!["email"]);

        answers.record("email", "jo@x.com");
        assert!(gate(&step, &answers));
        assert!(missing(&step, &answers).is_empty());
    }

    #[test]
    fn test_gate_performs_no_format_validation() {
        let step = contact_step();
        let answers: AnswerSet = [("name", "x"), ("email", "not an email")].into_iter().collect();
        assert!(gate(&step, &answers));
    }

    #[test]
    fn test_gate_ignores_answers_for_other_steps() {
        let step = contact_step();
        let answers: AnswerSet = [("name", "Jo"), ("timeline", "1year")].into_iter().collect();
        assert!(!gate(&step, &answers));
    }
}
