// ABOUTME: CLI steps command - print the qualification questionnaire
//
// Shows each step with its questions; choice questions list their options

use super::OutputFormat;
use crate::models::{qualification_steps, QuestionKind, Step};
use anyhow::{Context, Result};

/// Execute the steps command
pub fn execute(format: OutputFormat) -> Result<()> {
    let steps = qualification_steps().context("Invalid qualification steps")?;

    match format {
        OutputFormat::Json => output_json(steps.as_slice())?,
        OutputFormat::Text => print!("{}", render_text(steps.as_slice())),
    }

    Ok(())
}

fn output_json(steps: &[Step]) -> Result<()> {
    let json = serde_json::to_string_pretty(steps)?;
    println!("{json}");
    Ok(())
}

/// Plain text outline of the questionnaire
pub fn render_text(steps: &[Step]) -> String {
    let mut out = String::new();
    for step in steps {
        out.push_str(&format!(
            "{}. {} {} - {}\n",
            step.index + 1,
            step.icon.glyph(),
            step.title,
            step.subtitle
        ));
        for question in &step.questions {
            out.push_str(&format!("   [{}] {}\n", question.id, question.prompt));
            if question.kind == QuestionKind::SingleChoice {
                for option in &question.options {
                    out.push_str(&format!("       ( ) {} ({})\n", option.label, option.value));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_outline_lists_every_question() {
        let steps = qualification_steps().unwrap();
        let text = render_text(steps.as_slice());

        assert!(text.starts_with("1. "));
        for step in steps.iter() {
            for question in &step.questions {
                assert!(text.contains(&format!("[{}]", question.id)));
            }
        }
        assert!(text.contains("( ) 10+ years (10+)"));
    }

    #[test]
    fn test_free_text_questions_list_no_options() {
        let steps = qualification_steps().unwrap();
        let text = render_text(steps.as_slice());

        assert!(text.contains(
            "   [name] What is your name?\n   [email] What is your email address?\n   [experience]"
        ));
    }

    #[test]
    fn test_json_names_question_kinds() {
        let steps = qualification_steps().unwrap();
        let json = serde_json::to_string(steps.as_slice()).unwrap();
        assert!(json.contains("\"kind\":\"free_text\""));
        assert!(json.contains("\"kind\":\"single_choice\""));
    }
}
