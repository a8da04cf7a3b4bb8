// ABOUTME: CLI testimonials command - print the testimonial catalogue

use super::OutputFormat;
use crate::models::{default_testimonials, Testimonial};
use anyhow::Result;

/// Execute the testimonials command
pub fn execute(format: OutputFormat) -> Result<()> {
    let testimonials = default_testimonials();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&testimonials)?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", render_text(&testimonials)),
    }

    Ok(())
}

/// Numbered quotes with their bylines
pub fn render_text(testimonials: &[Testimonial]) -> String {
    if testimonials.is_empty() {
        return "No testimonials found.\n".to_string();
    }

    testimonials
        .iter()
        .enumerate()
        .map(|(idx, t)| {
            format!("{}. \"{}\"\n   - {}, {}\n", idx + 1, t.content, t.author, t.byline())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lists_authors_in_order() {
        let text = render_text(&default_testimonials());
        let jessica = text.find("Jessica Chen").unwrap();
        let david = text.find("David Park").unwrap();
        assert!(jessica < david);
        assert!(text.contains("4. \""));
    }

    #[test]
    fn test_empty_catalogue_message() {
        assert_eq!(render_text(&[]), "No testimonials found.\n");
    }
}
