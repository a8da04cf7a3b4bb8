// ABOUTME: Testimonial model and the built-in client success stories

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub content: String,
    pub author: String,
    pub role: String,
    pub company: String,
}

impl Testimonial {
    pub fn new(content: &str, author: &str, role: &str, company: &str) -> Self {
        Self {
            content: content.to_string(),
            author: author.to_string(),
            role: role.to_string(),
            company: company.to_string(),
        }
    }

    /// "Role, Company" byline
    pub fn byline(&self) -> String {
        format!("{}, {}", self.role, self.company)
    }
}

pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "BrandMagnet completely transformed my online presence. Within weeks, I was receiving inbound requests from top companies. Their personalized approach and attention to detail made all the difference.",
            "Jessica Chen",
            "Product Marketing Lead",
            "Tech Innovators Inc.",
        ),
        Testimonial::new(
            "I was skeptical about personal branding services, but BrandMagnet exceeded all my expectations. They crafted a strategy that felt authentic to me while strategically positioning me for senior roles. Landed my dream job in just 3 months!",
            "Michael Rodriguez",
            "Engineering Director",
            "Future Solutions",
        ),
        Testimonial::new(
            "The team at BrandMagnet doesn't just help with your online presence, they completely transform how you're perceived in your industry. Their strategic approach and industry connections are invaluable. Worth every penny.",
            "Alexa Thompson",
            "VP of Operations",
            "Global Enterprises",
        ),
        Testimonial::new(
            "As someone who always struggled with self-promotion, BrandMagnet helped me showcase my expertise in an authentic way. Their personalized approach and ongoing support made the entire process feel natural and effective.",
            "David Park",
            "Data Science Lead",
            "Analytics Pro",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogue() {
        let all = default_testimonials();
        assert_eq!(all.len(), 4);
        assert_eq!(all[1].byline(), "Engineering Director, Future Solutions");
    }
}
