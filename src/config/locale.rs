// ABOUTME: User-visible strings for the funnel and carousel, overridable per deployment

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleStrings {
    pub funnel_title: String,
    pub funnel_badge: String,
    pub continue_label: String,
    pub submit_label: String,
    pub back_label: String,
    pub processing_label: String,
    pub answer_placeholder: String,
    pub complete_title: String,
    pub complete_body: String,
    pub toast_title: String,
    pub toast_body: String,
    pub failed_title: String,
    pub retry_hint: String,
    pub testimonials_title: String,
    pub testimonials_badge: String,
    pub autoplay_running: String,
    pub autoplay_paused: String,
    pub autoplay_off: String,
    pub reference_label: String,
    pub funnel_tab: String,
    pub testimonials_tab: String,
}

impl Default for LocaleStrings {
    fn default() -> Self {
        Self {
            funnel_title: "Are You Ready For Social Success?".to_string(),
            funnel_badge: "Qualification Process".to_string(),
            continue_label: "Continue".to_string(),
            submit_label: "Submit".to_string(),
            back_label: "Back".to_string(),
            processing_label: "Processing...".to_string(),
            answer_placeholder: "Your answer...".to_string(),
            complete_title: "Thank You for Completing the Qualification Process!".to_string(),
            complete_body: "Our team will review your information and get back to you within 24-48 hours to discuss how we can help elevate your personal brand.".to_string(),
            toast_title: "Qualification Complete!".to_string(),
            toast_body: "Our team will review your information and reach out soon.".to_string(),
            failed_title: "We couldn't submit your answers".to_string(),
            retry_hint: "Press Ctrl+R to try again".to_string(),
            testimonials_title: "What Our Clients Say".to_string(),
            testimonials_badge: "Success Stories".to_string(),
            autoplay_running: "autoplay".to_string(),
            autoplay_paused: "paused".to_string(),
            autoplay_off: "autoplay off".to_string(),
            reference_label: "Reference:".to_string(),
            funnel_tab: "Qualify".to_string(),
            testimonials_tab: "Testimonials".to_string(),
        }
    }
}
