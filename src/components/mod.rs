// ABOUTME: UI components for the TUI interface including funnel, testimonials, and help

pub mod carousel;
pub mod funnel;
pub mod help;
pub mod layout;

pub use carousel::TestimonialComponent;
pub use funnel::QualificationComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
