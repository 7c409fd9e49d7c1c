//! Interview preparation: quiz generation, grading, and assessment history.

pub mod fallback;
pub mod handlers;
pub mod prompts;
pub mod quiz;
