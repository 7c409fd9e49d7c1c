//! Resume storage, section improvement, and summary generation.

pub mod fallback;
pub mod handlers;
pub mod improve;
pub mod prompts;
