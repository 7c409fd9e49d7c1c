//! Cover letter generation, editing, and regeneration.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
