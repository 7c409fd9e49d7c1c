//! Shared per-industry market insights, generated on demand.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
