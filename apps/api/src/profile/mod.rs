//! User profile, onboarding status, and the profile-update transaction.

pub mod handlers;
pub mod update;
