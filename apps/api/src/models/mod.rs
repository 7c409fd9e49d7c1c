pub mod alumni;
pub mod artifact;
pub mod user;
