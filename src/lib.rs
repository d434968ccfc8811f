//! Brand Kit — AI-assisted brand asset generation.

pub mod brand;
pub mod config;
pub mod error;
pub mod images;
pub mod llm;
pub mod onboarding;
pub mod package;
pub mod render;
