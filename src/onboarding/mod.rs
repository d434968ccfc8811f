//! Guided onboarding: per-step questions and the wizard session.

pub mod routes;
pub mod state;
pub mod steps;

pub use routes::{OnboardingRouteState, onboarding_routes};
pub use state::{ChatEntry, FORM_STEPS, FormStep, WizardStage, WizardState};
pub use steps::{StepContent, step_content};
