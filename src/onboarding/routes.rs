//! REST endpoints for the guided form and the wizard session.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::brand::model::{AssetKind, BrandInputs, GeneratedAssets};
use crate::error::ApiError;
use crate::llm::StructuredGenerator;

use super::state::{ChatEntry, FormStep, WizardStage, WizardState};
use super::steps::{StepContent, step_content};

const INVALID_INPUTS: &str = "Invalid brand inputs";
const INVALID_UPDATE: &str = "Invalid wizard update";

/// Shared state for onboarding routes.
#[derive(Clone)]
pub struct OnboardingRouteState {
    pub text: StructuredGenerator,
    pub wizard: Arc<RwLock<WizardState>>,
}

impl OnboardingRouteState {
    pub fn new(text: StructuredGenerator) -> Self {
        Self {
            text,
            wizard: Arc::new(RwLock::new(WizardState::default())),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRequest {
    pub step: FormStep,
    #[serde(default)]
    pub brand_inputs: BrandInputs,
}

#[derive(Debug, Deserialize)]
pub struct StageRequest {
    pub stage: WizardStage,
}

#[derive(Debug, Deserialize)]
pub struct AssetUpdate {
    pub kind: AssetKind,
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratingRequest {
    pub is_generating: bool,
}

/// POST /api/ai/step
///
/// Always answers 200. A body that does not parse gets the fallback content.
async fn post_step(
    State(state): State<OnboardingRouteState>,
    body: Result<Json<StepRequest>, JsonRejection>,
) -> Json<StepContent> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Unreadable step request, using fallback");
            return Json(StepContent::fallback());
        }
    };
    let inputs = request.brand_inputs.normalized();
    Json(step_content(&state.text, request.step, &inputs).await)
}

/// GET /api/onboarding/state
async fn get_state(State(state): State<OnboardingRouteState>) -> Json<WizardState> {
    Json(state.wizard.read().await.clone())
}

/// Apply `change` under the write lock and answer with the new state.
async fn apply(
    state: &OnboardingRouteState,
    change: impl FnOnce(&mut WizardState),
) -> Json<WizardState> {
    let mut wizard = state.wizard.write().await;
    change(&mut wizard);
    Json(wizard.clone())
}

/// POST /api/onboarding/inputs
///
/// Merges the present fields into the session, or 400 on a malformed color.
async fn post_inputs(
    State(state): State<OnboardingRouteState>,
    body: Result<Json<BrandInputs>, JsonRejection>,
) -> Result<Json<WizardState>, ApiError> {
    let Json(update) = body.map_err(|e| ApiError::new(INVALID_INPUTS, e))?;
    let update = update.normalized();
    update
        .validate()
        .map_err(|e| ApiError::new(INVALID_INPUTS, e))?;

    Ok(apply(&state, |wizard| wizard.update_inputs(update)).await)
}

/// DELETE /api/onboarding/inputs
async fn delete_inputs(State(state): State<OnboardingRouteState>) -> Json<WizardState> {
    apply(&state, WizardState::reset_inputs).await
}

/// POST /api/onboarding/stage
async fn post_stage(
    State(state): State<OnboardingRouteState>,
    body: Result<Json<StageRequest>, JsonRejection>,
) -> Result<Json<WizardState>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::new(INVALID_UPDATE, e))?;
    tracing::debug!(stage = %request.stage, "Wizard stage changed");
    Ok(apply(&state, |wizard| wizard.set_stage(request.stage)).await)
}

/// POST /api/onboarding/assets
///
/// Replaces the whole generated bundle.
async fn post_assets(
    State(state): State<OnboardingRouteState>,
    body: Result<Json<GeneratedAssets>, JsonRejection>,
) -> Result<Json<WizardState>, ApiError> {
    let Json(assets) = body.map_err(|e| ApiError::new(INVALID_UPDATE, e))?;
    Ok(apply(&state, |wizard| wizard.set_assets(assets)).await)
}

/// PATCH /api/onboarding/assets
///
/// Replaces a single asset, e.g. after regenerating the logo.
async fn patch_asset(
    State(state): State<OnboardingRouteState>,
    body: Result<Json<AssetUpdate>, JsonRejection>,
) -> Result<Json<WizardState>, ApiError> {
    let Json(update) = body.map_err(|e| ApiError::new(INVALID_UPDATE, e))?;
    Ok(apply(&state, |wizard| wizard.update_asset(update.kind, update.value)).await)
}

/// POST /api/onboarding/generating
async fn post_generating(
    State(state): State<OnboardingRouteState>,
    body: Result<Json<GeneratingRequest>, JsonRejection>,
) -> Result<Json<WizardState>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::new(INVALID_UPDATE, e))?;
    Ok(apply(&state, |wizard| wizard.set_generating(request.is_generating)).await)
}

/// POST /api/onboarding/chat
async fn post_chat(
    State(state): State<OnboardingRouteState>,
    body: Result<Json<ChatEntry>, JsonRejection>,
) -> Result<Json<WizardState>, ApiError> {
    let Json(entry) = body.map_err(|e| ApiError::new(INVALID_UPDATE, e))?;
    Ok(apply(&state, |wizard| wizard.add_chat_message(entry.role, entry.content)).await)
}

/// DELETE /api/onboarding/chat
async fn delete_chat(State(state): State<OnboardingRouteState>) -> Json<WizardState> {
    apply(&state, WizardState::clear_chat_history).await
}

/// POST /api/onboarding/reset
async fn post_reset(State(state): State<OnboardingRouteState>) -> Json<WizardState> {
    apply(&state, WizardState::reset).await
}

/// Build the step-content and wizard-session routes.
pub fn onboarding_routes(state: OnboardingRouteState) -> Router {
    Router::new()
        .route("/api/ai/step", post(post_step))
        .route("/api/onboarding/state", get(get_state))
        .route("/api/onboarding/inputs", post(post_inputs).delete(delete_inputs))
        .route("/api/onboarding/stage", post(post_stage))
        .route("/api/onboarding/assets", post(post_assets).patch(patch_asset))
        .route("/api/onboarding/generating", post(post_generating))
        .route("/api/onboarding/chat", post(post_chat).delete(delete_chat))
        .route("/api/onboarding/reset", post(post_reset))
        .with_state(state)
}
