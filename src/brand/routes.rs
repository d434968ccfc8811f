//! REST endpoints for asset generation and brand-pack download.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::package::build_brand_pack;

use super::model::{BrandInputs, GeneratedAssets};
use super::orchestrator::AssetOrchestrator;

/// Shared state for brand routes.
#[derive(Clone)]
pub struct BrandRouteState {
    pub orchestrator: AssetOrchestrator,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    #[serde(default)]
    pub assets: GeneratedAssets,
    #[serde(default)]
    pub brand_inputs: BrandInputs,
}

/// Build the generation, download and health routes.
pub fn brand_routes(state: BrandRouteState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/generate/assets", post(generate_assets))
        .route("/api/download", post(download))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "brand-kit"
    }))
}

const GENERATE_FAILED: &str = "Failed to generate assets";
const INVALID_INPUTS: &str = "Invalid brand inputs";
const ZIP_FAILED: &str = "Failed to create ZIP file";

/// POST /api/generate/assets
async fn generate_assets(
    State(state): State<BrandRouteState>,
    body: Result<Json<BrandInputs>, JsonRejection>,
) -> Result<Json<GeneratedAssets>, ApiError> {
    let request_id = Uuid::new_v4();
    let Json(inputs) = body.map_err(|e| {
        info!(%request_id, error = %e, "Unreadable generation request");
        ApiError::new(GENERATE_FAILED, e)
    })?;
    let inputs = inputs.normalized();

    inputs.validate().map_err(|e| {
        info!(%request_id, error = %e, "Rejected brand inputs");
        ApiError::new(INVALID_INPUTS, e)
    })?;

    let assets = state
        .orchestrator
        .generate_all_assets(inputs)
        .await
        .map_err(|e| {
            error!(%request_id, error = %e, "Asset generation failed");
            ApiError::new(GENERATE_FAILED, e)
        })?;

    info!(%request_id, "Asset generation complete");
    Ok(Json(assets))
}

/// POST /api/download
async fn download(body: Result<Json<DownloadRequest>, JsonRejection>) -> Result<Response, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::new(ZIP_FAILED, e))?;
    let inputs = request.brand_inputs.normalized();

    let pack = build_brand_pack(&request.assets, &inputs).map_err(|e| {
        error!(error = %e, "Failed to build brand pack");
        ApiError::new(ZIP_FAILED, e)
    })?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", pack.filename),
            ),
        ],
        pack.bytes,
    )
        .into_response())
}
