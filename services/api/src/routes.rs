use crate::infra::{AppState, CaseStoreError};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use epical_engine::error::AppError;
use epical_engine::scene::{
    build_handover_log, derive_contexts, normalize_scene, speed_profile, Case, Contexts,
    HandoverForm, SpeedProfile,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

/// Failures surfaced by the scene endpoints.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Store(#[from] CaseStoreError),
    #[error("no scene has been evaluated yet")]
    NoCase,
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::App(AppError::from(value))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::App(err) => return err.into_response(),
            ApiError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::NoCase => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Contexts preview used to decide which optional form sections to show.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContextsPreview {
    pub(crate) contexts: Contexts,
    pub(crate) speed_profile: SpeedProfile,
}

pub(crate) fn scene_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/scene/evaluate", post(evaluate_endpoint))
        .route("/api/v1/scene/contexts", post(contexts_endpoint))
        .route("/api/v1/scene/last", get(last_case_endpoint))
        .route("/api/v1/scene/handover", post(handover_endpoint))
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// An empty body is treated as an empty scene rather than a parse failure.
fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}

pub(crate) async fn evaluate_endpoint(
    Extension(state): Extension<AppState>,
    body: String,
) -> Result<Json<Case>, ApiError> {
    let raw = parse_body(&body)?;
    let case = state.engine.evaluate(&raw);
    info!(
        risk = case.risk.level.token(),
        score = case.risk.score,
        disposal = %case.disposals[0].method,
        "scene evaluated"
    );
    state.cases.save(case.clone())?;
    Ok(Json(case))
}

pub(crate) async fn contexts_endpoint(
    Extension(state): Extension<AppState>,
    body: String,
) -> Result<Json<ContextsPreview>, ApiError> {
    let scene = normalize_scene(&parse_body(&body)?);
    Ok(Json(ContextsPreview {
        contexts: derive_contexts(&scene),
        speed_profile: speed_profile(&scene, &state.engine.config().policy),
    }))
}

pub(crate) async fn last_case_endpoint(
    Extension(state): Extension<AppState>,
) -> Result<Json<Case>, ApiError> {
    state.cases.last()?.map(Json).ok_or(ApiError::NoCase)
}

pub(crate) async fn handover_endpoint(
    Extension(state): Extension<AppState>,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let case = state.cases.last()?.ok_or(ApiError::NoCase)?;
    let form = if body.trim().is_empty() {
        HandoverForm::suggested(&case)
    } else {
        serde_json::from_str::<HandoverForm>(&body)?
    };
    let report = build_handover_log(&case, &form, state.engine.clock());
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        report,
    ))
}
