//! HTTP front end for the recommendation engine.

pub mod schema;

use crate::error::{AdvisorError, Result};
use crate::i18n::{Locale, Translations};
use crate::logic::RecommendationEngine;
use crate::models::{CropType, SoilType, REFERENCE_MODEL_ACCURACIES};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use schema::{OptionLabel, OptionsResponse, RecommendRequest, RecommendResponse};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

/// Requests are six numbers and two names; anything larger is rejected.
pub const MAX_BODY_BYTES: usize = 16 * 1024;

#[derive(Clone)]
pub struct ApiState {
    pub engine: Arc<RecommendationEngine>,
    pub translations: Arc<Translations>,
}

impl ApiState {
    pub fn new(engine: RecommendationEngine, translations: Translations) -> Self {
        Self {
            engine: Arc::new(engine),
            translations: Arc::new(translations),
        }
    }
}

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/recommend", post(recommend))
        .route("/api/options", get(options))
        .route("/api/models", get(models))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(state: ApiState, addr: &str) -> Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn recommend(
    State(state): State<ApiState>,
    payload: std::result::Result<Json<RecommendRequest>, JsonRejection>,
) -> std::result::Result<Json<RecommendResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let rec = request.evaluate(&state.engine)?;
    tracing::debug!(key = rec.key.as_str(), "recommendation served");

    Ok(Json(rec.into()))
}

#[derive(Debug, Deserialize)]
struct OptionsQuery {
    lang: Option<String>,
}

async fn options(
    State(state): State<ApiState>,
    Query(query): Query<OptionsQuery>,
) -> std::result::Result<Json<OptionsResponse>, ApiError> {
    let locale = match query.lang.as_deref() {
        None => Locale::default(),
        Some(code) => Locale::from_str(code)
            .ok_or_else(|| AdvisorError::UnknownCategory(format!("language '{}'", code)))?,
    };
    let labels = state.translations.get(locale);

    Ok(Json(OptionsResponse {
        language: labels.language.clone(),
        soil_types: SoilType::all()
            .iter()
            .map(|s| OptionLabel {
                id: s.as_str(),
                label: labels.soil(*s).to_string(),
            })
            .collect(),
        crop_types: CropType::all()
            .iter()
            .map(|c| OptionLabel {
                id: c.as_str(),
                label: labels.crop(*c).to_string(),
            })
            .collect(),
    }))
}

async fn models() -> impl IntoResponse {
    let entries: Vec<serde_json::Value> = REFERENCE_MODEL_ACCURACIES
        .iter()
        .map(|m| {
            serde_json::json!({
                "name": m.name,
                "accuracy": m.accuracy,
            })
        })
        .collect();

    Json(serde_json::json!({
        "simulated": true,
        "models": entries,
    }))
}

#[derive(Debug)]
enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl From<AdvisorError> for ApiError {
    fn from(err: AdvisorError) -> Self {
        match err {
            AdvisorError::InvalidInput(_) | AdvisorError::UnknownCategory(_) => {
                ApiError::BadRequest(err.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
