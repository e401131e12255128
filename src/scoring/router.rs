use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{ApplicantProfile, LanguageScores, LanguageTest};
use super::language::SkillLevels;
use super::{ScoreBreakdown, ScoringEngine, ScoringError};

/// Router builder exposing the scoring endpoints.
pub fn scoring_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/score/crs", post(crs_handler))
        .route("/api/v1/score/fsw", post(fsw_handler))
        .route("/api/v1/score/provincial", post(provincial_handler))
        .route("/api/v1/score/language", post(language_handler))
        .with_state(engine)
}

#[derive(Debug, Serialize)]
struct NormalizationView {
    test: LanguageTest,
    levels: SkillLevels,
}

pub(crate) async fn crs_handler(
    State(engine): State<Arc<ScoringEngine>>,
    axum::Json(profile): axum::Json<ApplicantProfile>,
) -> Response {
    breakdown_response(engine.crs(profile))
}

pub(crate) async fn fsw_handler(
    State(engine): State<Arc<ScoringEngine>>,
    axum::Json(profile): axum::Json<ApplicantProfile>,
) -> Response {
    breakdown_response(engine.fsw(profile))
}

pub(crate) async fn provincial_handler(
    State(engine): State<Arc<ScoringEngine>>,
    axum::Json(profile): axum::Json<ApplicantProfile>,
) -> Response {
    breakdown_response(engine.provincial(profile))
}

pub(crate) async fn language_handler(
    State(engine): State<Arc<ScoringEngine>>,
    axum::Json(scores): axum::Json<LanguageScores>,
) -> Response {
    match engine.normalize(&scores) {
        Ok(levels) => {
            let view = NormalizationView {
                test: scores.test,
                levels,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn breakdown_response(result: Result<ScoreBreakdown, ScoringError>) -> Response {
    match result {
        Ok(breakdown) => (StatusCode::OK, axum::Json(breakdown)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ScoringError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
