//! Route handlers and request/response types

use super::error::ApiError;
use crate::core::{Code, Score, evaluate_guess};
use axum::extract::rejection::JsonRejection;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

const INDEX_HTML: &str = include_str!("index.html");

/// Body of `POST /guess`
#[derive(Debug, Clone, Deserialize)]
pub struct GuessRequest {
    pub secret: String,
    pub guess: String,
}

/// Body returned by `GET /secret`
#[derive(Debug, Clone, Serialize)]
pub struct SecretResponse {
    pub secret: Code,
}

/// Build the application router
///
/// - `GET /` serves the single-page game
/// - `GET /secret` returns a new secret
/// - `POST /guess` scores a guess, responding `{"a": _, "b": _}`
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/secret", get(create_secret))
        .route("/guess", post(score_guess))
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn create_secret() -> Json<SecretResponse> {
    let secret = Code::random();
    debug!(%secret, "generated secret");
    Json(SecretResponse { secret })
}

async fn score_guess(
    payload: Result<Json<GuessRequest>, JsonRejection>,
) -> Result<Json<Score>, ApiError> {
    let Json(payload) = payload?;

    let secret = validate_field("secret", &payload.secret)?;
    let guess = validate_field("guess", &payload.guess)?;

    let score = if secret == guess {
        Score::PERFECT
    } else {
        evaluate_guess(secret.as_str(), guess.as_str()).map_err(ApiError::Evaluation)?
    };

    info!(%guess, %score, "scored guess");
    Ok(Json(score))
}

fn validate_field(field: &'static str, value: &str) -> Result<Code, ApiError> {
    Code::parse(value).map_err(|source| {
        debug!(field, value, %source, "rejected input");
        ApiError::Validation { field, source }
    })
}
