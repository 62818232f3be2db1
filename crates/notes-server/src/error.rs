use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::render;

/// Conditions surfaced to clients.  The only expected ones are a detail
/// lookup miss and a bad newsletter address; everything else funnels into
/// `Internal` and renders the generic failure page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("episode not found")]
    EpisodeNotFound,
    #[error("invalid email address")]
    InvalidEmail,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EpisodeNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Page-route rendering: the fallback page with a retry action.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::EpisodeNotFound => render::not_found_page(
                "Episode Not Found",
                "The episode you're looking for doesn't exist.",
            ),
            AppError::InvalidEmail => render::newsletter_error_page(),
            AppError::Internal(e) => {
                error!("handler error: {:#}", e);
                render::error_page()
            }
        };
        (status, Html(body)).into_response()
    }
}

/// API-route rendering: same error, JSON body instead of a page.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let AppError::Internal(e) = &self.0 {
            error!("api error: {:#}", e);
        }
        let status = self.0.status();
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
