//! # REST API Interface Layer
//!
//! HTTP endpoints for the duty roster. Handlers translate shared DTOs into
//! domain commands, call one service, and map the result back. Domain errors
//! become HTTP status codes through [`error::ApiError`].
//!
//! Endpoints that work on a day take an optional `?date=YYYY-MM-DD` and
//! default to today's local date.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode, Uri},
    response::{IntoResponse, Json},
};
use chrono::{Local, NaiveDate, Utc};
use serde::{de::DeserializeOwned, Deserialize};
use shared::{ErrorResponse, HealthResponse};
use tracing::{info, warn};

pub mod attendance_apis;
pub mod duty_apis;
pub mod error;
pub mod leave_apis;
pub mod mappers;
pub mod person_apis;
pub mod task_apis;

/// Query string extractor whose rejection is a JSON [`error::ApiError`]
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = error::ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                warn!("Rejected query string: {}", rejection.body_text());
                error::ApiError::BadRequest(rejection.body_text())
            })?;
        Ok(ApiQuery(value))
    }
}

/// `?date=` query parameter shared by the per-day endpoints
#[derive(Debug, Default, Deserialize)]
pub struct DayQuery {
    pub date: Option<NaiveDate>,
}

impl DayQuery {
    pub fn resolve(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

pub async fn health() -> impl IntoResponse {
    info!("GET /health");
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}

/// JSON 404 for unknown paths under `/api`
pub async fn api_not_found(uri: Uri) -> impl IntoResponse {
    warn!("No API route for {}", uri);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}
