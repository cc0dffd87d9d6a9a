//! # REST API for the Duty Officer
//!
//! `GET` shows the current fair-rotation pick and never changes anything.
//! `POST /confirm` records the pick and credits the officer, once per day.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::{Local, Utc};
use shared::ConfirmDutyRequest;
use tracing::{error, info};

use crate::domain::commands::duty::ConfirmDutyCommand;
use crate::io::rest::error::ApiError;
use crate::io::rest::mappers::duty_mapper::DutyMapper;
use crate::io::rest::{ApiQuery, DayQuery};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_duty_officer))
        .route("/confirm", post(confirm_duty_officer))
}

pub async fn get_duty_officer(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DayQuery>,
) -> impl IntoResponse {
    let date = query.resolve();
    info!("GET /api/duty-officer - date: {}", date);

    match state.duty_service.current_selection(date).await {
        Ok(result) => (StatusCode::OK, Json(DutyMapper::to_selection_response(result))).into_response(),
        Err(e) => {
            error!("Failed to select duty officer for {}: {}", date, e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn confirm_duty_officer(
    State(state): State<AppState>,
    Json(request): Json<ConfirmDutyRequest>,
) -> impl IntoResponse {
    info!("POST /api/duty-officer/confirm - request: {:?}", request);

    let command = ConfirmDutyCommand {
        date: request.date.unwrap_or_else(|| Local::now().date_naive()),
        expected_person_id: request.person_id,
    };

    match state.duty_service.confirm_duty_officer(command, Utc::now()).await {
        Ok(result) => (StatusCode::CREATED, Json(DutyMapper::to_confirm_response(result))).into_response(),
        Err(e) => {
            error!("Failed to confirm duty officer: {}", e);
            ApiError::from(e).into_response()
        }
    }
}
