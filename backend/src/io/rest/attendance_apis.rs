//! # REST API for Daily Attendance
//!
//! Marking, the per-day record list, the team view (every roster member,
//! `"unmarked"` where no entry exists) and the summary counts.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, FixedOffset, Local};
use shared::MarkAttendanceRequest;
use tracing::{error, info};

use crate::domain::commands::attendance::MarkAttendanceCommand;
use crate::io::rest::error::ApiError;
use crate::io::rest::mappers::attendance_mapper::AttendanceMapper;
use crate::io::rest::{ApiQuery, DayQuery};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/today", get(get_day_records))
        .route("/team", get(get_team_attendance))
        .route("/mark", post(mark_attendance))
        .route("/summary", get(get_summary))
}

pub async fn get_day_records(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DayQuery>,
) -> impl IntoResponse {
    let date = query.resolve();
    info!("GET /api/attendance/today - date: {}", date);

    match state.attendance_service.day_records(date).await {
        Ok(records) => (StatusCode::OK, Json(AttendanceMapper::to_day_response(date, records))).into_response(),
        Err(e) => {
            error!("Failed to load attendance for {}: {}", date, e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn get_team_attendance(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DayQuery>,
) -> impl IntoResponse {
    let date = query.resolve();
    info!("GET /api/attendance/team - date: {}", date);

    match state.attendance_service.team_attendance(date).await {
        Ok(members) => (StatusCode::OK, Json(AttendanceMapper::to_team_response(date, members))).into_response(),
        Err(e) => {
            error!("Failed to load team attendance for {}: {}", date, e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn mark_attendance(
    State(state): State<AppState>,
    Json(request): Json<MarkAttendanceRequest>,
) -> impl IntoResponse {
    info!("POST /api/attendance/mark - request: {:?}", request);

    let command = MarkAttendanceCommand {
        person_id: request.person_id,
        status: request.status,
        marked_by: request.marked_by,
        marked_at: DateTime::<FixedOffset>::from(Local::now()),
    };

    match state.attendance_service.mark_attendance(command).await {
        Ok(result) => (StatusCode::OK, Json(AttendanceMapper::to_mark_response(result))).into_response(),
        Err(e) => {
            error!("Failed to mark attendance: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn get_summary(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DayQuery>,
) -> impl IntoResponse {
    let date = query.resolve();
    info!("GET /api/attendance/summary - date: {}", date);

    match state.attendance_service.summary(date).await {
        Ok(summary) => (StatusCode::OK, Json(AttendanceMapper::to_summary_response(date, summary))).into_response(),
        Err(e) => {
            error!("Failed to compute summary for {}: {}", date, e);
            ApiError::from(e).into_response()
        }
    }
}
