//! # REST API for Leave Requests

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::{Local, Utc};
use serde::Deserialize;
use shared::{ApplyLeaveRequest, LeaveStatus};
use tracing::{error, info};

use crate::domain::commands::leave::ApplyLeaveCommand;
use crate::io::rest::error::ApiError;
use crate::io::rest::mappers::leave_mapper::LeaveMapper;
use crate::io::rest::ApiQuery;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LeaveListQuery {
    pub status: Option<LeaveStatus>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_leaves))
        .route("/apply", post(apply_leave))
        .route("/:id/approve", post(approve_leave))
        .route("/:id/reject", post(reject_leave))
}

pub async fn list_leaves(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LeaveListQuery>,
) -> impl IntoResponse {
    info!("GET /api/leaves - status: {:?}", query.status);

    match state.leave_service.list_leaves(query.status).await {
        Ok(leaves) => (StatusCode::OK, Json(LeaveMapper::to_leave_list_dto(leaves))).into_response(),
        Err(e) => {
            error!("Failed to list leave requests: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn apply_leave(
    State(state): State<AppState>,
    Json(request): Json<ApplyLeaveRequest>,
) -> impl IntoResponse {
    info!("POST /api/leaves/apply - request: {:?}", request);

    let command = ApplyLeaveCommand {
        person_id: request.person_id,
        leave_type: request.leave_type,
        start_date: request.start_date,
        end_date: request.end_date,
        reason: request.reason,
        today: Local::now().date_naive(),
    };

    match state.leave_service.apply_leave(command, Utc::now()).await {
        Ok(leave) => {
            let message = format!("Leave request submitted ({})", leave.status.as_str());
            (StatusCode::CREATED, Json(LeaveMapper::to_leave_response(leave, message))).into_response()
        }
        Err(e) => {
            error!("Failed to apply for leave: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn approve_leave(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("POST /api/leaves/{}/approve", id);

    match state.leave_service.approve_leave(id, Utc::now()).await {
        Ok(leave) => {
            let message = format!("Leave request {} approved", leave.id);
            (StatusCode::OK, Json(LeaveMapper::to_leave_response(leave, message))).into_response()
        }
        Err(e) => {
            error!("Failed to approve leave {}: {}", id, e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn reject_leave(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("POST /api/leaves/{}/reject", id);

    match state.leave_service.reject_leave(id, Utc::now()).await {
        Ok(leave) => {
            let message = format!("Leave request {} rejected", leave.id);
            (StatusCode::OK, Json(LeaveMapper::to_leave_response(leave, message))).into_response()
        }
        Err(e) => {
            error!("Failed to reject leave {}: {}", id, e);
            ApiError::from(e).into_response()
        }
    }
}
