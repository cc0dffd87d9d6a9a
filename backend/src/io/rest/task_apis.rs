//! # REST API for the Task Board

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use chrono::Utc;
use shared::TaskRequest;
use tracing::{error, info};

use crate::io::rest::error::ApiError;
use crate::io::rest::mappers::task_mapper::TaskMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/:id", put(update_task).delete(delete_task))
}

pub async fn list_tasks(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/tasks");

    match state.task_service.list_tasks().await {
        Ok(tasks) => (StatusCode::OK, Json(TaskMapper::to_task_list_dto(tasks))).into_response(),
        Err(e) => {
            error!("Failed to list tasks: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<TaskRequest>,
) -> impl IntoResponse {
    info!("POST /api/tasks - request: {:?}", request);

    match state.task_service.create_task(TaskMapper::to_command(request), Utc::now()).await {
        Ok(task) => (StatusCode::CREATED, Json(TaskMapper::to_dto(task))).into_response(),
        Err(e) => {
            error!("Failed to create task: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<TaskRequest>,
) -> impl IntoResponse {
    info!("PUT /api/tasks/{} - request: {:?}", id, request);

    match state.task_service.update_task(id, TaskMapper::to_command(request)).await {
        Ok(task) => (StatusCode::OK, Json(TaskMapper::to_dto(task))).into_response(),
        Err(e) => {
            error!("Failed to update task {}: {}", id, e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn delete_task(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("DELETE /api/tasks/{}", id);

    match state.task_service.delete_task(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to delete task {}: {}", id, e);
            ApiError::from(e).into_response()
        }
    }
}
