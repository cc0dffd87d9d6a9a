//! # REST API for the Roster

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::CreatePersonRequest;
use tracing::{error, info};

use crate::domain::commands::people::CreatePersonCommand;
use crate::io::rest::error::ApiError;
use crate::io::rest::mappers::person_mapper::PersonMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_people).post(create_person))
        .route("/:id", get(get_person))
}

pub async fn list_people(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/people");

    match state.person_service.list_people().await {
        Ok(people) => (StatusCode::OK, Json(PersonMapper::to_person_list_dto(people))).into_response(),
        Err(e) => {
            error!("Failed to list people: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn create_person(
    State(state): State<AppState>,
    Json(request): Json<CreatePersonRequest>,
) -> impl IntoResponse {
    info!("POST /api/people - request: {:?}", request);

    let command = CreatePersonCommand { name: request.name };

    match state.person_service.create_person(command).await {
        Ok(person) => (StatusCode::CREATED, Json(PersonMapper::to_dto(person))).into_response(),
        Err(e) => {
            error!("Failed to create person: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn get_person(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("GET /api/people/{}", id);

    match state.person_service.get_person(id).await {
        Ok(person) => (StatusCode::OK, Json(PersonMapper::to_dto(person))).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
