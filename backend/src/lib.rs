//! # Duty Roster Backend
//!
//! Attendance tracking and fair-rotation duty officer selection for a small
//! operations team, served as a JSON API over SQLite.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers, DTO mappers)
//!     ↓
//! Domain Layer (aggregation, selection, services)
//!     ↓
//! Storage Layer (SQLite repositories behind traits)
//! ```
//!
//! [`initialize_backend`] wires repositories into services and
//! [`create_router`] exposes them under `/api`, with the single-page client
//! served from the configured static directory for every other path.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::domain::{AttendanceService, DutyService, LeaveService, PersonService, TaskService};
use crate::io::rest::{
    api_not_found, attendance_apis, duty_apis, health, leave_apis, person_apis, task_apis,
};
use crate::storage::{
    AttendanceRepository, DbConnection, DutyRepository, LeaveRepository, PersonRepository,
    TaskRepository,
};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub person_service: PersonService,
    pub attendance_service: AttendanceService,
    pub duty_service: DutyService,
    pub leave_service: LeaveService,
    pub task_service: TaskService,
}

impl AppState {
    pub fn new(db: DbConnection, config: &Config) -> Self {
        let people = Arc::new(PersonRepository::new(db.clone()));
        let attendance = Arc::new(AttendanceRepository::new(db.clone()));
        let duty = Arc::new(DutyRepository::new(db.clone()));
        let leaves = Arc::new(LeaveRepository::new(db.clone()));
        let tasks = Arc::new(TaskRepository::new(db));

        let person_service = PersonService::new(people.clone());
        let attendance_service =
            AttendanceService::new(people.clone(), attendance, config.attendance);
        let duty_service = DutyService::new(attendance_service.clone(), people.clone(), duty);
        let leave_service = LeaveService::new(leaves, people, config.leave);
        let task_service = TaskService::new(tasks);

        Self {
            person_service,
            attendance_service,
            duty_service,
            leave_service,
            task_service,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    Ok(AppState::new(db, config))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &Config) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/people", person_apis::router())
        .nest("/attendance", attendance_apis::router())
        .nest("/duty-officer", duty_apis::router())
        .nest("/leaves", leave_apis::router())
        .nest("/tasks", task_apis::router())
        .fallback(api_not_found);

    Ok(Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(app_state))
}
