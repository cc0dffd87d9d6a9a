//! Shared fixtures for service and API tests.
//!
//! Every `TestStorage` sits on its own in-memory SQLite database, so tests
//! never see each other's rows.

use std::sync::Arc;

use chrono::Utc;

use super::connection::DbConnection;
use super::repositories::{
    AttendanceRepository, DutyRepository, LeaveRepository, PersonRepository, TaskRepository,
};
use super::traits::{AttendanceStorage, DutyStorage, LeaveStorage, PersonStorage, TaskStorage};
use crate::domain::models::{NewPerson, Person};

pub struct TestStorage {
    pub db: DbConnection,
    pub people: Arc<dyn PersonStorage>,
    pub attendance: Arc<dyn AttendanceStorage>,
    pub duty: Arc<dyn DutyStorage>,
    pub leaves: Arc<dyn LeaveStorage>,
    pub tasks: Arc<dyn TaskStorage>,
}

impl TestStorage {
    pub async fn new() -> Self {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");

        Self {
            people: Arc::new(PersonRepository::new(db.clone())),
            attendance: Arc::new(AttendanceRepository::new(db.clone())),
            duty: Arc::new(DutyRepository::new(db.clone())),
            leaves: Arc::new(LeaveRepository::new(db.clone())),
            tasks: Arc::new(TaskRepository::new(db.clone())),
            db,
        }
    }

    /// Add a person to the roster
    pub async fn add_person(&self, name: &str) -> Person {
        self.people
            .store_person(&NewPerson {
                name: name.to_string(),
                created_at: Utc::now(),
            })
            .await
            .expect("Failed to store person")
    }

    /// Overwrite a person's rotation history directly
    pub async fn set_history(&self, person_id: i64, duty_count: u32, last_duty_date: Option<&str>) {
        sqlx::query("UPDATE people SET duty_count = ?, last_duty_date = ? WHERE id = ?")
            .bind(duty_count)
            .bind(last_duty_date)
            .bind(person_id)
            .execute(self.db.pool())
            .await
            .expect("Failed to set duty history");
    }
}
