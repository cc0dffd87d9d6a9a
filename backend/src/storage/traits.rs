//! # Storage Traits
//!
//! Storage abstractions the domain services depend on. The SQLite
//! repositories in `repositories/` implement them; services only ever hold
//! `Arc<dyn ...Storage>`.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::LeaveStatus;

use crate::domain::models::{
    AttendanceEntry, DutyAssignment, LeaveRequest, NewLeaveRequest, NewPerson, NewTask, Person,
    Task,
};

/// Roster storage
#[async_trait]
pub trait PersonStorage: Send + Sync {
    /// Store a new person and return it with its assigned ID
    async fn store_person(&self, person: &NewPerson) -> Result<Person>;

    /// Retrieve a person by ID
    async fn get_person(&self, person_id: i64) -> Result<Option<Person>>;

    /// List the full roster ordered by name
    async fn list_people(&self) -> Result<Vec<Person>>;
}

/// Daily attendance storage
#[async_trait]
pub trait AttendanceStorage: Send + Sync {
    /// Insert the entry, or replace the existing entry for the same person and day
    async fn upsert_entry(&self, entry: &AttendanceEntry) -> Result<()>;

    /// Get the entry for a person on a day
    async fn get_entry(&self, person_id: i64, date: NaiveDate) -> Result<Option<AttendanceEntry>>;

    /// All entries recorded for a day
    async fn list_entries_for_date(&self, date: NaiveDate) -> Result<Vec<AttendanceEntry>>;
}

/// Confirmed duty officer storage
#[async_trait]
pub trait DutyStorage: Send + Sync {
    /// Get the confirmed assignment for a day
    async fn get_assignment(&self, date: NaiveDate) -> Result<Option<DutyAssignment>>;

    /// Record the assignment and credit the person in one transaction.
    ///
    /// Returns false without changing anything if the day already has an
    /// assignment.
    async fn record_assignment(&self, assignment: &DutyAssignment) -> Result<bool>;
}

/// Leave request storage
#[async_trait]
pub trait LeaveStorage: Send + Sync {
    async fn store_leave(&self, leave: &NewLeaveRequest) -> Result<LeaveRequest>;

    async fn get_leave(&self, leave_id: i64) -> Result<Option<LeaveRequest>>;

    /// List leave requests, newest first, optionally filtered by status
    async fn list_leaves(&self, status: Option<LeaveStatus>) -> Result<Vec<LeaveRequest>>;

    /// Persist the decision on a request that is still pending.
    ///
    /// Returns false without writing if the stored request has already been
    /// decided.
    async fn decide_leave(&self, leave: &LeaveRequest) -> Result<bool>;
}

/// Task board storage
#[async_trait]
pub trait TaskStorage: Send + Sync {
    async fn store_task(&self, task: &NewTask) -> Result<Task>;

    async fn get_task(&self, task_id: i64) -> Result<Option<Task>>;

    /// List tasks ordered by date ascending
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    async fn update_task(&self, task: &Task) -> Result<()>;

    /// Returns true if the task existed and was deleted
    async fn delete_task(&self, task_id: i64) -> Result<bool>;
}
