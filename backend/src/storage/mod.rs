//! # Storage Module
//!
//! Persistence for the duty roster: the roster, daily attendance, confirmed
//! duty assignments, leave requests and the task board.
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: SQLite database through SQLx, schema created on startup
//! - **Repository Pattern**: one repository per table group, each behind a trait in
//!   [`traits`] so domain services never see SQL
//!
//! ## Invariants enforced here
//!
//! - At most one attendance entry per person per day (`UNIQUE (person_id, date)`
//!   plus upsert on write)
//! - At most one confirmed duty officer per day (`duty_assignments.date` primary
//!   key, written in the same transaction that credits the person)

pub mod connection;
pub mod repositories;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use connection::DbConnection;
pub use repositories::{
    AttendanceRepository,
    DutyRepository,
    LeaveRepository,
    PersonRepository,
    TaskRepository,
};
pub use traits::*;
