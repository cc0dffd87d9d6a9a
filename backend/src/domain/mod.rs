//! # Domain Module
//!
//! Business rules for the duty roster, independent of HTTP and SQL.
//!
//! ## Module Organization
//!
//! - **attendance_aggregator**: pure derivations over one day's attendance
//!   (who can take duty, per-status counts)
//! - **duty_officer**: fair-rotation pick among eligible people
//! - **marking_window**: the morning window attendance must be marked in
//! - **\*_service**: orchestration over the storage traits
//!
//! ## Business Rules
//!
//! - Only `present` and `on_duty` people can be picked as duty officer
//! - The pick favours the lowest duty count, then the oldest last duty date;
//!   people who never served go first among equal counts
//! - Looking at the pick never changes anyone's history; only confirming does
//! - Each day has at most one confirmed duty officer

pub mod attendance_aggregator;
pub mod attendance_service;
pub mod commands;
pub mod duty_officer;
pub mod duty_service;
pub mod leave_service;
pub mod marking_window;
pub mod models;
pub mod person_service;
pub mod task_service;

pub use attendance_service::AttendanceService;
pub use duty_service::DutyService;
pub use leave_service::{LeavePolicy, LeaveService};
pub use marking_window::{AttendancePolicy, MarkingWindow};
pub use person_service::PersonService;
pub use task_service::TaskService;
