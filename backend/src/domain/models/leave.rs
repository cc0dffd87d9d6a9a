use chrono::{DateTime, NaiveDate, Utc};
use shared::LeaveStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct LeaveRequest {
    pub id: i64,
    pub person_id: i64,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

impl LeaveRequest {
    /// Inclusive number of calendar days covered
    pub fn days(&self) -> i64 {
        leave_days(self.start_date, self.end_date)
    }
}

pub fn leave_days(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days() + 1
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLeaveRequest {
    pub person_id: i64,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum LeaveError {
    #[error("Leave type cannot be empty")]
    EmptyLeaveType,
    #[error("Reason cannot be empty")]
    EmptyReason,
    #[error("End date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("Leave of {requested} days exceeds the maximum of {max} days per request")]
    TooManyDays { requested: i64, max: u32 },
    #[error("Leave must be requested at least {required} days in advance")]
    InsufficientNotice { required: u32 },
    #[error("Person not found: {0}")]
    UnknownPerson(i64),
    #[error("Leave request not found: {0}")]
    NotFound(i64),
    #[error("Leave request {id} is already {}", .status.as_str())]
    AlreadyDecided { id: i64, status: LeaveStatus },
}
