use chrono::{DateTime, NaiveDate, Utc};

/// A confirmed duty officer for a day
#[derive(Debug, Clone, PartialEq)]
pub struct DutyAssignment {
    pub date: NaiveDate,
    pub person_id: i64,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum DutyError {
    #[error("No eligible duty officer on {0}")]
    NoEligibleOfficer(NaiveDate),
    #[error("Selection changed: expected person {expected}, current pick is {actual}")]
    SelectionChanged { expected: i64, actual: i64 },
    #[error("Duty officer for {date} already assigned to person {person_id}")]
    AlreadyAssigned { date: NaiveDate, person_id: i64 },
}
