use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use shared::AttendanceStatus;

/// Status carried by a stored attendance entry.
///
/// Rows written before a status was retired, or by other tools, may hold
/// strings this server does not know. They are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    Known(AttendanceStatus),
    Unrecognized(String),
}

impl EntryStatus {
    pub fn from_raw(raw: &str) -> Self {
        match AttendanceStatus::parse(raw) {
            Some(status) => EntryStatus::Known(status),
            None => EntryStatus::Unrecognized(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EntryStatus::Known(status) => status.as_str(),
            EntryStatus::Unrecognized(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<AttendanceStatus> {
        match self {
            EntryStatus::Known(status) => Some(*status),
            EntryStatus::Unrecognized(_) => None,
        }
    }
}

impl From<AttendanceStatus> for EntryStatus {
    fn from(status: AttendanceStatus) -> Self {
        EntryStatus::Known(status)
    }
}

/// One attendance record for one person on one day
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceEntry {
    pub person_id: i64,
    pub status: EntryStatus,
    pub marked_by: String,
    pub time_marked: DateTime<Utc>,
    pub date: NaiveDate,
}

#[derive(Debug, thiserror::Error)]
pub enum AttendanceError {
    #[error("marked_by cannot be empty")]
    EmptyMarkedBy,
    #[error("Person not found: {0}")]
    UnknownPerson(i64),
    #[error("Attendance can only be marked between {start} and {end}")]
    MarkingWindowClosed { start: NaiveTime, end: NaiveTime },
}
