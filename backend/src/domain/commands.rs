//! Domain-level command and result types.
//!
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the DTOs defined in the
//! `shared` crate to these internal types.

pub mod people {
    /// Input for adding someone to the roster.
    #[derive(Debug, Clone)]
    pub struct CreatePersonCommand {
        pub name: String,
    }
}

pub mod attendance {
    use chrono::{DateTime, FixedOffset, NaiveDate};
    use shared::AttendanceStatus;

    use crate::domain::models::{AttendanceEntry, Person};

    /// Input for marking one person's status for the day.
    #[derive(Debug, Clone)]
    pub struct MarkAttendanceCommand {
        pub person_id: i64,
        pub status: AttendanceStatus,
        pub marked_by: String,
        /// Local wall-clock time of the mark; its date is the attendance day
        pub marked_at: DateTime<FixedOffset>,
    }

    /// Result of marking attendance.
    #[derive(Debug, Clone)]
    pub struct MarkAttendanceResult {
        pub entry: AttendanceEntry,
        pub person: Person,
    }

    /// Everything recorded for one day: the full roster and that day's entries.
    #[derive(Debug, Clone)]
    pub struct DaySnapshot {
        pub date: NaiveDate,
        pub roster: Vec<Person>,
        pub entries: Vec<AttendanceEntry>,
    }

    /// An entry joined with the name of the person it belongs to.
    #[derive(Debug, Clone)]
    pub struct DayRecord {
        pub entry: AttendanceEntry,
        pub name: String,
    }

    /// A roster member with their entry for the day, if any.
    #[derive(Debug, Clone)]
    pub struct TeamMember {
        pub person: Person,
        pub entry: Option<AttendanceEntry>,
    }
}

pub mod duty {
    use chrono::NaiveDate;

    use crate::domain::models::{DutyAssignment, Person};

    /// Input for confirming the day's duty officer.
    #[derive(Debug, Clone)]
    pub struct ConfirmDutyCommand {
        pub date: NaiveDate,
        /// Person the caller expects to be confirmed
        pub expected_person_id: Option<i64>,
    }

    /// Result of the fair-rotation pick for a day.
    #[derive(Debug, Clone)]
    pub struct DutySelectionResult {
        pub date: NaiveDate,
        pub selected: Option<Person>,
        pub eligible_count: usize,
        pub confirmed: Option<DutyAssignment>,
    }

    /// Result of confirming a duty officer.
    #[derive(Debug, Clone)]
    pub struct ConfirmDutyResult {
        pub assignment: DutyAssignment,
        /// The officer after being credited with the duty
        pub officer: Person,
    }
}

pub mod leave {
    use chrono::NaiveDate;

    /// Input for a new leave request.
    #[derive(Debug, Clone)]
    pub struct ApplyLeaveCommand {
        pub person_id: i64,
        pub leave_type: String,
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
        pub reason: String,
        /// Day the request is made, used for the advance notice rule
        pub today: NaiveDate,
    }
}

pub mod tasks {
    use chrono::NaiveDate;

    /// Input for creating or replacing a task.
    #[derive(Debug, Clone)]
    pub struct TaskCommand {
        pub title: String,
        pub date: NaiveDate,
        pub category: String,
    }
}
