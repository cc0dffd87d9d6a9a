use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A staff member on the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    /// Number of days this person has served as duty officer
    pub duty_count: u32,
    /// Most recent duty day, `None` if the person has never served
    pub last_duty_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePersonRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonListResponse {
    pub people: Vec<Person>,
}

/// Daily attendance status values accepted by the marking endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    OnDuty,
    OnLeave,
    OffToday,
}

impl AttendanceStatus {
    /// Stored/wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::OnDuty => "on_duty",
            AttendanceStatus::OnLeave => "on_leave",
            AttendanceStatus::OffToday => "off_today",
        }
    }

    /// Parse a stored status; `None` for empty or unknown values
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "present" => Some(AttendanceStatus::Present),
            "on_duty" => Some(AttendanceStatus::OnDuty),
            "on_leave" => Some(AttendanceStatus::OnLeave),
            "off_today" => Some(AttendanceStatus::OffToday),
            _ => None,
        }
    }

    /// Whether someone with this status can be picked as duty officer
    pub fn is_eligible_for_duty(self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::OnDuty)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkAttendanceRequest {
    pub person_id: i64,
    pub status: AttendanceStatus,
    /// Who recorded the status (accountability trail)
    pub marked_by: String,
}

/// One stored attendance record for a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub person_id: i64,
    pub name: String,
    /// Raw stored status; may be a value the server no longer recognizes
    pub status: String,
    pub marked_by: String,
    pub time_marked: DateTime<Utc>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkAttendanceResponse {
    pub record: AttendanceRecord,
    pub success_message: String,
}

/// A roster member merged with their attendance for the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberStatus {
    pub person_id: i64,
    pub name: String,
    /// Stored status, or `"unmarked"` when no entry exists
    pub status: String,
    pub marked_by: Option<String>,
    pub time_marked: Option<DateTime<Utc>>,
    pub duty_count: u32,
    pub last_duty_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAttendanceResponse {
    pub date: NaiveDate,
    pub members: Vec<TeamMemberStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAttendanceResponse {
    pub date: NaiveDate,
    pub records: Vec<AttendanceRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub on_duty: usize,
    pub on_leave: usize,
    pub off_today: usize,
    pub unmarked: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummaryResponse {
    pub date: NaiveDate,
    pub summary: AttendanceSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutyAssignment {
    pub date: NaiveDate,
    pub person_id: i64,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutyOfficerResponse {
    pub date: NaiveDate,
    /// Fair-rotation pick for the day, `None` when nobody is eligible
    pub selected: Option<Person>,
    pub eligible_count: usize,
    /// Assignment already confirmed for the day, if any
    pub confirmed: Option<DutyAssignment>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfirmDutyRequest {
    pub date: Option<NaiveDate>,
    /// The person the client displayed; confirmation fails if the selection moved
    pub person_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmDutyResponse {
    pub assignment: DutyAssignment,
    pub officer: Person,
    pub success_message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(LeaveStatus::Pending),
            "approved" => Some(LeaveStatus::Approved),
            "rejected" => Some(LeaveStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyLeaveRequest {
    pub person_id: i64,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveResponse {
    pub leave: LeaveRequest,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveListResponse {
    pub leaves: Vec<LeaveRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Body for both creating and replacing a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub title: String,
    pub date: NaiveDate,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
