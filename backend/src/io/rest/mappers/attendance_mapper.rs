use chrono::NaiveDate;
use shared::{
    AttendanceRecord, AttendanceSummary, AttendanceSummaryResponse, DayAttendanceResponse,
    MarkAttendanceResponse, TeamAttendanceResponse, TeamMemberStatus,
};

use crate::domain::commands::attendance::{DayRecord, MarkAttendanceResult, TeamMember};
use crate::domain::models::AttendanceEntry;

/// Status shown for roster members with no entry for the day
pub const UNMARKED: &str = "unmarked";

pub struct AttendanceMapper;

impl AttendanceMapper {
    pub fn to_record_dto(entry: AttendanceEntry, name: String) -> AttendanceRecord {
        AttendanceRecord {
            person_id: entry.person_id,
            name,
            status: entry.status.as_str().to_string(),
            marked_by: entry.marked_by,
            time_marked: entry.time_marked,
            date: entry.date,
        }
    }

    pub fn to_mark_response(result: MarkAttendanceResult) -> MarkAttendanceResponse {
        let success_message = format!(
            "{} marked as {} for {}",
            result.person.name,
            result.entry.status.as_str(),
            result.entry.date
        );
        MarkAttendanceResponse {
            record: Self::to_record_dto(result.entry, result.person.name),
            success_message,
        }
    }

    pub fn to_day_response(date: NaiveDate, records: Vec<DayRecord>) -> DayAttendanceResponse {
        DayAttendanceResponse {
            date,
            records: records
                .into_iter()
                .map(|r| Self::to_record_dto(r.entry, r.name))
                .collect(),
        }
    }

    pub fn to_team_member_dto(member: TeamMember) -> TeamMemberStatus {
        let person = member.person;
        match member.entry {
            Some(entry) => TeamMemberStatus {
                person_id: person.id,
                name: person.name,
                status: entry.status.as_str().to_string(),
                marked_by: Some(entry.marked_by),
                time_marked: Some(entry.time_marked),
                duty_count: person.duty_count,
                last_duty_date: person.last_duty_date,
            },
            None => TeamMemberStatus {
                person_id: person.id,
                name: person.name,
                status: UNMARKED.to_string(),
                marked_by: None,
                time_marked: None,
                duty_count: person.duty_count,
                last_duty_date: person.last_duty_date,
            },
        }
    }

    pub fn to_team_response(date: NaiveDate, members: Vec<TeamMember>) -> TeamAttendanceResponse {
        TeamAttendanceResponse {
            date,
            members: members.into_iter().map(Self::to_team_member_dto).collect(),
        }
    }

    pub fn to_summary_response(date: NaiveDate, summary: AttendanceSummary) -> AttendanceSummaryResponse {
        AttendanceSummaryResponse { date, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{EntryStatus, Person};
    use chrono::Utc;

    fn person() -> Person {
        Person {
            id: 7,
            name: "Jane Smith".to_string(),
            duty_count: 2,
            last_duty_date: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_team_member_without_entry_is_unmarked() {
        let dto = AttendanceMapper::to_team_member_dto(TeamMember {
            person: person(),
            entry: None,
        });

        assert_eq!(dto.status, "unmarked");
        assert!(dto.marked_by.is_none());
        assert_eq!(dto.duty_count, 2);
    }

    #[test]
    fn test_unrecognized_status_is_reported_verbatim() {
        let entry = AttendanceEntry {
            person_id: 7,
            status: EntryStatus::from_raw("remote"),
            marked_by: "Admin".to_string(),
            time_marked: Utc::now(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };

        let dto = AttendanceMapper::to_team_member_dto(TeamMember {
            person: person(),
            entry: Some(entry),
        });

        assert_eq!(dto.status, "remote");
        assert_eq!(dto.marked_by.as_deref(), Some("Admin"));
    }
}
