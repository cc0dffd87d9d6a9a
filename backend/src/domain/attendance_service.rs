//! Attendance marking and per-day views.
//!
//! Marking goes through the morning window check and an upsert, so the
//! latest mark for a person on a day is the only one kept. The read side
//! loads a [`DaySnapshot`] (full roster plus that day's entries) and derives
//! the team view and summary counts from it.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use shared::AttendanceSummary;

use crate::domain::attendance_aggregator::compute_summary;
use crate::domain::commands::attendance::{
    DayRecord, DaySnapshot, MarkAttendanceCommand, MarkAttendanceResult, TeamMember,
};
use crate::domain::marking_window::AttendancePolicy;
use crate::domain::models::{AttendanceEntry, AttendanceError};
use crate::storage::{AttendanceStorage, PersonStorage};

#[derive(Clone)]
pub struct AttendanceService {
    people: Arc<dyn PersonStorage>,
    attendance: Arc<dyn AttendanceStorage>,
    policy: AttendancePolicy,
}

impl AttendanceService {
    pub fn new(
        people: Arc<dyn PersonStorage>,
        attendance: Arc<dyn AttendanceStorage>,
        policy: AttendancePolicy,
    ) -> Self {
        Self {
            people,
            attendance,
            policy,
        }
    }

    /// Record a person's status for the day of `marked_at`, replacing any earlier mark
    pub async fn mark_attendance(&self, command: MarkAttendanceCommand) -> Result<MarkAttendanceResult> {
        info!(
            "Marking attendance: person={} status={} by={}",
            command.person_id,
            command.status.as_str(),
            command.marked_by
        );

        let marked_by = command.marked_by.trim();
        if marked_by.is_empty() {
            return Err(AttendanceError::EmptyMarkedBy.into());
        }

        let window = self.policy.window;
        if self.policy.auto_lock_after_deadline && !window.contains(command.marked_at.time()) {
            warn!(
                "Rejected mark at {} outside window {}-{}",
                command.marked_at.time(),
                window.start(),
                window.end()
            );
            return Err(AttendanceError::MarkingWindowClosed {
                start: window.start(),
                end: window.end(),
            }
            .into());
        }

        let person = self
            .people
            .get_person(command.person_id)
            .await?
            .ok_or(AttendanceError::UnknownPerson(command.person_id))?;

        let entry = AttendanceEntry {
            person_id: person.id,
            status: command.status.into(),
            marked_by: marked_by.to_string(),
            time_marked: command.marked_at.with_timezone(&Utc),
            date: command.marked_at.date_naive(),
        };
        self.attendance.upsert_entry(&entry).await?;

        info!("Marked {} as {} for {}", person.name, entry.status.as_str(), entry.date);
        Ok(MarkAttendanceResult { entry, person })
    }

    /// Load the roster and the day's entries
    pub async fn day_snapshot(&self, date: NaiveDate) -> Result<DaySnapshot> {
        let roster = self.people.list_people().await?;
        let entries = self.attendance.list_entries_for_date(date).await?;

        info!(
            "Loaded attendance for {}: {} entries across {} people",
            date,
            entries.len(),
            roster.len()
        );
        Ok(DaySnapshot {
            date,
            roster,
            entries,
        })
    }

    /// The day's entries with the marked person's name
    pub async fn day_records(&self, date: NaiveDate) -> Result<Vec<DayRecord>> {
        let snapshot = self.day_snapshot(date).await?;
        let names: HashMap<i64, &str> = snapshot
            .roster
            .iter()
            .map(|p| (p.id, p.name.as_str()))
            .collect();

        Ok(snapshot
            .entries
            .iter()
            .map(|entry| DayRecord {
                name: names
                    .get(&entry.person_id)
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| format!("#{}", entry.person_id)),
                entry: entry.clone(),
            })
            .collect())
    }

    /// Every roster member with their entry for the day, if any
    pub async fn team_attendance(&self, date: NaiveDate) -> Result<Vec<TeamMember>> {
        let snapshot = self.day_snapshot(date).await?;
        let mut by_person: HashMap<i64, AttendanceEntry> = snapshot
            .entries
            .into_iter()
            .map(|entry| (entry.person_id, entry))
            .collect();

        Ok(snapshot
            .roster
            .into_iter()
            .map(|person| TeamMember {
                entry: by_person.remove(&person.id),
                person,
            })
            .collect())
    }

    /// Status counts for the day
    pub async fn summary(&self, date: NaiveDate) -> Result<AttendanceSummary> {
        let snapshot = self.day_snapshot(date).await?;
        Ok(compute_summary(&snapshot.entries, &snapshot.roster))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::marking_window::MarkingWindow;
    use crate::domain::models::EntryStatus;
    use crate::storage::test_utils::TestStorage;
    use chrono::{DateTime, FixedOffset, NaiveTime};
    use shared::AttendanceStatus;

    fn service(storage: &TestStorage, policy: AttendancePolicy) -> AttendanceService {
        AttendanceService::new(storage.people.clone(), storage.attendance.clone(), policy)
    }

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    fn mark(person_id: i64, status: AttendanceStatus, marked_at: &str) -> MarkAttendanceCommand {
        MarkAttendanceCommand {
            person_id,
            status,
            marked_by: "Shift Lead".to_string(),
            marked_at: at(marked_at),
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[tokio::test]
    async fn test_mark_attendance_inside_window() {
        let storage = TestStorage::new().await;
        let jane = storage.add_person("Jane Smith").await;
        let service = service(&storage, AttendancePolicy::default());

        let result = service
            .mark_attendance(mark(jane.id, AttendanceStatus::Present, "2024-01-15T07:30:00+03:00"))
            .await
            .unwrap();

        assert_eq!(result.person.id, jane.id);
        assert_eq!(result.entry.date, day());
        assert_eq!(result.entry.status, EntryStatus::Known(AttendanceStatus::Present));
        // Stored in UTC, the window is checked on the local wall clock
        assert_eq!(result.entry.time_marked.to_rfc3339(), "2024-01-15T04:30:00+00:00");
    }

    #[tokio::test]
    async fn test_mark_attendance_outside_window_is_rejected() {
        let storage = TestStorage::new().await;
        let jane = storage.add_person("Jane Smith").await;
        let service = service(&storage, AttendancePolicy::default());

        for late in ["2024-01-15T10:00:00+00:00", "2024-01-15T05:59:59+00:00"] {
            let err = service
                .mark_attendance(mark(jane.id, AttendanceStatus::Present, late))
                .await
                .unwrap_err();
            assert!(matches!(
                err.downcast_ref::<AttendanceError>(),
                Some(AttendanceError::MarkingWindowClosed { .. })
            ));
        }

        assert!(service.day_records(day()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_window_not_enforced_when_lock_disabled() {
        let storage = TestStorage::new().await;
        let jane = storage.add_person("Jane Smith").await;
        let policy = AttendancePolicy {
            window: MarkingWindow::default(),
            auto_lock_after_deadline: false,
        };
        let service = service(&storage, policy);

        let result = service
            .mark_attendance(mark(jane.id, AttendanceStatus::OffToday, "2024-01-15T18:00:00+00:00"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_custom_window() {
        let storage = TestStorage::new().await;
        let jane = storage.add_person("Jane Smith").await;
        let window = MarkingWindow::new(
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        )
        .unwrap();
        let service = service(
            &storage,
            AttendancePolicy {
                window,
                auto_lock_after_deadline: true,
            },
        );

        assert!(service
            .mark_attendance(mark(jane.id, AttendanceStatus::Present, "2024-01-15T08:00:00+00:00"))
            .await
            .is_err());
        assert!(service
            .mark_attendance(mark(jane.id, AttendanceStatus::Present, "2024-01-15T12:15:00+00:00"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_mark_attendance_validation() {
        let storage = TestStorage::new().await;
        let jane = storage.add_person("Jane Smith").await;
        let service = service(&storage, AttendancePolicy::default());

        let mut blank = mark(jane.id, AttendanceStatus::Present, "2024-01-15T07:00:00+00:00");
        blank.marked_by = "  ".to_string();
        let err = service.mark_attendance(blank).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<AttendanceError>(), Some(AttendanceError::EmptyMarkedBy)));

        let err = service
            .mark_attendance(mark(999, AttendanceStatus::Present, "2024-01-15T07:00:00+00:00"))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AttendanceError>(),
            Some(AttendanceError::UnknownPerson(999))
        ));
    }

    #[tokio::test]
    async fn test_later_mark_supersedes_earlier() {
        let storage = TestStorage::new().await;
        let jane = storage.add_person("Jane Smith").await;
        let service = service(&storage, AttendancePolicy::default());

        service
            .mark_attendance(mark(jane.id, AttendanceStatus::Present, "2024-01-15T07:00:00+00:00"))
            .await
            .unwrap();
        let mut correction = mark(jane.id, AttendanceStatus::OnLeave, "2024-01-15T08:45:00+00:00");
        correction.marked_by = "Admin".to_string();
        service.mark_attendance(correction).await.unwrap();

        let records = service.day_records(day()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Jane Smith");
        assert_eq!(records[0].entry.status.known(), Some(AttendanceStatus::OnLeave));
        assert_eq!(records[0].entry.marked_by, "Admin");

        let summary = service.summary(day()).await.unwrap();
        assert_eq!(summary.present, 0);
        assert_eq!(summary.on_leave, 1);
    }

    #[tokio::test]
    async fn test_team_attendance_merges_roster_and_entries() {
        let storage = TestStorage::new().await;
        let jane = storage.add_person("Jane Smith").await;
        let mike = storage.add_person("Mike Johnson").await;
        let service = service(&storage, AttendancePolicy::default());

        service
            .mark_attendance(mark(mike.id, AttendanceStatus::OnDuty, "2024-01-15T06:10:00+00:00"))
            .await
            .unwrap();

        let team = service.team_attendance(day()).await.unwrap();
        assert_eq!(team.len(), 2);

        let jane_row = team.iter().find(|m| m.person.id == jane.id).unwrap();
        assert!(jane_row.entry.is_none());
        let mike_row = team.iter().find(|m| m.person.id == mike.id).unwrap();
        assert_eq!(
            mike_row.entry.as_ref().and_then(|e| e.status.known()),
            Some(AttendanceStatus::OnDuty)
        );

        // Entries from another day do not leak in
        let next_day = service.team_attendance(day().succ_opt().unwrap()).await.unwrap();
        assert!(next_day.iter().all(|m| m.entry.is_none()));
    }

    #[tokio::test]
    async fn test_summary_for_five_person_team() {
        let storage = TestStorage::new().await;
        let mut ids = Vec::new();
        for name in ["A", "B", "C", "D", "E"] {
            ids.push(storage.add_person(name).await.id);
        }
        let service = service(&storage, AttendancePolicy::default());

        for (id, status) in [
            (ids[0], AttendanceStatus::Present),
            (ids[1], AttendanceStatus::Present),
            (ids[2], AttendanceStatus::OnLeave),
        ] {
            service
                .mark_attendance(mark(id, status, "2024-01-15T07:00:00+00:00"))
                .await
                .unwrap();
        }

        let summary = service.summary(day()).await.unwrap();
        assert_eq!(
            summary,
            AttendanceSummary {
                total: 5,
                present: 2,
                on_duty: 0,
                on_leave: 1,
                off_today: 0,
                unmarked: 2,
            }
        );
    }
}
