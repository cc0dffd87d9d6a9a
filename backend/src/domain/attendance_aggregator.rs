//! Attendance aggregation for a single calendar day.
//!
//! Both functions operate on a snapshot handed in by the caller: the full
//! roster and the entries recorded for one day. Entries are expected to be
//! unique per person (the attendance table enforces this with an upsert).
//! Behavior on entries that reference people outside the roster is not
//! defined beyond "they never appear in the eligible set".

use std::collections::HashSet;

use shared::{AttendanceStatus, AttendanceSummary};

use crate::domain::models::{AttendanceEntry, Person};

/// Roster members whose status for the day is `present` or `on_duty`.
///
/// The result keeps roster order, which is what the duty officer selector
/// falls back on when two candidates cannot be told apart.
pub fn compute_eligible_for_duty<'a>(
    entries: &[AttendanceEntry],
    roster: &'a [Person],
) -> Vec<&'a Person> {
    let eligible_ids: HashSet<i64> = entries
        .iter()
        .filter(|entry| {
            entry
                .status
                .known()
                .is_some_and(AttendanceStatus::is_eligible_for_duty)
        })
        .map(|entry| entry.person_id)
        .collect();

    roster
        .iter()
        .filter(|person| eligible_ids.contains(&person.id))
        .collect()
}

/// Count the day's entries per status and the roster members with no entry.
///
/// An entry whose status is empty or unrecognized lands in no bucket, and its
/// person is not counted as unmarked either.
pub fn compute_summary(entries: &[AttendanceEntry], roster: &[Person]) -> AttendanceSummary {
    let mut summary = AttendanceSummary {
        total: roster.len(),
        ..AttendanceSummary::default()
    };
    let mut marked_ids = HashSet::with_capacity(entries.len());

    for entry in entries {
        marked_ids.insert(entry.person_id);

        match entry.status.known() {
            Some(AttendanceStatus::Present) => summary.present += 1,
            Some(AttendanceStatus::OnDuty) => summary.on_duty += 1,
            Some(AttendanceStatus::OnLeave) => summary.on_leave += 1,
            Some(AttendanceStatus::OffToday) => summary.off_today += 1,
            None => {}
        }
    }

    summary.unmarked = roster
        .iter()
        .filter(|person| !marked_ids.contains(&person.id))
        .count();

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EntryStatus;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn person(id: i64) -> Person {
        Person {
            id,
            name: format!("Analyst {}", id),
            duty_count: 0,
            last_duty_date: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn entry(person_id: i64, status: EntryStatus) -> AttendanceEntry {
        AttendanceEntry {
            person_id,
            status,
            marked_by: "shift lead".to_string(),
            time_marked: Utc.with_ymd_and_hms(2024, 1, 15, 7, 5, 0).unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    fn known(person_id: i64, status: AttendanceStatus) -> AttendanceEntry {
        entry(person_id, status.into())
    }

    fn roster(size: i64) -> Vec<Person> {
        (1..=size).map(person).collect()
    }

    #[test]
    fn test_eligible_includes_present_and_on_duty_only() {
        let roster = roster(5);
        let entries = vec![
            known(1, AttendanceStatus::Present),
            known(2, AttendanceStatus::OnDuty),
            known(3, AttendanceStatus::OnLeave),
            known(4, AttendanceStatus::OffToday),
        ];

        let eligible = compute_eligible_for_duty(&entries, &roster);
        let ids: Vec<i64> = eligible.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_eligible_keeps_roster_order() {
        let roster = roster(3);
        let entries = vec![
            known(3, AttendanceStatus::Present),
            known(1, AttendanceStatus::OnDuty),
        ];

        let ids: Vec<i64> = compute_eligible_for_duty(&entries, &roster)
            .iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_eligible_excludes_unrecognized_and_unknown_people() {
        let roster = roster(2);
        let entries = vec![
            entry(1, EntryStatus::Unrecognized(String::new())),
            entry(2, EntryStatus::Unrecognized("remote".to_string())),
            known(99, AttendanceStatus::Present),
        ];

        assert!(compute_eligible_for_duty(&entries, &roster).is_empty());
    }

    #[test]
    fn test_eligible_empty_inputs() {
        assert!(compute_eligible_for_duty(&[], &[]).is_empty());
        assert!(compute_eligible_for_duty(&[], &roster(3)).is_empty());
    }

    #[test]
    fn test_summary_five_person_roster() {
        // 2 present, 1 on leave, 2 with no entry at all
        let roster = roster(5);
        let entries = vec![
            known(1, AttendanceStatus::Present),
            known(2, AttendanceStatus::Present),
            known(3, AttendanceStatus::OnLeave),
        ];

        let summary = compute_summary(&entries, &roster);

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

    #[test]
    fn test_summary_every_bucket() {
        let roster = roster(5);
        let entries = vec![
            known(1, AttendanceStatus::Present),
            known(2, AttendanceStatus::OnDuty),
            known(3, AttendanceStatus::OnLeave),
            known(4, AttendanceStatus::OffToday),
        ];

        let summary = compute_summary(&entries, &roster);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.present, 1);
        assert_eq!(summary.on_duty, 1);
        assert_eq!(summary.on_leave, 1);
        assert_eq!(summary.off_today, 1);
        assert_eq!(summary.unmarked, 1);
    }

    #[test]
    fn test_summary_drops_unrecognized_status_from_all_buckets() {
        let roster = roster(3);
        let entries = vec![
            known(1, AttendanceStatus::Present),
            entry(2, EntryStatus::Unrecognized("half_day".to_string())),
        ];

        let summary = compute_summary(&entries, &roster);

        assert_eq!(summary.present, 1);
        // Person 2 has an entry, so only person 3 is unmarked
        assert_eq!(summary.unmarked, 1);
        let counted = summary.present
            + summary.on_duty
            + summary.on_leave
            + summary.off_today
            + summary.unmarked;
        assert_eq!(counted, 2);
        assert!(counted < summary.total);
    }

    #[test]
    fn test_summary_buckets_never_exceed_total() {
        let statuses = [
            None,
            Some(EntryStatus::Known(AttendanceStatus::Present)),
            Some(EntryStatus::Known(AttendanceStatus::OnDuty)),
            Some(EntryStatus::Known(AttendanceStatus::OnLeave)),
            Some(EntryStatus::Known(AttendanceStatus::OffToday)),
            Some(EntryStatus::Unrecognized(String::new())),
        ];
        let roster = roster(3);

        // Every combination of status (or no entry) across a three person roster
        for a in &statuses {
            for b in &statuses {
                for c in &statuses {
                    let entries: Vec<AttendanceEntry> = [a, b, c]
                        .into_iter()
                        .enumerate()
                        .filter_map(|(i, s)| s.clone().map(|s| entry(i as i64 + 1, s)))
                        .collect();

                    let summary = compute_summary(&entries, &roster);
                    let counted = summary.present
                        + summary.on_duty
                        + summary.on_leave
                        + summary.off_today
                        + summary.unmarked;
                    let all_recognized = entries.iter().all(|e| e.status.known().is_some());

                    assert_eq!(summary.total, roster.len());
                    assert!(counted <= summary.total);
                    assert_eq!(counted == summary.total, all_recognized);
                }
            }
        }
    }

    #[test]
    fn test_summary_empty_roster() {
        assert_eq!(compute_summary(&[], &[]), AttendanceSummary::default());
    }
}
