use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::attendance_aggregator::compute_eligible_for_duty;
use crate::domain::attendance_service::AttendanceService;
use crate::domain::commands::duty::{ConfirmDutyCommand, ConfirmDutyResult, DutySelectionResult};
use crate::domain::duty_officer::select_duty_officer;
use crate::domain::models::{DutyAssignment, DutyError, PersonError};
use crate::storage::{DutyStorage, PersonStorage};

/// Picks and confirms the day's duty officer
#[derive(Clone)]
pub struct DutyService {
    attendance_service: AttendanceService,
    people: Arc<dyn PersonStorage>,
    duty: Arc<dyn DutyStorage>,
}

impl DutyService {
    pub fn new(
        attendance_service: AttendanceService,
        people: Arc<dyn PersonStorage>,
        duty: Arc<dyn DutyStorage>,
    ) -> Self {
        Self {
            attendance_service,
            people,
            duty,
        }
    }

    /// Current fair-rotation pick for a day, without crediting anyone
    pub async fn current_selection(&self, date: NaiveDate) -> Result<DutySelectionResult> {
        let snapshot = self.attendance_service.day_snapshot(date).await?;
        let eligible = compute_eligible_for_duty(&snapshot.entries, &snapshot.roster);
        let selected = select_duty_officer(eligible.iter().copied()).cloned();
        let confirmed = self.duty.get_assignment(date).await?;

        match &selected {
            Some(person) => info!(
                "Duty officer pick for {}: {} ({} eligible)",
                date,
                person.name,
                eligible.len()
            ),
            None => info!("No eligible duty officer for {}", date),
        }

        Ok(DutySelectionResult {
            date,
            selected,
            eligible_count: eligible.len(),
            confirmed,
        })
    }

    /// Confirm the current pick for a day and credit them with the duty.
    ///
    /// A day can be confirmed once. If the caller names the person they saw
    /// and the pick has moved on since, nothing is recorded.
    pub async fn confirm_duty_officer(
        &self,
        command: ConfirmDutyCommand,
        assigned_at: DateTime<Utc>,
    ) -> Result<ConfirmDutyResult> {
        info!("Confirming duty officer for {}", command.date);

        if let Some(existing) = self.duty.get_assignment(command.date).await? {
            warn!(
                "Duty officer for {} already confirmed: person {}",
                command.date, existing.person_id
            );
            return Err(DutyError::AlreadyAssigned {
                date: existing.date,
                person_id: existing.person_id,
            }
            .into());
        }

        let selection = self.current_selection(command.date).await?;
        let selected = selection
            .selected
            .ok_or(DutyError::NoEligibleOfficer(command.date))?;

        if let Some(expected) = command.expected_person_id {
            if expected != selected.id {
                warn!(
                    "Duty pick for {} changed from {} to {}",
                    command.date, expected, selected.id
                );
                return Err(DutyError::SelectionChanged {
                    expected,
                    actual: selected.id,
                }
                .into());
            }
        }

        let assignment = DutyAssignment {
            date: command.date,
            person_id: selected.id,
            assigned_at,
        };

        if !self.duty.record_assignment(&assignment).await? {
            // Lost a race with another confirmation for the same day
            let existing = self.duty.get_assignment(command.date).await?;
            return Err(DutyError::AlreadyAssigned {
                date: command.date,
                person_id: existing.map(|a| a.person_id).unwrap_or(selected.id),
            }
            .into());
        }

        let officer = self
            .people
            .get_person(selected.id)
            .await?
            .ok_or(PersonError::NotFound(selected.id))?;

        info!(
            "Confirmed {} as duty officer for {} (duty count now {})",
            officer.name, command.date, officer.duty_count
        );
        Ok(ConfirmDutyResult {
            assignment,
            officer,
        })
    }
}
