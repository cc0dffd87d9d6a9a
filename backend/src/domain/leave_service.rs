use anyhow::Result;
use chrono::{DateTime, Utc};
use shared::LeaveStatus;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::leave::ApplyLeaveCommand;
use crate::domain::models::{leave_days, LeaveError, LeaveRequest, NewLeaveRequest};
use crate::storage::{LeaveStorage, PersonStorage};

/// Rules for new leave requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeavePolicy {
    /// When false, new requests are approved on submission
    pub require_approval: bool,
    pub max_leave_days: u32,
    pub advance_notice_days: u32,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            require_approval: true,
            max_leave_days: 10,
            advance_notice_days: 7,
        }
    }
}

#[derive(Clone)]
pub struct LeaveService {
    leaves: Arc<dyn LeaveStorage>,
    people: Arc<dyn PersonStorage>,
    policy: LeavePolicy,
}

impl LeaveService {
    pub fn new(
        leaves: Arc<dyn LeaveStorage>,
        people: Arc<dyn PersonStorage>,
        policy: LeavePolicy,
    ) -> Self {
        Self {
            leaves,
            people,
            policy,
        }
    }

    /// Submit a leave request
    pub async fn apply_leave(
        &self,
        command: ApplyLeaveCommand,
        applied_at: DateTime<Utc>,
    ) -> Result<LeaveRequest> {
        info!(
            "Applying leave: person={} type={} {}..{}",
            command.person_id, command.leave_type, command.start_date, command.end_date
        );

        let leave_type = command.leave_type.trim();
        if leave_type.is_empty() {
            return Err(LeaveError::EmptyLeaveType.into());
        }
        let reason = command.reason.trim();
        if reason.is_empty() {
            return Err(LeaveError::EmptyReason.into());
        }
        if command.end_date < command.start_date {
            return Err(LeaveError::EndBeforeStart {
                start: command.start_date,
                end: command.end_date,
            }
            .into());
        }

        let requested = leave_days(command.start_date, command.end_date);
        if requested > i64::from(self.policy.max_leave_days) {
            return Err(LeaveError::TooManyDays {
                requested,
                max: self.policy.max_leave_days,
            }
            .into());
        }

        let notice = (command.start_date - command.today).num_days();
        if notice < i64::from(self.policy.advance_notice_days) {
            return Err(LeaveError::InsufficientNotice {
                required: self.policy.advance_notice_days,
            }
            .into());
        }

        if self.people.get_person(command.person_id).await?.is_none() {
            return Err(LeaveError::UnknownPerson(command.person_id).into());
        }

        let status = if self.policy.require_approval {
            LeaveStatus::Pending
        } else {
            LeaveStatus::Approved
        };

        let leave = self
            .leaves
            .store_leave(&NewLeaveRequest {
                person_id: command.person_id,
                leave_type: leave_type.to_string(),
                start_date: command.start_date,
                end_date: command.end_date,
                reason: reason.to_string(),
                status,
                applied_at,
            })
            .await?;

        info!(
            "Stored leave request {} ({} days, {})",
            leave.id,
            requested,
            leave.status.as_str()
        );
        Ok(leave)
    }

    pub async fn list_leaves(&self, status: Option<LeaveStatus>) -> Result<Vec<LeaveRequest>> {
        self.leaves.list_leaves(status).await
    }

    pub async fn approve_leave(&self, leave_id: i64, decided_at: DateTime<Utc>) -> Result<LeaveRequest> {
        self.decide(leave_id, LeaveStatus::Approved, decided_at).await
    }

    pub async fn reject_leave(&self, leave_id: i64, decided_at: DateTime<Utc>) -> Result<LeaveRequest> {
        self.decide(leave_id, LeaveStatus::Rejected, decided_at).await
    }

    /// Move a pending request to its final status
    async fn decide(
        &self,
        leave_id: i64,
        status: LeaveStatus,
        decided_at: DateTime<Utc>,
    ) -> Result<LeaveRequest> {
        let mut leave = self
            .leaves
            .get_leave(leave_id)
            .await?
            .ok_or(LeaveError::NotFound(leave_id))?;

        if leave.status != LeaveStatus::Pending {
            warn!(
                "Leave request {} is already {}, cannot mark {}",
                leave_id,
                leave.status.as_str(),
                status.as_str()
            );
            return Err(LeaveError::AlreadyDecided {
                id: leave_id,
                status: leave.status,
            }
            .into());
        }

        leave.status = status;
        leave.decided_at = Some(decided_at);
        if !self.leaves.decide_leave(&leave).await? {
            // Decided by another caller between the read and the write
            let current = self
                .leaves
                .get_leave(leave_id)
                .await?
                .ok_or(LeaveError::NotFound(leave_id))?;
            warn!(
                "Leave request {} was decided concurrently as {}",
                leave_id,
                current.status.as_str()
            );
            return Err(LeaveError::AlreadyDecided {
                id: leave_id,
                status: current.status,
            }
            .into());
        }

        info!("Leave request {} {}", leave_id, status.as_str());
        Ok(leave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::TestStorage;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-15T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn request(person_id: i64, start: &str, end: &str) -> ApplyLeaveCommand {
        ApplyLeaveCommand {
            person_id,
            leave_type: "annual".to_string(),
            start_date: date(start),
            end_date: date(end),
            reason: "Family visit".to_string(),
            today: date("2024-01-15"),
        }
    }

    async fn setup(policy: LeavePolicy) -> (LeaveService, i64) {
        let storage = TestStorage::new().await;
        let person = storage.add_person("Jane Smith").await;
        let service = LeaveService::new(storage.leaves.clone(), storage.people.clone(), policy);
        (service, person.id)
    }

    fn leave_error(err: &anyhow::Error) -> &LeaveError {
        err.downcast_ref::<LeaveError>().expect("expected a LeaveError")
    }

    #[tokio::test]
    async fn test_apply_leave_starts_pending() {
        let (service, person_id) = setup(LeavePolicy::default()).await;

        let leave = service
            .apply_leave(request(person_id, "2024-01-22", "2024-01-26"), now())
            .await
            .unwrap();

        assert_eq!(leave.status, LeaveStatus::Pending);
        assert_eq!(leave.days(), 5);
        assert_eq!(leave.applied_at, now());
        assert!(leave.decided_at.is_none());
    }

    #[tokio::test]
    async fn test_apply_leave_auto_approved_without_approval_step() {
        let policy = LeavePolicy {
            require_approval: false,
            ..LeavePolicy::default()
        };
        let (service, person_id) = setup(policy).await;

        let leave = service
            .apply_leave(request(person_id, "2024-01-22", "2024-01-22"), now())
            .await
            .unwrap();

        assert_eq!(leave.status, LeaveStatus::Approved);
    }

    #[tokio::test]
    async fn test_apply_leave_validation() {
        let (service, person_id) = setup(LeavePolicy::default()).await;

        let mut blank_type = request(person_id, "2024-01-22", "2024-01-23");
        blank_type.leave_type = " ".to_string();
        let err = service.apply_leave(blank_type, now()).await.unwrap_err();
        assert!(matches!(leave_error(&err), LeaveError::EmptyLeaveType));

        let mut blank_reason = request(person_id, "2024-01-22", "2024-01-23");
        blank_reason.reason = String::new();
        let err = service.apply_leave(blank_reason, now()).await.unwrap_err();
        assert!(matches!(leave_error(&err), LeaveError::EmptyReason));

        let err = service
            .apply_leave(request(person_id, "2024-01-25", "2024-01-22"), now())
            .await
            .unwrap_err();
        assert!(matches!(leave_error(&err), LeaveError::EndBeforeStart { .. }));

        let err = service
            .apply_leave(request(999, "2024-01-22", "2024-01-23"), now())
            .await
            .unwrap_err();
        assert!(matches!(leave_error(&err), LeaveError::UnknownPerson(999)));
    }

    #[tokio::test]
    async fn test_apply_leave_limits() {
        let (service, person_id) = setup(LeavePolicy::default()).await;

        // Ten inclusive days is the limit
        assert!(service
            .apply_leave(request(person_id, "2024-01-22", "2024-01-31"), now())
            .await
            .is_ok());
        let err = service
            .apply_leave(request(person_id, "2024-01-22", "2024-02-01"), now())
            .await
            .unwrap_err();
        assert!(matches!(
            leave_error(&err),
            LeaveError::TooManyDays { requested: 11, max: 10 }
        ));

        // Seven days ahead of 2024-01-15 is the earliest allowed start
        assert!(service
            .apply_leave(request(person_id, "2024-01-22", "2024-01-22"), now())
            .await
            .is_ok());
        let err = service
            .apply_leave(request(person_id, "2024-01-21", "2024-01-21"), now())
            .await
            .unwrap_err();
        assert!(matches!(
            leave_error(&err),
            LeaveError::InsufficientNotice { required: 7 }
        ));
    }

    #[tokio::test]
    async fn test_approve_and_reject_only_pending() {
        let (service, person_id) = setup(LeavePolicy::default()).await;
        let first = service
            .apply_leave(request(person_id, "2024-01-22", "2024-01-23"), now())
            .await
            .unwrap();
        let second = service
            .apply_leave(request(person_id, "2024-02-05", "2024-02-06"), now())
            .await
            .unwrap();

        let approved = service.approve_leave(first.id, now()).await.unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(approved.decided_at, Some(now()));

        let rejected = service.reject_leave(second.id, now()).await.unwrap();
        assert_eq!(rejected.status, LeaveStatus::Rejected);

        let err = service.reject_leave(first.id, now()).await.unwrap_err();
        assert!(matches!(
            leave_error(&err),
            LeaveError::AlreadyDecided { status: LeaveStatus::Approved, .. }
        ));

        let err = service.approve_leave(404, now()).await.unwrap_err();
        assert!(matches!(leave_error(&err), LeaveError::NotFound(404)));

        let pending = service.list_leaves(Some(LeaveStatus::Pending)).await.unwrap();
        assert!(pending.is_empty());
        assert_eq!(service.list_leaves(None).await.unwrap().len(), 2);
    }
}
