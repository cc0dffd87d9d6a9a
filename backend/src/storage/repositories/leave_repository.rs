use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::LeaveStatus;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::{LeaveRequest, NewLeaveRequest};
use crate::storage::connection::DbConnection;
use crate::storage::traits::LeaveStorage;

/// Repository for leave requests
#[derive(Clone)]
pub struct LeaveRepository {
    db: DbConnection,
}

impl LeaveRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<LeaveRequest> {
        let raw_status: String = row.get("status");
        let status = LeaveStatus::parse(&raw_status)
            .ok_or_else(|| anyhow!("Unknown leave status in database: {}", raw_status))?;

        Ok(LeaveRequest {
            id: row.get("id"),
            person_id: row.get("person_id"),
            leave_type: row.get("leave_type"),
            start_date: row.get("start_date"),
            end_date: row.get("end_date"),
            reason: row.get("reason"),
            status,
            applied_at: row.get("applied_at"),
            decided_at: row.get("decided_at"),
        })
    }
}

#[async_trait]
impl LeaveStorage for LeaveRepository {
    async fn store_leave(&self, leave: &NewLeaveRequest) -> Result<LeaveRequest> {
        let result = sqlx::query(
            r#"
            INSERT INTO leave_requests
                (person_id, leave_type, start_date, end_date, reason, status, applied_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(leave.person_id)
        .bind(&leave.leave_type)
        .bind(leave.start_date)
        .bind(leave.end_date)
        .bind(&leave.reason)
        .bind(leave.status.as_str())
        .bind(leave.applied_at)
        .execute(self.db.pool())
        .await?;

        Ok(LeaveRequest {
            id: result.last_insert_rowid(),
            person_id: leave.person_id,
            leave_type: leave.leave_type.clone(),
            start_date: leave.start_date,
            end_date: leave.end_date,
            reason: leave.reason.clone(),
            status: leave.status,
            applied_at: leave.applied_at,
            decided_at: None,
        })
    }

    async fn get_leave(&self, leave_id: i64) -> Result<Option<LeaveRequest>> {
        let row = sqlx::query(
            r#"
            SELECT id, person_id, leave_type, start_date, end_date, reason, status, applied_at, decided_at
            FROM leave_requests
            WHERE id = ?
            "#,
        )
        .bind(leave_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list_leaves(&self, status: Option<LeaveStatus>) -> Result<Vec<LeaveRequest>> {
        let query = if let Some(status) = status {
            sqlx::query(
                r#"
                SELECT id, person_id, leave_type, start_date, end_date, reason, status, applied_at, decided_at
                FROM leave_requests
                WHERE status = ?
                ORDER BY applied_at DESC, id DESC
                "#,
            )
            .bind(status.as_str())
        } else {
            sqlx::query(
                r#"
                SELECT id, person_id, leave_type, start_date, end_date, reason, status, applied_at, decided_at
                FROM leave_requests
                ORDER BY applied_at DESC, id DESC
                "#,
            )
        };

        let rows = query.fetch_all(self.db.pool()).await?;
        rows.iter().map(Self::from_row).collect()
    }

    async fn decide_leave(&self, leave: &LeaveRequest) -> Result<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE leave_requests
            SET status = ?, decided_at = ?
            WHERE id = ? AND status = ?
            "#,
        )
        .bind(leave.status.as_str())
        .bind(leave.decided_at)
        .bind(leave.id)
        .bind(LeaveStatus::Pending.as_str())
        .execute(self.db.pool())
        .await?
        .rows_affected();

        Ok(updated == 1)
    }
}
