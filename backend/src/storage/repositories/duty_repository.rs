use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::Row;
use tracing::info;

use crate::domain::models::DutyAssignment;
use crate::storage::connection::DbConnection;
use crate::storage::traits::DutyStorage;

/// Repository for confirmed duty officer assignments
#[derive(Clone)]
pub struct DutyRepository {
    db: DbConnection,
}

impl DutyRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DutyStorage for DutyRepository {
    async fn get_assignment(&self, date: NaiveDate) -> Result<Option<DutyAssignment>> {
        let row = sqlx::query(
            r#"
            SELECT date, person_id, assigned_at
            FROM duty_assignments
            WHERE date = ?
            "#,
        )
        .bind(date)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|r| DutyAssignment {
            date: r.get("date"),
            person_id: r.get("person_id"),
            assigned_at: r.get("assigned_at"),
        }))
    }

    async fn record_assignment(&self, assignment: &DutyAssignment) -> Result<bool> {
        let mut tx = self.db.pool().begin().await?;

        // The date primary key lets only the first confirmation for a day through
        let inserted = sqlx::query(
            r#"
            INSERT OR IGNORE INTO duty_assignments (date, person_id, assigned_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(assignment.date)
        .bind(assignment.person_id)
        .bind(assignment.assigned_at)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if inserted == 0 {
            tx.rollback().await?;
            info!("Duty assignment for {} already exists", assignment.date);
            return Ok(false);
        }

        // Confirming an older day must not move last_duty_date backwards
        sqlx::query(
            r#"
            UPDATE people
            SET duty_count = duty_count + 1,
                last_duty_date = MAX(COALESCE(last_duty_date, ?1), ?1)
            WHERE id = ?2
            "#,
        )
        .bind(assignment.date)
        .bind(assignment.person_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
