use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::{AttendanceEntry, EntryStatus};
use crate::storage::connection::DbConnection;
use crate::storage::traits::AttendanceStorage;

/// Repository for daily attendance entries
#[derive(Clone)]
pub struct AttendanceRepository {
    db: DbConnection,
}

impl AttendanceRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> AttendanceEntry {
        let raw_status: String = row.get("status");
        AttendanceEntry {
            person_id: row.get("person_id"),
            status: EntryStatus::from_raw(&raw_status),
            marked_by: row.get("marked_by"),
            time_marked: row.get("time_marked"),
            date: row.get("date"),
        }
    }
}

#[async_trait]
impl AttendanceStorage for AttendanceRepository {
    async fn upsert_entry(&self, entry: &AttendanceEntry) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO attendance (person_id, date, status, marked_by, time_marked)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT (person_id, date) DO UPDATE SET
                status = excluded.status,
                marked_by = excluded.marked_by,
                time_marked = excluded.time_marked
            "#,
        )
        .bind(entry.person_id)
        .bind(entry.date)
        .bind(entry.status.as_str())
        .bind(&entry.marked_by)
        .bind(entry.time_marked)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_entry(&self, person_id: i64, date: NaiveDate) -> Result<Option<AttendanceEntry>> {
        let row = sqlx::query(
            r#"
            SELECT person_id, date, status, marked_by, time_marked
            FROM attendance
            WHERE person_id = ? AND date = ?
            "#,
        )
        .bind(person_id)
        .bind(date)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    async fn list_entries_for_date(&self, date: NaiveDate) -> Result<Vec<AttendanceEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT person_id, date, status, marked_by, time_marked
            FROM attendance
            WHERE date = ?
            ORDER BY time_marked ASC, person_id ASC
            "#,
        )
        .bind(date)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::from_row).collect())
    }
}
