use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::{NewTask, Task};
use crate::storage::connection::DbConnection;
use crate::storage::traits::TaskStorage;

/// Repository for the task board
#[derive(Clone)]
pub struct TaskRepository {
    db: DbConnection,
}

impl TaskRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Task {
        Task {
            id: row.get("id"),
            title: row.get("title"),
            date: row.get("date"),
            category: row.get("category"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl TaskStorage for TaskRepository {
    async fn store_task(&self, task: &NewTask) -> Result<Task> {
        let result = sqlx::query(
            r#"
            INSERT INTO tasks (title, date, category, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&task.title)
        .bind(task.date)
        .bind(&task.category)
        .bind(task.created_at)
        .execute(self.db.pool())
        .await?;

        Ok(Task {
            id: result.last_insert_rowid(),
            title: task.title.clone(),
            date: task.date,
            category: task.category.clone(),
            created_at: task.created_at,
        })
    }

    async fn get_task(&self, task_id: i64) -> Result<Option<Task>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, date, category, created_at
            FROM tasks
            WHERE id = ?
            "#,
        )
        .bind(task_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, date, category, created_at
            FROM tasks
            ORDER BY date ASC, id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::from_row).collect())
    }

    async fn update_task(&self, task: &Task) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, date = ?, category = ?
            WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(task.date)
        .bind(&task.category)
        .bind(task.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn delete_task(&self, task_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(task_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
