use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub date: NaiveDate,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Category cannot be empty")]
    EmptyCategory,
    #[error("Task not found: {0}")]
    NotFound(i64),
}
