use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::tasks::TaskCommand;
use crate::domain::models::{NewTask, Task, TaskError};
use crate::storage::TaskStorage;

/// Service for the shared task board
#[derive(Clone)]
pub struct TaskService {
    tasks: Arc<dyn TaskStorage>,
}

impl TaskService {
    pub fn new(tasks: Arc<dyn TaskStorage>) -> Self {
        Self { tasks }
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.tasks.list_tasks().await
    }

    pub async fn create_task(&self, command: TaskCommand, created_at: DateTime<Utc>) -> Result<Task> {
        let (title, category) = validate(&command)?;

        let task = self
            .tasks
            .store_task(&NewTask {
                title,
                date: command.date,
                category,
                created_at,
            })
            .await?;

        info!("Created task {}: {}", task.id, task.title);
        Ok(task)
    }

    /// Replace a task's title, date and category
    pub async fn update_task(&self, task_id: i64, command: TaskCommand) -> Result<Task> {
        let (title, category) = validate(&command)?;

        let mut task = self
            .tasks
            .get_task(task_id)
            .await?
            .ok_or(TaskError::NotFound(task_id))?;

        task.title = title;
        task.date = command.date;
        task.category = category;
        self.tasks.update_task(&task).await?;

        info!("Updated task {}", task_id);
        Ok(task)
    }

    pub async fn delete_task(&self, task_id: i64) -> Result<()> {
        if !self.tasks.delete_task(task_id).await? {
            warn!("Task not found for delete: {}", task_id);
            return Err(TaskError::NotFound(task_id).into());
        }
        info!("Deleted task {}", task_id);
        Ok(())
    }
}

fn validate(command: &TaskCommand) -> Result<(String, String), TaskError> {
    let title = command.title.trim();
    if title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    let category = command.category.trim();
    if category.is_empty() {
        return Err(TaskError::EmptyCategory);
    }
    Ok((title.to_string(), category.to_string()))
}
