use shared::{Task as SharedTask, TaskListResponse, TaskRequest};

use crate::domain::commands::tasks::TaskCommand;
use crate::domain::models::Task as DomainTask;

pub struct TaskMapper;

impl TaskMapper {
    pub fn to_command(request: TaskRequest) -> TaskCommand {
        TaskCommand {
            title: request.title,
            date: request.date,
            category: request.category,
        }
    }

    pub fn to_dto(domain: DomainTask) -> SharedTask {
        SharedTask {
            id: domain.id,
            title: domain.title,
            date: domain.date,
            category: domain.category,
            created_at: domain.created_at,
        }
    }

    pub fn to_task_list_dto(tasks: Vec<DomainTask>) -> TaskListResponse {
        TaskListResponse {
            tasks: tasks.into_iter().map(Self::to_dto).collect(),
        }
    }
}
