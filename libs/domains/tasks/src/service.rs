use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;

/// Use-case layer orchestrating Task entities and the repository
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task with validation
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let task = Task::new(input);
        self.repository.create(task).await
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: Uuid) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// List every stored task
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.get_all().await
    }

    /// Patch a task: fetch, apply the provided fields, persist
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update_task(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task> {
        let mut task = self.get_task(id).await?;

        task.apply_update(input);
        self.repository.update(task).await
    }

    /// Mark a task completed
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn complete_task(&self, id: Uuid) -> TaskResult<Task> {
        let mut task = self.get_task(id).await?;

        task.mark_complete();
        self.repository.update(task).await
    }

    /// Delete a task, reporting whether a row went away.
    ///
    /// No existence pre-check beyond what delete itself reports.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: Uuid) -> TaskResult<bool> {
        self.repository.delete(id).await
    }
}
