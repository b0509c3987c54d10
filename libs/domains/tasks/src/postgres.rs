use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::Task,
    repository::TaskRepository,
};

pub struct PgTaskRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgTaskRepository {
    /// Wrap the process-wide connection pool. Constructed once at
    /// startup and injected; never per request.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, task: Task) -> TaskResult<Task> {
        let active_model: entity::ActiveModel = task.into();

        let model = self.base.insert(active_model).await?;

        tracing::info!(task_id = %model.id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let model = self.base.find_by_id(id).await?;

        Ok(model.map(|m| m.into()))
    }

    async fn get_all(&self) -> TaskResult<Vec<Task>> {
        let models = self.base.find_all().await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, task: Task) -> TaskResult<Task> {
        // Only the mutable columns; created_at is never written back
        let active_model = entity::ActiveModel {
            id: Set(task.id),
            title: Set(task.title.clone()),
            description: Set(task.description.clone()),
            due_date: Set(task.due_date.into()),
            status: Set(task.status),
            updated_at: Set(task.updated_at.map(Into::into)),
            ..Default::default()
        };

        let updated_model = self.base.update(active_model).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => TaskError::NotFound(task.id),
            other => other.into(),
        })?;

        tracing::info!(task_id = %task.id, "Updated task");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: Uuid) -> TaskResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(task_id = %id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
