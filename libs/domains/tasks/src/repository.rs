use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::Task;

/// Repository trait for Task persistence
///
/// The data access interface for tasks; implementations can use
/// different storage backends (PostgreSQL, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new task, keyed by the task's id.
    ///
    /// An id collision surfaces as a storage error (primary-key
    /// violation).
    async fn create(&self, task: Task) -> TaskResult<Task>;

    /// Single-row lookup; a missing id is `Ok(None)`, not an error
    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>>;

    /// Every stored task, in storage order
    async fn get_all(&self) -> TaskResult<Vec<Task>>;

    /// Overwrite the mutable columns of the row matching the task's id.
    ///
    /// Updating a missing id is NotFound, not a silent no-op.
    async fn update(&self, task: Task) -> TaskResult<Task>;

    /// Delete by id, reporting whether a row was removed
    async fn delete(&self, id: Uuid) -> TaskResult<bool>;
}
