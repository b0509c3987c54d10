use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Task lifecycle status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_status")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskStatus {
    /// Task awaiting completion
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Task finished
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// Task entity - a to-do item with a lifecycle status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier, immutable after construction
    pub id: Uuid,
    /// Task title
    pub title: String,
    /// Task description
    pub description: String,
    /// When the task is due
    pub due_date: DateTime<Utc>,
    /// Lifecycle status
    pub status: TaskStatus,
    /// Creation timestamp, immutable after construction
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp; `None` until the first update/complete
    pub updated_at: Option<DateTime<Utc>>,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: DateTime<Utc>,
}

/// DTO for partially updating an existing task.
///
/// An omitted field, or an empty string, leaves the stored value in
/// place.
#[derive(Debug, Clone, Deserialize, Default, ToSchema)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

/// DTO for task responses, the full task shape
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            status: task.status,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// DTO confirming a deletion
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

impl Task {
    /// Build a fresh task: new id, pending, created now, never mutated.
    ///
    /// Id and timestamp are generated per call, never shared defaults.
    pub fn new(input: CreateTask) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            status: TaskStatus::Pending,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Apply a partial update from an UpdateTask DTO.
    ///
    /// Empty strings count as "not provided". The updated_at stamp is
    /// refreshed unconditionally, even when no field changed.
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            if !title.is_empty() {
                self.title = title;
            }
        }
        if let Some(description) = update.description {
            if !description.is_empty() {
                self.description = description;
            }
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        self.updated_at = Some(Utc::now());
    }

    /// Transition pending → completed.
    ///
    /// Idempotent on status; updated_at moves on every call.
    pub fn mark_complete(&mut self) {
        self.status = TaskStatus::Completed;
        self.updated_at = Some(Utc::now());
    }
}
