use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, DeleteResponse, TaskResponse, UpdateTask};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// OpenAPI documentation for the tasks endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        list_tasks,
        get_task,
        create_task,
        update_task,
        complete_task,
        delete_task,
    ),
    components(
        schemas(CreateTask, UpdateTask, TaskResponse, DeleteResponse)
    ),
    tags(
        (name = "tasks", description = "Task management endpoints")
    )
)]
pub struct ApiDoc;

/// Build the tasks router over an injected service
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route(
            "/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .route("/{id}/complete", post(complete_task))
        .with_state(shared_service)
}

fn parse_task_id(id: &str) -> TaskResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| TaskError::Validation("Invalid task ID".to_string()))
}

/// List all tasks
#[utoipa::path(
    get,
    path = "",
    tag = "tasks",
    responses(
        (status = 200, description = "List of tasks", body = Vec<TaskResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
) -> TaskResult<Json<Vec<TaskResponse>>> {
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = TaskResponse),
        (status = 400, description = "Invalid task ID"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
) -> TaskResult<Json<TaskResponse>> {
    let task_id = parse_task_id(&id)?;

    let task = service.get_task(task_id).await?;
    Ok(Json(task.into()))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = "tasks",
    request_body = CreateTask,
    responses(
        (status = 200, description = "Task created successfully", body = TaskResponse),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Json(input): Json<CreateTask>,
) -> TaskResult<Json<TaskResponse>> {
    let task = service.create_task(input).await?;
    Ok(Json(task.into()))
}

/// Partially update a task
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated successfully", body = TaskResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTask>,
) -> TaskResult<Json<TaskResponse>> {
    let task_id = parse_task_id(&id)?;

    let task = service.update_task(task_id, input).await?;
    Ok(Json(task.into()))
}

/// Mark a task as completed
#[utoipa::path(
    post,
    path = "/{id}/complete",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task completed", body = TaskResponse),
        (status = 400, description = "Invalid task ID"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn complete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
) -> TaskResult<Json<TaskResponse>> {
    let task_id = parse_task_id(&id)?;

    let task = service.complete_task(task_id).await?;
    Ok(Json(task.into()))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted", body = DeleteResponse),
        (status = 400, description = "Invalid task ID"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
) -> TaskResult<Json<DeleteResponse>> {
    let task_id = parse_task_id(&id)?;

    if !service.delete_task(task_id).await? {
        return Err(TaskError::NotFound(task_id));
    }

    Ok(Json(DeleteResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, TaskStatus};
    use crate::repository::MockTaskRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::{Duration, Utc};
    use http_body_util::BodyExt;
    use mockall::predicate::eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn sample_task() -> Task {
        Task::new(CreateTask {
            title: "Test Task".to_string(),
            description: "This is a test task".to_string(),
            due_date: Utc::now() + Duration::days(7),
        })
    }

    fn test_router(mock_repo: MockTaskRepository) -> Router {
        router(TaskService::new(mock_repo))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_task_returns_full_task() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_create().returning(|task| Ok(task));

        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "title": "Test Task",
                    "description": "This is a test task",
                    "due_date": Utc::now() + Duration::days(7),
                })
                .to_string(),
            ))
            .unwrap();

        let response = test_router(mock_repo).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["title"], "Test Task");
        assert_eq!(body["status"], "pending");
        assert!(body["id"].is_string());
        assert!(body["created_at"].is_string());
        assert!(body["updated_at"].is_null());
    }

    #[tokio::test]
    async fn test_create_task_with_empty_title_is_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "title": "",
                    "description": "",
                    "due_date": Utc::now(),
                })
                .to_string(),
            ))
            .unwrap();

        let response = test_router(MockTaskRepository::new())
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_task_found() {
        let task = sample_task();
        let id = task.id;

        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(task.clone())));

        let request = Request::builder()
            .uri(format!("/{}", id))
            .body(Body::empty())
            .unwrap();

        let response = test_router(mock_repo).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["id"], id.to_string());
    }

    #[tokio::test]
    async fn test_get_missing_task_is_404() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let request = Request::builder()
            .uri(format!("/{}", Uuid::now_v7()))
            .body(Body::empty())
            .unwrap();

        let response = test_router(mock_repo).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "NotFound");
    }

    #[tokio::test]
    async fn test_get_task_with_invalid_id_is_400() {
        let request = Request::builder()
            .uri("/not-a-uuid")
            .body(Body::empty())
            .unwrap();

        let response = test_router(MockTaskRepository::new())
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_tasks_returns_all() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![sample_task(), sample_task()]));

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = test_router(mock_repo).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_missing_task_is_404() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let request = Request::builder()
            .method("PATCH")
            .uri(format!("/{}", Uuid::now_v7()))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"title": "New"}).to_string()))
            .unwrap();

        let response = test_router(mock_repo).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_complete_task_marks_completed() {
        let task = sample_task();
        let id = task.id;

        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(task.clone())));
        mock_repo.expect_update().returning(|task| Ok(task));

        let request = Request::builder()
            .method("POST")
            .uri(format!("/{}/complete", id))
            .body(Body::empty())
            .unwrap();

        let response = test_router(mock_repo).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "completed");
        assert!(body["updated_at"].is_string());
    }

    #[tokio::test]
    async fn test_delete_task_returns_message() {
        let id = Uuid::now_v7();

        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_delete().with(eq(id)).returning(|_| Ok(true));

        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/{}", id))
            .body(Body::empty())
            .unwrap();

        let response = test_router(mock_repo).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Task deleted successfully");
    }

    #[tokio::test]
    async fn test_delete_missing_task_is_404() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/{}", Uuid::now_v7()))
            .body(Body::empty())
            .unwrap();

        let response = test_router(mock_repo).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
