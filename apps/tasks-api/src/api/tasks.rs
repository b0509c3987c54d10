use axum::Router;
use domain_tasks::{PgTaskRepository, TaskService, handlers};

use crate::state::AppState;

/// Build the tasks router with its repository and service injected.
///
/// Constructed once at startup over the shared pool; handlers never
/// open their own connections.
pub fn router(state: &AppState) -> Router {
    let repository = PgTaskRepository::new(state.db.clone());
    let service = TaskService::new(repository);
    handlers::router(service)
}
