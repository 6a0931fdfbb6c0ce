use axum::{
    http::StatusCode,
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{auth, members, projects, tasks, workspaces};
use crate::middleware::require_session;
use crate::models::collections;
use crate::state::AppState;
use crate::store::Filter;

/// Assemble the full application router. Tests call this directly with an
/// in-memory state and drive it in-process.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api/v1", api_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(auth_routes(state.clone()))
        .merge(workspace_routes(state.clone()))
        .merge(member_routes(state.clone()))
        .merge(project_routes(state.clone()))
        .merge(task_routes(state))
}

fn auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/auth/current", get(auth::current_user))
        .route_layer(axum_middleware::from_fn_with_state(state, require_session));

    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .merge(protected)
}

fn workspace_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/workspaces",
            get(workspaces::list_workspaces).post(workspaces::create_workspace),
        )
        .route(
            "/workspaces/:workspace_id",
            get(workspaces::get_workspace)
                .patch(workspaces::update_workspace)
                .delete(workspaces::delete_workspace),
        )
        .route(
            "/workspaces/:workspace_id/reset-invite-code",
            post(workspaces::reset_invite_code),
        )
        .route("/workspaces/:workspace_id/join", post(workspaces::join_workspace))
        .route(
            "/workspaces/:workspace_id/analytics",
            get(workspaces::workspace_analytics),
        )
        .route_layer(axum_middleware::from_fn_with_state(state, require_session))
}

fn member_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list_members))
        .route(
            "/members/:member_id",
            axum::routing::patch(members::update_member).delete(members::delete_member),
        )
        .route_layer(axum_middleware::from_fn_with_state(state, require_session))
}

fn project_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/projects/:project_id",
            get(projects::get_project)
                .patch(projects::update_project)
                .delete(projects::delete_project),
        )
        .route(
            "/projects/:project_id/analytics",
            get(projects::project_analytics),
        )
        .route_layer(axum_middleware::from_fn_with_state(state, require_session));

    // Health probe stays outside the session layer
    Router::new()
        .route("/projects/status", get(projects::project_status))
        .merge(protected)
}

fn task_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/tasks", get(tasks::list_tasks))
        .route("/tasks/:task_id", get(tasks::get_task))
        .route_layer(axum_middleware::from_fn_with_state(state, require_session))
}

async fn root() -> Json<serde_json::Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "data": {
            "name": "Teamspace API",
            "version": version,
            "description": "Project-management backend: workspaces, members, projects, tasks",
            "endpoints": {
                "health": "/health (public)",
                "auth": "/api/v1/auth/* (register/login public, current protected)",
                "workspaces": "/api/v1/workspaces[/:id] (protected)",
                "members": "/api/v1/members[/:id] (protected)",
                "projects": "/api/v1/projects[/:id] (protected, /status public)",
                "tasks": "/api/v1/tasks[/:id] (protected, read-only)",
            }
        }
    }))
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state
        .documents
        .list(collections::WORKSPACES, &[Filter::Limit(1)])
        .await
    {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "teamspace-api",
                "timestamp": now,
            })),
        ),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "degraded",
                    "service": "teamspace-api",
                    "error": e.to_string(),
                    "timestamp": now,
                })),
            )
        }
    }
}
