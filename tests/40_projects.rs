mod common;

use anyhow::Result;
use axum::http::StatusCode;
use axum::Router;
use serde_json::{json, Value};

async fn create_project(app: &Router, cookie: &str, workspace_id: &str, name: &str) -> Result<Value> {
    let response = common::send_form(
        app,
        "POST",
        "/api/v1/projects",
        Some(cookie),
        &[("name", name), ("workspace_id", workspace_id)],
    )
    .await?;
    anyhow::ensure!(
        response.status == StatusCode::OK,
        "project creation failed: {:?}",
        response.body
    );
    Ok(response.body["data"].clone())
}

#[tokio::test]
async fn project_crud_round_trip() -> Result<()> {
    let app = common::app();
    let cookie = common::register_user(&app, "Ada", "ada@example.com").await?;
    let workspace = common::create_workspace(&app, &cookie, "Engineering").await?;
    let workspace_id = workspace["id"].as_str().unwrap();

    let project = create_project(&app, &cookie, workspace_id, "Backend").await?;
    let project_id = project["id"].as_str().unwrap();
    assert_eq!(project["workspace_id"].as_str(), Some(workspace_id));

    let response = common::get(&app, &format!("/api/v1/projects/{project_id}"), Some(&cookie)).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Backend");

    let response = common::send_form(
        &app,
        "PATCH",
        &format!("/api/v1/projects/{project_id}"),
        Some(&cookie),
        &[("name", "Backend v2")],
    )
    .await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Backend v2");

    let response = common::send_json(
        &app,
        "DELETE",
        &format!("/api/v1/projects/{project_id}"),
        Some(&cookie),
        None,
    )
    .await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"].as_str(), Some(project_id));

    let response = common::get(&app, &format!("/api/v1/projects/{project_id}"), Some(&cookie)).await?;
    common::assert_error_shape(&response, 404);
    assert_eq!(response.body["error"], "Project not found. Please provide a valid project ID.");
    Ok(())
}

#[tokio::test]
async fn project_listing_is_member_only() -> Result<()> {
    let app = common::app();
    let cookie = common::register_user(&app, "Ada", "ada@example.com").await?;
    let outsider = common::register_user(&app, "Eve", "eve@example.com").await?;
    let workspace = common::create_workspace(&app, &cookie, "Engineering").await?;
    let workspace_id = workspace["id"].as_str().unwrap();

    create_project(&app, &cookie, workspace_id, "Backend").await?;
    create_project(&app, &cookie, workspace_id, "Frontend").await?;

    let response = common::get(
        &app,
        &format!("/api/v1/projects?workspace_id={workspace_id}"),
        Some(&cookie),
    )
    .await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total"], json!(2));

    let response = common::get(
        &app,
        &format!("/api/v1/projects?workspace_id={workspace_id}"),
        Some(&outsider),
    )
    .await?;
    common::assert_error_shape(&response, 403);
    Ok(())
}

#[tokio::test]
async fn project_mutation_requires_membership() -> Result<()> {
    let app = common::app();
    let cookie = common::register_user(&app, "Ada", "ada@example.com").await?;
    let outsider = common::register_user(&app, "Eve", "eve@example.com").await?;
    let workspace = common::create_workspace(&app, &cookie, "Engineering").await?;
    let workspace_id = workspace["id"].as_str().unwrap();

    // Creating in a workspace the actor does not belong to
    let response = common::send_form(
        &app,
        "POST",
        "/api/v1/projects",
        Some(&outsider),
        &[("name", "Intruder"), ("workspace_id", workspace_id)],
    )
    .await?;
    common::assert_error_shape(&response, 401);

    let project = create_project(&app, &cookie, workspace_id, "Backend").await?;
    let project_id = project["id"].as_str().unwrap();

    let response = common::send_form(
        &app,
        "PATCH",
        &format!("/api/v1/projects/{project_id}"),
        Some(&outsider),
        &[("name", "Hijacked")],
    )
    .await?;
    common::assert_error_shape(&response, 401);

    let response = common::send_json(
        &app,
        "DELETE",
        &format!("/api/v1/projects/{project_id}"),
        Some(&outsider),
        None,
    )
    .await?;
    common::assert_error_shape(&response, 401);
    Ok(())
}

#[tokio::test]
async fn project_name_is_validated() -> Result<()> {
    let app = common::app();
    let cookie = common::register_user(&app, "Ada", "ada@example.com").await?;
    let workspace = common::create_workspace(&app, &cookie, "Engineering").await?;
    let workspace_id = workspace["id"].as_str().unwrap();

    let response = common::send_form(
        &app,
        "POST",
        "/api/v1/projects",
        Some(&cookie),
        &[("name", ""), ("workspace_id", workspace_id)],
    )
    .await?;
    common::assert_error_shape(&response, 400);

    let long_name = "x".repeat(51);
    let response = common::send_form(
        &app,
        "POST",
        "/api/v1/projects",
        Some(&cookie),
        &[("name", &long_name), ("workspace_id", workspace_id)],
    )
    .await?;
    common::assert_error_shape(&response, 400);
    Ok(())
}

#[tokio::test]
async fn status_probe_is_public() -> Result<()> {
    let app = common::app();

    let response = common::get(&app, "/api/v1/projects/status", None).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "operational");
    assert_eq!(response.body["service"], "projects-api");
    assert!(response.body["timestamp"].is_string());
    Ok(())
}

#[tokio::test]
async fn empty_project_analytics_report_is_all_zeroes() -> Result<()> {
    let app = common::app();
    let cookie = common::register_user(&app, "Ada", "ada@example.com").await?;
    let workspace = common::create_workspace(&app, &cookie, "Engineering").await?;
    let workspace_id = workspace["id"].as_str().unwrap();
    let project = create_project(&app, &cookie, workspace_id, "Backend").await?;
    let project_id = project["id"].as_str().unwrap();

    let response = common::get(
        &app,
        &format!("/api/v1/projects/{project_id}/analytics"),
        Some(&cookie),
    )
    .await?;
    assert_eq!(response.status, StatusCode::OK);
    let report = &response.body["data"];
    for field in [
        "task_count",
        "task_difference",
        "assigned_task_count",
        "assigned_task_difference",
        "incomplete_task_count",
        "incomplete_task_difference",
        "completed_task_count",
        "completed_task_difference",
        "overdue_task_count",
        "overdue_task_difference",
    ] {
        assert_eq!(report[field], json!(0), "field {field}");
    }
    Ok(())
}
