use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use teamspace_api::routes;
use teamspace_api::state::AppState;

pub const MULTIPART_BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Fresh router plus the state behind it, so tests can seed documents the
/// HTTP surface does not create (tasks are read-only over HTTP).
pub fn app_with_state() -> (Router, AppState) {
    let state = AppState::in_memory();
    (routes::app(state.clone()), state)
}

pub fn app() -> Router {
    app_with_state().0
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub set_cookies: Vec<String>,
}

impl TestResponse {
    /// The `name=value` pair of the first Set-Cookie header, stripped of
    /// attributes, ready to send back in a Cookie header.
    pub fn cookie_pair(&self) -> Option<String> {
        self.set_cookies
            .first()
            .and_then(|c| c.split(';').next())
            .map(str::to_string)
    }
}

async fn send(app: &Router, request: Request<Body>) -> Result<TestResponse> {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .context("router rejected request")?;

    let status = response.status();
    let set_cookies = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect();

    let bytes = response.into_body().collect().await?.to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).context("response body was not JSON")?
    };

    Ok(TestResponse { status, body, set_cookies })
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Result<TestResponse> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::empty())?).await
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Result<TestResponse> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))?,
        None => builder.body(Body::empty())?,
    };
    send(app, request).await
}

/// Encode text fields as a multipart/form-data body.
pub async fn send_form(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    fields: &[(&str, &str)],
) -> Result<TestResponse> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{MULTIPART_BOUNDARY}--\r\n"));

    let mut builder = Request::builder().method(method).uri(uri).header(
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
    );
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::from(body))?).await
}

/// Register a user and return the session cookie pair for later requests.
pub async fn register_user(app: &Router, name: &str, email: &str) -> Result<String> {
    let response = send_json(
        app,
        "POST",
        "/api/v1/auth/register",
        None,
        Some(json!({ "name": name, "email": email, "password": "correct horse battery" })),
    )
    .await?;
    anyhow::ensure!(
        response.status == StatusCode::CREATED,
        "registration failed: {:?}",
        response.body
    );
    response.cookie_pair().context("no session cookie issued")
}

/// Create a workspace and return its document from the response envelope.
pub async fn create_workspace(app: &Router, cookie: &str, name: &str) -> Result<Value> {
    let response = send_form(
        app,
        "POST",
        "/api/v1/workspaces",
        Some(cookie),
        &[("name", name)],
    )
    .await?;
    anyhow::ensure!(
        response.status == StatusCode::OK,
        "workspace creation failed: {:?}",
        response.body
    );
    Ok(response.body["data"].clone())
}

/// Assert the uniform `{error, status}` error body shape.
pub fn assert_error_shape(response: &TestResponse, status: u16) {
    assert_eq!(response.status.as_u16(), status, "body: {:?}", response.body);
    assert!(response.body["error"].is_string(), "body: {:?}", response.body);
    assert_eq!(response.body["status"], json!(status), "body: {:?}", response.body);
}
