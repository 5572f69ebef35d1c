#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use carcatalog_api::auth::jwt::JwtConfig;
use carcatalog_api::config::ServerConfig;
use carcatalog_api::router::build_app_router;
use carcatalog_api::state::AppState;
use carcatalog_api::storage::ImageStore;

/// Boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "carcatalog-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
///
/// Every call gets its own upload directory under the system temp dir so
/// parallel tests never see each other's images.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: test_upload_dir(),
        public_base_url: "http://localhost:8082".to_string(),
        max_upload_bytes: 5 * 1024 * 1024,
        log_json: false,
        jwt: JwtConfig {
            secret: "test-secret-with-enough-entropy".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

fn test_upload_dir() -> PathBuf {
    std::env::temp_dir().join(format!("carcatalog-test-{}", Uuid::new_v4()))
}

/// Application state over `pool` with a fresh [`test_config`].
pub fn test_state(pool: PgPool) -> AppState {
    let config = test_config();
    let images = Arc::new(ImageStore::new(
        config.upload_dir.clone(),
        config.public_base_url.clone(),
    ));

    AppState {
        pool,
        config: Arc::new(config),
        images,
    }
}

/// Build the full application router over `pool`, using the same builder
/// as the production binary.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = test_state(pool);
    let config = state.config.clone();
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    json: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match json {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(json)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    json: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(json)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    json: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(json)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// A single part of a multipart request.
pub enum Part<'a> {
    Text { name: &'a str, value: String },
    File { name: &'a str, file_name: &'a str, data: &'a [u8] },
}

/// Encode `parts` as a `multipart/form-data` body using [`BOUNDARY`].
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"\r\n\
                         Content-Type: application/json\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    parts: &[Part<'_>],
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Register an admin through the API and return a bearer token for it.
pub async fn register_and_login(app: &Router, username: &str) -> String {
    let password = "correct-horse-battery";
    let register = serde_json::json!({
        "username": username,
        "password": password,
        "email": format!("{username}@catalog.test"),
    });
    let response = post_json(app.clone(), "/api/v1/auth/register", register).await;
    assert_eq!(response.status(), 201, "registration should succeed");

    let login = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app.clone(), "/api/v1/auth/authenticate", login).await;
    assert_eq!(response.status(), 200, "authentication should succeed");

    body_json(response).await["token"]
        .as_str()
        .expect("token should be a string")
        .to_string()
}
