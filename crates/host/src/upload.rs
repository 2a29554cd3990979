//! Routers and handlers for the demo upload endpoints.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

const INDEX_HTML: &str = include_str!("../static/index.html");
const TEST_HTML: &str = include_str!("../static/test.html");

/// Where the storing variant puts uploaded files.
struct UploadState {
    upload_dir: PathBuf,
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn test_page() -> Html<&'static str> {
    Html(TEST_HTML)
}

type UploadReply = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn bad_request(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn server_error(err: &dyn std::fmt::Display) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": err.to_string() })),
    )
}

/// Store the first multipart field under a random hex name.
async fn store_upload(
    State(state): State<Arc<UploadState>>,
    mut multipart: Multipart,
) -> UploadReply {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(&e.to_string()))?
    {
        let field_name = field.name().map(ToString::to_string);
        let original = field.file_name().map(ToString::to_string);
        let data = field.bytes().await.map_err(|e| bad_request(&e.to_string()))?;

        let stored = Uuid::new_v4().simple().to_string();
        tokio::fs::create_dir_all(&state.upload_dir)
            .await
            .map_err(|e| server_error(&e))?;
        tokio::fs::write(state.upload_dir.join(&stored), &data)
            .await
            .map_err(|e| server_error(&e))?;

        tracing::info!(
            field = field_name.as_deref().unwrap_or("?"),
            original = original.as_deref().unwrap_or("?"),
            size = data.len(),
            %stored,
            "stored upload"
        );
        return Ok(Json(json!({ "message": stored })));
    }

    Err(bad_request("missing file field"))
}

/// Discard the multipart body and acknowledge it.
async fn ack_upload(mut multipart: Multipart) -> UploadReply {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(&e.to_string()))?
    {
        let field_name = field.name().map(ToString::to_string);
        let data = field.bytes().await.map_err(|e| bad_request(&e.to_string()))?;
        tracing::info!(
            field = field_name.as_deref().unwrap_or("?"),
            size = data.len(),
            "received upload"
        );
    }
    Ok(Json(json!({ "message": "received" })))
}

/// Demo server that stores uploads under `upload_dir`.
pub fn storing_router(upload_dir: PathBuf) -> Router {
    let state = Arc::new(UploadState { upload_dir });
    Router::new()
        .route("/", get(index))
        .route("/test", get(test_page))
        .route("/upload", post(store_upload))
        .with_state(state)
        .layer(cors())
}

/// Demo server that only acknowledges uploads.
pub fn ack_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/test", get(test_page))
        .route("/upload", post(ack_upload))
        .layer(cors())
}
