use axum::{
    extract::Query,
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Extension, Router,
};
use chrono::{DateTime, FixedOffset, Utc};
use hyper::Server;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::app::AttendanceService;
use crate::countdown::time_left;
use crate::view::{filter_records, ListQuery};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AttendanceService>,
    pub exam_starts_at: DateTime<FixedOffset>,
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "attendance-portal",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Filtered attendance list for one group; both sources are loaded fresh per request
async fn attendance(
    Extension(state): Extension<AppState>,
    Query(query): Query<ListQuery>,
) -> Response {
    match state.service.load_all().await {
        Ok(records) => Json(filter_records(&records, &query)).into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": e.user_message() })),
        )
            .into_response(),
    }
}

async fn countdown(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let left = time_left(Utc::now(), state.exam_starts_at);
    Json(serde_json::json!({
        "starts_at": state.exam_starts_at.to_rfc3339(),
        "started": left.is_none(),
        "time_left": left,
    }))
}

/// Create the HTTP server. Unknown paths fall back to the index document so
/// client-side routes resolve.
pub fn create_server(state: AppState, public_dir: &Path, index_file: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let static_files =
        ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join(index_file)));

    Router::new()
        .route("/health", get(health))
        .route("/api/attendance", get(attendance))
        .route("/api/countdown", get(countdown))
        .fallback_service(static_files)
        .layer(Extension(state))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the specified port
pub async fn start_server(
    state: AppState,
    public_dir: &Path,
    index_file: &str,
    port: u16,
) -> anyhow::Result<()> {
    let app = create_server(state, public_dir, index_file);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!(%addr, public_dir = %public_dir.display(), "Development server listening");
    println!("Attendance portal running on http://localhost:{port}");

    Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
