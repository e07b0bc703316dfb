//! Root-level meta endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::http::server::AppState;

/// Response body of `GET /versions`.
#[derive(Serialize)]
pub struct VersionList {
    pub versions: Vec<String>,
}

/// `GET /health`: liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /versions`: list the mounted version prefixes.
pub async fn versions(State(state): State<AppState>) -> Json<VersionList> {
    Json(VersionList {
        versions: state.versions.as_ref().clone(),
    })
}
