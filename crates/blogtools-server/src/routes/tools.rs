use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use blogtools_core::models::tool::PublishedTool;
use blogtools_core::paths;
use blogtools_storage::error::StorageError;
use blogtools_storage::tools::{publish_tool, recent_tools};

use crate::error::ApiError;
use crate::json::ApiJson;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PublishRequest {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
}

#[derive(Serialize)]
pub struct PublishResponse {
    pub url: String,
}

#[derive(Serialize)]
pub struct RecentResponse {
    pub tools: Vec<PublishedTool>,
}

pub async fn publish(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PublishRequest>,
) -> Result<Json<PublishResponse>, ApiError> {
    let (Some(filename), Some(html)) = (
        req.filename.filter(|f| !f.trim().is_empty()),
        req.html.filter(|h| !h.trim().is_empty()),
    ) else {
        return Err(ApiError::BadRequest(
            "Filename and HTML content are required".to_string(),
        ));
    };
    let filename = paths::tool_filename(&filename)?;

    let tool = publish_tool(state.store.as_ref(), &state.public_base_url, &filename, &html)
        .await
        .map_err(|e| ApiError::upstream("Failed to publish tool", e))?;

    Ok(Json(PublishResponse { url: tool.url }))
}

pub async fn list_recent(State(state): State<AppState>) -> Result<Json<RecentResponse>, ApiError> {
    let tools = recent_tools(state.store.as_ref(), &state.public_base_url)
        .await
        .map_err(|e| ApiError::upstream("Failed to list recent tools", e))?;

    Ok(Json(RecentResponse { tools }))
}

/// Serve a published tool's HTML straight from the store.
pub async fn get_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !paths::is_tool_file(&name) || !paths::is_root_name(&name) {
        return Err(ApiError::NotFound(format!("no tool named {name}")));
    }

    let body = match state.store.read(&name).await {
        Ok(body) => body,
        Err(StorageError::NotFound { .. }) => {
            return Err(ApiError::NotFound(format!("no tool named {name}")));
        }
        Err(e) => return Err(ApiError::upstream("Failed to read tool", e)),
    };

    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], body))
}
