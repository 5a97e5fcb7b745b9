use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use blogtools_core::models::style::StyleSummary;
use blogtools_extract::{extract_page, parse_page_url};

use crate::error::ApiError;
use crate::json::ApiJson;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub title: String,
    pub content: String,
    pub html: String,
    pub style_summary: StyleSummary,
}

pub async fn extract(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ExtractRequest>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let raw = req
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::BadRequest("No URL provided".to_string()))?;
    let url = parse_page_url(raw).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let page = extract_page(&state.fetcher, &url)
        .await
        .map_err(|e| ApiError::upstream("Failed to extract content", e))?;

    Ok(Json(ExtractResponse {
        title: page.article.title,
        content: page.article.content,
        html: page.article.html,
        style_summary: page.style,
    }))
}
