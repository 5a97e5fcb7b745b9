//! Model-driven handlers: idea suggestions, tool generation and revision.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use blogtools_core::models::style::StyleSummary;
use blogtools_llm::generation;
use blogtools_llm::prompts::ToolRequest;

use crate::error::ApiError;
use crate::json::ApiJson;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeasRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub style_summary: Option<StyleSummary>,
}

#[derive(Serialize)]
pub struct IdeasResponse {
    pub ideas: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub idea: String,
    #[serde(default)]
    pub style_summary: Option<StyleSummary>,
    #[serde(default)]
    pub user_requirements: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub current_tool: String,
    #[serde(default)]
    pub feedback: String,
}

#[derive(Serialize)]
pub struct ToolResponse {
    pub tool: String,
}

pub async fn suggest_ideas(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<IdeasRequest>,
) -> Result<Json<IdeasResponse>, ApiError> {
    let ideas = generation::suggest_ideas(
        state.model.as_ref(),
        &req.content,
        req.style_summary.as_ref(),
    )
    .await
    .map_err(|e| ApiError::upstream("Failed to generate tool ideas", e))?;

    Ok(Json(IdeasResponse { ideas }))
}

pub async fn generate_tool(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<GenerateRequest>,
) -> Result<Json<ToolResponse>, ApiError> {
    let request = ToolRequest {
        content: &req.content,
        idea: &req.idea,
        style: req.style_summary.as_ref(),
        requirements: req.user_requirements.as_deref(),
    };

    let tool = generation::generate_tool(state.model.as_ref(), &request)
        .await
        .map_err(|e| ApiError::upstream("Failed to generate tool", e))?;

    Ok(Json(ToolResponse { tool }))
}

pub async fn update_tool(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UpdateRequest>,
) -> Result<Json<ToolResponse>, ApiError> {
    let tool = generation::update_tool(
        state.model.as_ref(),
        &req.content,
        &req.current_tool,
        &req.feedback,
    )
    .await
    .map_err(|e| ApiError::upstream("Failed to update tool", e))?;

    Ok(Json(ToolResponse { tool }))
}
