use tracing::{info, warn};
use uuid::Uuid;

use blogtools_core::models::style::StyleSummary;

use crate::completion::Completion;
use crate::error::LlmError;
use crate::ideas::parse_ideas;
use crate::prompts::{self, ToolRequest};

/// Ask the model for tool ideas and split the reply into a list.
pub async fn suggest_ideas(
    model: &dyn Completion,
    content: &str,
    style: Option<&StyleSummary>,
) -> Result<Vec<String>, LlmError> {
    let call_id = Uuid::new_v4();
    info!(call_id = %call_id, content_len = content.len(), "suggesting tool ideas");

    let reply = model.complete(&prompts::ideas_prompt(content, style)).await?;
    let ideas = parse_ideas(&reply);

    if ideas.is_empty() {
        warn!(call_id = %call_id, "model returned no ideas");
    }
    info!(call_id = %call_id, count = ideas.len(), "tool ideas ready");

    Ok(ideas)
}

/// Generate an embeddable tool. The reply is returned exactly as the model
/// produced it.
pub async fn generate_tool(
    model: &dyn Completion,
    request: &ToolRequest<'_>,
) -> Result<String, LlmError> {
    let call_id = Uuid::new_v4();
    info!(call_id = %call_id, idea = request.idea, "generating tool");

    let tool = model.complete(&prompts::generate_prompt(request)).await?;
    if tool.trim().is_empty() {
        warn!(call_id = %call_id, "model returned empty tool");
    }

    info!(call_id = %call_id, tool_len = tool.len(), "tool generated");
    Ok(tool)
}

/// Revise a tool from user feedback. Stateless: the caller sends the latest
/// tool code every round.
pub async fn update_tool(
    model: &dyn Completion,
    content: &str,
    current_tool: &str,
    feedback: &str,
) -> Result<String, LlmError> {
    let call_id = Uuid::new_v4();
    info!(call_id = %call_id, feedback_len = feedback.len(), "updating tool");

    let tool = model
        .complete(&prompts::update_prompt(content, current_tool, feedback))
        .await?;
    if tool.trim().is_empty() {
        warn!(call_id = %call_id, "model returned empty tool");
    }

    info!(call_id = %call_id, tool_len = tool.len(), "tool updated");
    Ok(tool)
}
