//! Prompt builders for the tool workflow.
//!
//! Each builder is a pure function of its inputs so prompts can be asserted
//! on directly in tests.

use blogtools_core::models::style::StyleSummary;

use crate::completion::Prompt;

const IDEAS_SYSTEM_PROMPT: &str = "\
You are an expert at creating interactive web tools for blog content. \
Given a blog post, suggest 5 highly relevant and engaging interactive tool ideas \
(such as calculators, quizzes, checklists, or comparison charts) that would add value for readers. \
Respond with a numbered list of exactly 5 short, clear tool ideas, one per line. \
Do not include explanations or markdown.";

const GENERATE_SYSTEM_PROMPT: &str = "\
You are an expert at generating interactive tools for blog content. \
Based on the given idea, generate a complete, self-contained HTML, CSS and JavaScript snippet \
for the tool, with a simple UI (inputs, buttons, etc.) and all necessary logic. \
The tool should be directly related to the blog's subject and provide real value to readers.

The snippet will be embedded inside an existing page:
- Do not include <html>, <head> or <body> tags.
- Put exactly one <style> block first, then the markup, then exactly one <script> block last.
- Do not nest <style> or <script> tags inside other elements.
- Match the site style described below (fonts, colors, spacing, buttons and inputs) so the tool looks native.
- Scope CSS selectors to the tool's root element so the host page is not affected.
- Do not include markdown, triple backticks or explanations. Return only the raw code.";

const UPDATE_SYSTEM_PROMPT: &str = "\
You are an expert at updating interactive tools for blog content. \
You will receive the original blog post, the current tool code and the changes the user wants. \
Update the tool accordingly, keeping it embeddable (no <html>, <head> or <body> tags) \
and keeping its visual style unless the user asks otherwise. \
Return only the updated, complete HTML, CSS and JavaScript code, no explanations or markdown.";

/// Inputs for a tool generation prompt.
#[derive(Debug, Clone, Copy)]
pub struct ToolRequest<'a> {
    pub content: &'a str,
    pub idea: &'a str,
    pub style: Option<&'a StyleSummary>,
    pub requirements: Option<&'a str>,
}

/// `<site_style>` block with one line per resolved property, or `""` when
/// the summary is empty.
pub fn build_style_block(style: &StyleSummary) -> String {
    let entries = style.non_empty();
    if entries.is_empty() {
        return String::new();
    }

    let mut block = String::from("<site_style>\n");
    for (category, property, value) in entries {
        block.push_str(&format!("- {category} / {property}: {value}\n"));
    }
    block.push_str("</site_style>");
    block
}

pub fn ideas_prompt(content: &str, style: Option<&StyleSummary>) -> Prompt {
    let mut user = format!("Suggest 5 interactive tool ideas for this blog post: {content}");

    let style_block = style.map(build_style_block).unwrap_or_default();
    if !style_block.is_empty() {
        user.push_str("\n\nThe tools will be embedded in a site with this style:\n");
        user.push_str(&style_block);
    }

    Prompt::system(IDEAS_SYSTEM_PROMPT).with_user(user)
}

pub fn generate_prompt(request: &ToolRequest<'_>) -> Prompt {
    let mut user = format!(
        "Blog content: {}\n\nTool idea: {}",
        request.content, request.idea
    );

    let style_block = request.style.map(build_style_block).unwrap_or_default();
    if style_block.is_empty() {
        user.push_str("\n\nNo site style was detected; use a clean, neutral design.");
    } else {
        user.push_str("\n\nSite style:\n");
        user.push_str(&style_block);
    }

    if let Some(requirements) = request.requirements.map(str::trim)
        && !requirements.is_empty()
    {
        user.push_str("\n\nAdditional requirements from the user: ");
        user.push_str(requirements);
    }

    Prompt::system(GENERATE_SYSTEM_PROMPT).with_user(user)
}

pub fn update_prompt(content: &str, current_tool: &str, feedback: &str) -> Prompt {
    let user = format!(
        "Original blog post: {content}\n\n\
         Current tool code:\n{current_tool}\n\n\
         Requested changes: {feedback}"
    );

    Prompt::system(UPDATE_SYSTEM_PROMPT).with_user(user)
}
