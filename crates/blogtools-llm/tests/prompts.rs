use blogtools_core::models::style::StyleSummary;
use blogtools_llm::prompts::{
    build_style_block, generate_prompt, ideas_prompt, update_prompt, ToolRequest,
};

fn styled() -> StyleSummary {
    let mut style = StyleSummary::default();
    style.typography.font_family = "Merriweather, serif".to_string();
    style.colors.link = "#0a66c2".to_string();
    style
}

#[test]
fn empty_style_produces_no_block() {
    assert_eq!(build_style_block(&StyleSummary::default()), "");
}

#[test]
fn style_block_lists_resolved_properties() {
    let block = build_style_block(&styled());
    assert!(block.starts_with("<site_style>"));
    assert!(block.ends_with("</site_style>"));
    assert!(block.contains("- typography / font-family: Merriweather, serif"));
    assert!(block.contains("- colors / link: #0a66c2"));
    assert!(!block.contains("background"));
}

#[test]
fn ideas_prompt_asks_for_five_plain_ideas() {
    let prompt = ideas_prompt("How to budget for a trip", None);
    assert!(prompt.system.contains("5"));
    assert!(prompt.system.contains("Do not include explanations or markdown"));

    let user = prompt.user.unwrap();
    assert!(user.contains("How to budget for a trip"));
    assert!(!user.contains("<site_style>"));
}

#[test]
fn ideas_prompt_includes_style_when_present() {
    let style = styled();
    let user = ideas_prompt("post", Some(&style)).user.unwrap();
    assert!(user.contains("<site_style>"));
}

#[test]
fn generate_prompt_carries_idea_style_and_requirements() {
    let style = styled();
    let prompt = generate_prompt(&ToolRequest {
        content: "Budgeting 101",
        idea: "Trip cost calculator",
        style: Some(&style),
        requirements: Some("  use euros  "),
    });

    assert!(prompt.system.contains("Do not include <html>, <head> or <body> tags"));
    assert!(prompt.system.contains("<style> block first"));
    assert!(prompt.system.contains("triple backticks"));

    let user = prompt.user.unwrap();
    assert!(user.contains("Blog content: Budgeting 101"));
    assert!(user.contains("Tool idea: Trip cost calculator"));
    assert!(user.contains("Merriweather, serif"));
    assert!(user.contains("Additional requirements from the user: use euros"));
}

#[test]
fn generate_prompt_without_style_or_requirements() {
    let user = generate_prompt(&ToolRequest {
        content: "c",
        idea: "i",
        style: None,
        requirements: Some("   "),
    })
    .user
    .unwrap();

    assert!(user.contains("No site style was detected"));
    assert!(!user.contains("Additional requirements"));
}

#[test]
fn update_prompt_embeds_tool_and_feedback() {
    let user = update_prompt("post body", "<div id=\"t\"></div>", "make it blue")
        .user
        .unwrap();
    assert!(user.contains("Original blog post: post body"));
    assert!(user.contains("<div id=\"t\"></div>"));
    assert!(user.contains("Requested changes: make it blue"));
}
