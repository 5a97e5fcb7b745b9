use blogtools_llm::error::LlmError;
use blogtools_llm::fake::ScriptedCompletion;
use blogtools_llm::generation::{generate_tool, suggest_ideas, update_tool};
use blogtools_llm::prompts::ToolRequest;

#[tokio::test]
async fn ideas_are_parsed_from_the_reply() {
    let model = ScriptedCompletion::new().reply("1. Add a calculator\n\n2. Build a quiz\n");

    let ideas = suggest_ideas(&model, "post", None).await.unwrap();

    assert_eq!(ideas, vec!["Add a calculator", "Build a quiz"]);
    assert_eq!(model.prompts().len(), 1);
}

#[tokio::test]
async fn tool_text_is_returned_verbatim() {
    let raw = "```html\n<div>not cleaned</div>\n```";
    let model = ScriptedCompletion::new().reply(raw).reply("  ");

    let generated = generate_tool(
        &model,
        &ToolRequest {
            content: "post",
            idea: "quiz",
            style: None,
            requirements: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(generated, raw);

    let updated = update_tool(&model, "post", raw, "shorter").await.unwrap();
    assert_eq!(updated, "  ");

    let prompts = model.prompts();
    assert!(prompts[1].user.as_deref().unwrap().contains(raw));
}

#[tokio::test]
async fn model_failures_propagate() {
    let model = ScriptedCompletion::new().fail(LlmError::Status {
        status: 429,
        body: "rate limited".to_string(),
    });

    let err = suggest_ideas(&model, "post", None).await.unwrap_err();
    assert!(err.to_string().contains("429"));
}
