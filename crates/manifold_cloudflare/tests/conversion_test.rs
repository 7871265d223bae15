//! Tests for model-id resolution, payload assembly, and text extraction.

use manifold_cloudflare::{
    ResponsesPayload, extract_output_text, resolve_model_id, to_responses_request,
};
use manifold_core::{ChatMessage, PipeRequest};
use serde_json::json;

#[test]
fn test_resolve_model_id_finds_marker() {
    assert_eq!(
        resolve_model_id("openwebui-tag@cf/openai/gpt-oss-120b"),
        "@cf/openai/gpt-oss-120b"
    );
}

#[test]
fn test_resolve_model_id_without_marker_is_verbatim() {
    assert_eq!(resolve_model_id("gpt-4"), "gpt-4");
    assert_eq!(resolve_model_id(""), "");
}

#[test]
fn test_resolve_model_id_with_leading_marker() {
    assert_eq!(
        resolve_model_id("@cf/openai/gpt-oss-20b"),
        "@cf/openai/gpt-oss-20b"
    );
}

#[test]
fn test_request_body_fixes_core_fields() -> anyhow::Result<()> {
    let request = PipeRequest::new("ignored", vec![ChatMessage::user("hi")]);
    let body = to_responses_request(&request, "@cf/a/b")?;
    let value = serde_json::to_value(&body)?;

    assert_eq!(value["model"], json!("@cf/a/b"));
    assert_eq!(value["stream"], json!(false));
    assert_eq!(value["input"], json!([{"role": "user", "content": "hi"}]));
    Ok(())
}

#[test]
fn test_request_body_merges_extras_but_not_reserved_keys() -> anyhow::Result<()> {
    let request = PipeRequest::new("m", Vec::new())
        .with_extra("temperature", json!(0.7))
        .with_extra("stream", json!(true))
        .with_extra("model", json!("evil-override"));

    let body = to_responses_request(&request, "@cf/a/b")?;
    let value = serde_json::to_value(&body)?;

    assert_eq!(value["temperature"], json!(0.7));
    assert_eq!(value["stream"], json!(false));
    assert_eq!(value["model"], json!("@cf/a/b"));
    assert!(value.get("input").is_some());
    Ok(())
}

#[test]
fn test_extract_concatenates_output_text_in_order() {
    let payload: ResponsesPayload = serde_json::from_value(json!({
        "output": [{
            "type": "message",
            "role": "assistant",
            "content": [
                {"type": "output_text", "text": "Hello"},
                {"type": "output_text", "text": " world"}
            ]
        }]
    }))
    .unwrap();

    assert_eq!(extract_output_text(&payload), "Hello world");
}

#[test]
fn test_extract_skips_non_assistant_and_non_message_items() {
    let payload: ResponsesPayload = serde_json::from_value(json!({
        "output": [
            {
                "type": "reasoning",
                "role": "assistant",
                "content": [{"type": "output_text", "text": "chain of thought"}]
            },
            {
                "type": "message",
                "role": "user",
                "content": [{"type": "output_text", "text": "echoed input"}]
            },
            {
                "type": "message",
                "role": "assistant",
                "content": [
                    {"type": "refusal", "text": "nope"},
                    {"type": "output_text", "text": "actual reply"}
                ]
            }
        ]
    }))
    .unwrap();

    assert_eq!(extract_output_text(&payload), "actual reply");
}

#[test]
fn test_extract_trims_surrounding_whitespace() {
    let payload: ResponsesPayload = serde_json::from_value(json!({
        "output": [{
            "type": "message",
            "role": "assistant",
            "content": [{"type": "output_text", "text": "  padded  "}]
        }]
    }))
    .unwrap();

    assert_eq!(extract_output_text(&payload), "padded");
}

#[test]
fn test_extract_returns_empty_for_no_matches() {
    let payload: ResponsesPayload = serde_json::from_value(json!({"output": []})).unwrap();
    assert_eq!(extract_output_text(&payload), "");

    let payload: ResponsesPayload = serde_json::from_value(json!({"id": "resp_1"})).unwrap();
    assert_eq!(extract_output_text(&payload), "");
}
