use arqen_backend::services::assistant::{
    NO_RESPONSE_FALLBACK, no_response_reply, parse_reply,
};

#[test]
fn test_well_formed_reply_passes_through() {
    let raw = r#"{
        "sources": ["https://example.com/a", "https://example.com/b"],
        "summary": "Happy to help! Here is what I found.",
        "points": ["first", "second", "third"]
    }"#;

    let reply = parse_reply(raw);
    assert_eq!(
        reply.sources,
        vec!["https://example.com/a", "https://example.com/b"]
    );
    assert_eq!(reply.summary, "Happy to help! Here is what I found.");
    assert_eq!(reply.points, vec!["first", "second", "third"]);
    assert_eq!(reply.role, "assistant");
    assert_eq!(reply.content, reply.summary);
}

#[test]
fn test_plain_text_reply_falls_back_to_raw_summary() {
    let raw = "Sure, the capital of France is Paris.";

    let reply = parse_reply(raw);
    assert!(reply.sources.is_empty());
    assert_eq!(reply.summary, raw);
    assert!(reply.points.is_empty());
    assert_eq!(reply.role, "assistant");
    assert_eq!(reply.content, raw);
}

#[test]
fn test_truncated_json_reply_falls_back_to_raw_summary() {
    let raw = r#"{"sources": [], "summary": "cut off mid-"#;

    let reply = parse_reply(raw);
    assert_eq!(reply.summary, raw);
    assert!(reply.sources.is_empty());
    assert!(reply.points.is_empty());
}

#[test]
fn test_json_but_not_an_object_falls_back() {
    for raw in ["42", "[1, 2, 3]", "\"just a string\"", "null"] {
        let reply = parse_reply(raw);
        assert_eq!(reply.summary, raw, "input: {raw}");
        assert!(reply.sources.is_empty());
        assert!(reply.points.is_empty());
    }
}

#[test]
fn test_partial_object_defaults_missing_fields() {
    let reply = parse_reply(r#"{"summary": "short answer"}"#);
    assert_eq!(reply.summary, "short answer");
    assert_eq!(reply.content, "short answer");
    assert!(reply.sources.is_empty());
    assert!(reply.points.is_empty());
}

#[test]
fn test_empty_summary_keeps_raw_text_as_content() {
    let raw = r#"{"sources": [], "summary": "", "points": []}"#;
    let reply = parse_reply(raw);
    assert_eq!(reply.summary, "");
    assert_eq!(reply.content, raw);
}

#[test]
fn test_no_response_fallback_shape() {
    let reply = no_response_reply();
    assert_eq!(reply.summary, NO_RESPONSE_FALLBACK);
    assert_eq!(reply.content, NO_RESPONSE_FALLBACK);
    assert!(reply.sources.is_empty());
    assert!(reply.points.is_empty());
    assert_eq!(reply.role, "assistant");
}
