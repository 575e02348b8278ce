//! Chat relay core: forwards a user turn plus history to the
//! chat-completions API and reshapes the reply defensively.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::message::{ChatReply, HistoryMessage};

/// Shown when the upstream reply carries no message content at all.
pub const NO_RESPONSE_FALLBACK: &str = "⚠️ No response from AI.";

/// The prompt pins the reply to a strict JSON shape so the UI can render
/// sources and bullet points. `parse_reply` handles the models that
/// ignore it anyway.
pub const SYSTEM_PROMPT: &str = r#"You are ArqenAI 🏛️, a friendly and professional assistant. Always reply in a natural, human-like, conversational tone — clear, warm, and easy to read.
Do not sound robotic. Always begin with a short greeting or acknowledgment before helping.
Always reply ONLY in valid JSON, nothing else, using this format:
{
  "sources": ["https://example.com/link1", "https://example.com/link2"],
  "summary": "A natural, human-written paragraph that feels like real conversation. Only add emojis occasionally and sparingly, at most 1–2 if truly relevant.",
  "points": ["bullet point 1", "bullet point 2", "bullet point 3"]
}
Only include sources if you know relevant ones (otherwise leave empty). Use emojis rarely (no more than 1–2, only if strongly relevant). Do not include explanations, comments, or text outside JSON."#;

pub async fn complete(
    http: &reqwest::Client,
    config: &AppConfig,
    api_key: &str,
    message: &str,
    history: &[HistoryMessage],
) -> Result<ChatReply, AppError> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(json!({ "role": "system", "content": SYSTEM_PROMPT }));
    for turn in history {
        messages.push(json!({ "role": turn.role, "content": turn.content }));
    }
    messages.push(json!({ "role": "user", "content": message }));

    let body = json!({
        "model": config.openai_model,
        "temperature": 0.7,
        "messages": messages,
    });

    let url = format!("{}/chat/completions", config.openai_base_url);
    let response = http
        .post(url)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let status = response.status();
    let data: Value = response
        .json()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    if !status.is_success() || data.get("error").is_some() {
        tracing::error!(%status, "chat completion request failed");
        let message = data
            .pointer("/error/message")
            .and_then(Value::as_str)
            .unwrap_or("OpenAI request failed")
            .to_string();
        return Err(AppError::Upstream(message));
    }

    let reply = data
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str);

    Ok(match reply {
        Some(raw) => parse_reply(raw),
        None => no_response_reply(),
    })
}

#[derive(Deserialize)]
struct ReplyShape {
    #[serde(default)]
    sources: Vec<String>,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    points: Vec<String>,
}

/// Reshape the raw model reply. A reply that deserializes to the
/// expected object passes through; anything else degrades silently to
/// the raw text as the summary. The raw reply is never dropped.
pub fn parse_reply(raw: &str) -> ChatReply {
    match serde_json::from_str::<ReplyShape>(raw) {
        Ok(shape) => {
            let content = if shape.summary.is_empty() {
                raw.to_string()
            } else {
                shape.summary.clone()
            };
            ChatReply {
                sources: shape.sources,
                summary: shape.summary,
                points: shape.points,
                role: "assistant".to_string(),
                content,
            }
        }
        Err(_) => ChatReply {
            sources: Vec::new(),
            summary: raw.to_string(),
            points: Vec::new(),
            role: "assistant".to_string(),
            content: raw.to_string(),
        },
    }
}

pub fn no_response_reply() -> ChatReply {
    ChatReply {
        sources: Vec::new(),
        summary: NO_RESPONSE_FALLBACK.to_string(),
        points: Vec::new(),
        role: "assistant".to_string(),
        content: NO_RESPONSE_FALLBACK.to_string(),
    }
}
