// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<HistoryMessage>,
    #[serde(default, rename = "showLoading")]
    pub show_loading: bool,
}

/// One prior turn, kept by the browser and resent with every request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// The reshaped assistant reply returned to the browser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub sources: Vec<String>,
    pub summary: String,
    pub points: Vec<String>,
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub project_size: f64,
    pub floor_count: u32,
    pub region_code: String,
    pub complexity_score: f64,
    pub duration_months: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub predicted_cost: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub content_type: String,
}
