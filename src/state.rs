// src/state.rs
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use crate::config::AppConfig;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: AppConfig,
    /// Shared HTTP client for all upstream calls.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { config, http })
    }
}
