// src/config.rs
//
// All configuration comes from environment variables (a .env file is
// loaded by main and by tests via dotenvy). A missing OpenAI key is not
// a startup error: the chat route reports it per-request with a 500.

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub prediction_api_url: Option<String>,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from a key lookup. Split out from `from_env` so the
    /// parsing rules are testable without touching process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let openai_api_key = get("OPENAI_API_KEY").filter(|v| !v.trim().is_empty());
        let openai_model =
            get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());
        let openai_base_url = get("OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let prediction_api_url = get("PREDICTION_API_URL").filter(|v| !v.trim().is_empty());
        let port = parse_or(get("PORT"), DEFAULT_PORT);
        let request_timeout_secs =
            parse_or(get("REQUEST_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS);
        let connect_timeout_secs =
            parse_or(get("CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS);

        Self {
            openai_api_key,
            openai_model,
            openai_base_url,
            prediction_api_url,
            port,
            request_timeout_secs,
            connect_timeout_secs,
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.parse::<T>().ok()).unwrap_or(default)
}
