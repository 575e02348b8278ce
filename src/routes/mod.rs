// src/routes/mod.rs
pub mod chat;
pub mod predict;
pub mod upload;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat::chat_handler))
        .route("/api/chat/upload", post(upload::upload_handler))
        .route("/api/predict", post(predict::predict_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
