use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{PredictionRequest, PredictionResponse},
    services::predictor,
    state::SharedState,
};

pub async fn predict_handler(
    State(state): State<SharedState>,
    Json(payload): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, AppError> {
    let url = state
        .config
        .prediction_api_url
        .as_deref()
        .ok_or(AppError::PredictorNotConfigured)?;

    let predicted_cost = predictor::predict(&state.http, url, &payload).await?;
    Ok(Json(PredictionResponse { predicted_cost }))
}
