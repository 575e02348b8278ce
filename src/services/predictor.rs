//! Cost-prediction relay. Forwards the fixed-shape numeric record to the
//! external prediction endpoint and expects a single scalar back.

use serde_json::Value;

use crate::error::AppError;
use crate::message::PredictionRequest;

pub async fn predict(
    http: &reqwest::Client,
    url: &str,
    request: &PredictionRequest,
) -> Result<f64, AppError> {
    let response = http
        .post(url)
        .json(request)
        .send()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let status = response.status();
    let data: Value = response
        .json()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    if !status.is_success() {
        tracing::error!(%status, "prediction request failed");
        let message = data
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("Prediction request failed")
            .to_string();
        return Err(AppError::Upstream(message));
    }

    extract_scalar(&data)
        .ok_or_else(|| AppError::Upstream("Prediction service returned no value".to_string()))
}

/// The endpoint may answer with a bare number or an object wrapping one.
pub fn extract_scalar(data: &Value) -> Option<f64> {
    match data {
        Value::Number(n) => n.as_f64(),
        Value::Object(map) => ["predictedCost", "predicted_cost", "prediction"]
            .iter()
            .find_map(|key| map.get(*key))
            .and_then(Value::as_f64),
        _ => None,
    }
}
