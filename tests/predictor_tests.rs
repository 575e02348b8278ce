use arqen_backend::services::predictor::extract_scalar;
use serde_json::json;

#[test]
fn test_bare_number_response() {
    assert_eq!(extract_scalar(&json!(1_250_000.5)), Some(1_250_000.5));
    assert_eq!(extract_scalar(&json!(42)), Some(42.0));
}

#[test]
fn test_wrapped_number_response() {
    assert_eq!(
        extract_scalar(&json!({ "predictedCost": 980000.0 })),
        Some(980000.0)
    );
    assert_eq!(
        extract_scalar(&json!({ "predicted_cost": 980000.0 })),
        Some(980000.0)
    );
    assert_eq!(
        extract_scalar(&json!({ "prediction": 12.5 })),
        Some(12.5)
    );
}

#[test]
fn test_non_numeric_response_yields_none() {
    assert_eq!(extract_scalar(&json!("980000")), None);
    assert_eq!(extract_scalar(&json!({ "predictedCost": "980000" })), None);
    assert_eq!(extract_scalar(&json!([980000.0])), None);
    assert_eq!(extract_scalar(&json!(null)), None);
}
