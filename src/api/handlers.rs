//! HTTP request handlers for the quoting engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::JobInput;

use super::request::QuoteRequest;
use super::response::{ApiError, ApiErrorResponse, QuoteResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .with_state(state)
}

/// Handler for POST /quote endpoint.
///
/// Accepts a quote request, looks up the material, and returns the computed
/// pricing result.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Look up the material the way a persistence layer would
    let config = state.config();
    let material = match config.get_material(&request.material_id) {
        Ok(material) => material,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                material_id = %request.material_id,
                "Material not found"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types and run the engine
    let job: JobInput = request.job.into();
    match crate::calculation::compute_quote(&job, config.shop(), material) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                material_id = %material.id,
                qty = job.qty,
                unit_price = %result.active.unit_price,
                total = %result.active.total,
                "Quote computed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(QuoteResponse::new(result)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quote computation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::JobInputRequest;
    use crate::config::ConfigLoader;
    use crate::models::{BlankSupplier, QuoteType, SizeMode, YieldMethod};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/shop").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_valid_request() -> QuoteRequest {
        QuoteRequest {
            material_id: "leatherette".to_string(),
            job: JobInputRequest {
                quote_type: QuoteType::PatchPress,
                qty: 144,
                patch_width: dec("3.25"),
                patch_height: dec("2.25"),
                size_mode: SizeMode::Overall,
                outline_allowance: None,
                gap: None,
                border: None,
                waste_pct: None,
                yield_method: YieldMethod::Auto,
                manual_yield: None,
                blanks_supplied_by: BlankSupplier::Customer,
                blank_unit_cost: None,
                machine_minutes_per_sheet: None,
                cleanup_minutes_per_sheet: None,
                apply_minutes_per_hat: None,
                proof_minutes: None,
                setup_minutes: None,
                packing_minutes: None,
                turnaround_text: None,
            },
        }
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let state = create_test_state();
        let router = create_router(state);

        let request = create_valid_request();
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/quote")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        // Verify Content-Type header
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        // Verify response body is a valid QuoteResponse
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: QuoteResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.result.active.qty, 144);
        assert_eq!(result.result.active.unit_price, dec("9.50"));
        assert_eq!(result.result.tiers.len(), 7);
        assert_eq!(result.legacy.unit_price, dec("9.50"));
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/quote")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_qty_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        // JSON with missing job.qty field
        let body = r#"{
            "material_id": "leatherette",
            "job": {
                "patch_width": "3.25",
                "patch_height": "2.25"
            }
        }"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/quote")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        // serde may say "missing field `qty`" or similar
        assert!(
            error.message.contains("missing field") || error.message.to_lowercase().contains("qty"),
            "Expected error message to mention missing field or qty, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_unknown_material_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let mut request = create_valid_request();
        request.material_id = "chenille".to_string();
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/quote")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MATERIAL_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_api_005_zero_qty_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let mut request = create_valid_request();
        request.job.qty = 0;
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/quote")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "INVALID_JOB_INPUT");
    }

    #[tokio::test]
    async fn test_canonical_quote_over_http() {
        let state = create_test_state();
        let router = create_router(state);

        let request = create_valid_request();
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/quote")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: QuoteResponse = serde_json::from_slice(&body).unwrap();

        // 144 hats at the stock 144-287 price of $9.50, fee waived
        assert_eq!(result.result.active.cost_per_piece, dec("3.70"));
        assert_eq!(result.result.active.subtotal, dec("1368.00"));
        assert_eq!(result.result.active.total, dec("1368.00"));
        assert_eq!(result.result.shop_rate_per_hour, dec("76.98"));
        assert_eq!(result.result.best_yield, 35);
    }
}
