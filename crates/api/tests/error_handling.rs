//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use gamecat_api::error::AppError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: StoreFailure maps to 500 and shows only the fixed message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_failure_returns_500_with_fixed_message() {
    let err = AppError::StoreFailure("There was a problem displaying games.");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORE_FAILURE");
    assert_eq!(json["error"], "There was a problem displaying games.");
}

// ---------------------------------------------------------------------------
// Test: NotFound maps to 404 and quotes the requested id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_returns_404_naming_id() {
    let err = AppError::NotFound("abc".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "There was a problem displaying the game id='abc'.");
}

// ---------------------------------------------------------------------------
// Test: UnknownOperation maps to 404 and names the operation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_operation_returns_404_naming_operation() {
    let err = AppError::UnknownOperation("purge".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "UNKNOWN_OPERATION");
    assert_eq!(
        json["error"],
        "Calling method 'purge' caused errors. Route does not exist."
    );
}

// ---------------------------------------------------------------------------
// Test: Message maps to 400 and is shown verbatim
// ---------------------------------------------------------------------------

#[tokio::test]
async fn message_returns_400_verbatim() {
    let err = AppError::Message("Custom failure: 'quoted' & <tagged>".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "ERROR");
    assert_eq!(json["error"], "Custom failure: 'quoted' & <tagged>");
}
