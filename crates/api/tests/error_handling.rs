//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use taskboard_api::error::AppError;
use taskboard_core::error::CoreError;
use taskboard_db::models::task::TaskInput;
use taskboard_db::models::user::UserInput;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::not_found("Project", 42);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
    assert!(json.get("details").is_none());
}

// ---------------------------------------------------------------------------
// Test: field violations map to 400 with a details array
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_fields_return_400_with_details() {
    let input = UserInput {
        name: String::new(),
        email: "not-an-email".into(),
        role: "developer".into(),
    };
    let err = AppError::from(input.validate().unwrap_err());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let details = json["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["field"], "name");
    assert_eq!(details[0]["rule"], "required");
    assert_eq!(details[1]["field"], "email");
    assert_eq!(details[1]["rule"], "email");
}

#[tokio::test]
async fn bad_priority_reports_one_of_rule() {
    let input = TaskInput {
        title: "x".into(),
        priority: "urgent".into(),
        assignee_id: 1,
        project_id: 1,
        ..TaskInput::default()
    };
    let err = AppError::from(input.validate().unwrap_err());

    let (_, json) = error_to_response(err).await;

    assert_eq!(json["details"][0]["rule"], "one_of");
    assert_eq!(
        json["details"][0]["message"],
        "priority must be one of: low, medium, high"
    );
}

// ---------------------------------------------------------------------------
// Test: date-ordering violation maps to 400 with DATE_ORDER code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn date_order_error_returns_400() {
    let err = AppError::Core(CoreError::DateOrder {
        field: "endDate",
        reference: "startDate",
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "DATE_ORDER");
    assert_eq!(json["error"], "endDate should not be earlier than startDate");
}

// ---------------------------------------------------------------------------
// Test: internal and database errors map to 500 carrying the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_with_message() {
    let err = AppError::Core(CoreError::Internal("date out of range".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "date out of range");
}

#[tokio::test]
async fn pool_timeout_returns_500() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], sqlx::Error::PoolTimedOut.to_string());
}

// ---------------------------------------------------------------------------
// Test: routing fallbacks produce JSON bodies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn route_not_found_returns_404_with_path() {
    let err = AppError::RouteNotFound("/nope".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "No route for /nope");
}

#[tokio::test]
async fn method_not_allowed_returns_405() {
    let (status, json) = error_to_response(AppError::MethodNotAllowed).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["code"], "METHOD_NOT_ALLOWED");
    assert_eq!(json["error"], "Method not allowed");
}
