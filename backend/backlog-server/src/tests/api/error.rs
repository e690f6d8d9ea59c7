use crate::ApiError;

use backlog_core::CoreError;
use backlog_devops::DevOpsError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("Invalid date format", Some("start_date"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["detail"], "Invalid date format");
    assert_eq!(json["field"], "start_date");
}

#[tokio::test]
async fn test_config_error_returns_400_without_field() {
    let (status, json) = body_json(ApiError::config("no PAT")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "CONFIG_ERROR");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_remote_error_mirrors_upstream_status() {
    let error = ApiError::Remote {
        status: 404,
        message: "Failed to query work items: project not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "REMOTE_ERROR");
    assert_eq!(json["detail"], "Failed to query work items: project not found");
}

#[test]
fn test_remote_error_with_success_status_becomes_bad_gateway() {
    let error = ApiError::Remote {
        status: 203,
        message: "odd".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = body_json(ApiError::internal("Internal server error")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[test]
fn test_core_validation_converts_with_field() {
    let api_err: ApiError = CoreError::validation("bad month", Some("month")).into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "bad month");
            assert_eq!(field.as_deref(), Some("month"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_devops_remote_converts_with_status() {
    let api_err: ApiError = DevOpsError::remote(401, "Failed to fetch projects", "denied").into();

    match api_err {
        ApiError::Remote {
            status, message, ..
        } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Failed to fetch projects: denied");
        }
        _ => panic!("Expected Remote error"),
    }
}

#[test]
fn test_devops_json_converts_to_generic_internal() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let api_err: ApiError = DevOpsError::from(json_err).into();

    match api_err {
        ApiError::Internal { message, .. } => assert_eq!(message, "Internal server error"),
        _ => panic!("Expected Internal error"),
    }
}
