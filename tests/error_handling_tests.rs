//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors return correct HTTP status codes
//! - Error responses are properly formatted
//! - Error matching allows clients to handle specific cases

use axum::http::StatusCode;
use axum::response::IntoResponse;
use item_service::prelude::*;

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_item_not_found_returns_404() {
        let err = ServiceError::ItemNotFound { id: 5 };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_payload_returns_400() {
        let err = ServiceError::invalid_payload("missing field");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_returns_500() {
        let err = ServiceError::storage("item store lock poisoned");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_config_returns_500() {
        let err = ServiceError::Config {
            message: "PORT must be a number".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

// =============================================================================
// Error Response Format Tests
// =============================================================================

mod response_format_tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let cases = [
            (ServiceError::ItemNotFound { id: 1 }, "ITEM_NOT_FOUND"),
            (ServiceError::invalid_payload("x"), "INVALID_PAYLOAD"),
            (ServiceError::storage("x"), "STORAGE_ERROR"),
            (
                ServiceError::Config {
                    message: "x".to_string(),
                },
                "CONFIG_ERROR",
            ),
        ];

        for (err, code) in cases {
            assert_eq!(err.error_code(), code);
            assert_eq!(err.to_response().code, code);
        }
    }

    #[test]
    fn test_response_serialization_skips_empty_details() {
        let response = ServiceError::invalid_payload("expected `,`").to_response();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], "INVALID_PAYLOAD");
        assert_eq!(json["message"], "invalid payload: expected `,`");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_not_found_response_includes_id() {
        let response = ServiceError::ItemNotFound { id: 12 }.to_response();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["message"], "item with id '12' not found");
        assert_eq!(json["details"]["id"], 12);
    }

    #[test]
    fn test_into_response_uses_status_code() {
        let response = ServiceError::storage("disk full").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

// =============================================================================
// Error Matching Tests
// =============================================================================

mod error_matching_tests {
    use super::*;

    #[tokio::test]
    async fn test_match_not_found_from_repository() {
        let repository = InMemoryItemRepository::new();

        match repository.update(3, ItemForm::new("pen", 1000, 10)).await {
            Err(ServiceError::ItemNotFound { id }) => assert_eq!(id, 3),
            other => panic!("expected ItemNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_config_error_from_yaml() {
        let err = ServiceConfig::from_yaml_str("server:\n  port: not-a-port\n").unwrap_err();
        assert!(matches!(err, ServiceError::Config { .. }));
    }
}
