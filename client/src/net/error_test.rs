use super::*;

#[test]
fn from_response_4xx_is_unauthorized() {
    let err = ApiError::from_response(401, r#"{"message":"Invalid credentials"}"#);
    assert_eq!(
        err,
        ApiError::Unauthorized { status: 401, message: "Invalid credentials".to_owned() }
    );
}

#[test]
fn from_response_5xx_is_unexpected() {
    let err = ApiError::from_response(503, "maintenance");
    assert_eq!(err, ApiError::Unexpected { status: 503, message: "maintenance".to_owned() });
}

#[test]
fn from_response_3xx_is_unexpected() {
    assert!(matches!(ApiError::from_response(302, ""), ApiError::Unexpected { status: 302, .. }));
}

#[test]
fn response_message_falls_back_to_status_line() {
    assert_eq!(response_message(500, ""), "HTTP error! Status: 500");
    assert_eq!(response_message(500, "   "), "HTTP error! Status: 500");
}

#[test]
fn response_message_ignores_json_without_message() {
    assert_eq!(response_message(400, r#"{"error":"bad"}"#), "HTTP error! Status: 400");
    assert_eq!(response_message(400, r#"{"message":"  "}"#), "HTTP error! Status: 400");
}

#[test]
fn response_message_uses_trimmed_text() {
    assert_eq!(response_message(403, "  not an admin \n"), "not an admin");
}

#[test]
fn only_network_failures_are_retryable() {
    assert!(ApiError::NetworkUnavailable("timeout".to_owned()).is_retryable());
    assert!(!ApiError::from_response(401, "").is_retryable());
    assert!(!ApiError::from_response(500, "").is_retryable());
    assert!(!ApiError::Validation("x".to_owned()).is_retryable());
}

#[test]
fn user_message_distinguishes_network_from_rejection() {
    let network = ApiError::NetworkUnavailable("connection refused".to_owned()).user_message();
    let rejected = ApiError::from_response(401, "Invalid credentials").user_message();
    assert_ne!(network, rejected);
    assert_eq!(rejected, "Invalid credentials");
}

#[test]
fn not_in_browser_is_network_kind() {
    assert!(matches!(ApiError::not_in_browser(), ApiError::NetworkUnavailable(_)));
}
