use super::*;

#[test]
fn unreadable_body_is_bad_request() {
    let response = ProxyError::Body("length limit exceeded".to_owned()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn config_error_names_key() {
    let err = ConfigError::Invalid { key: "PORT", value: "abc".to_owned() };
    assert_eq!(err.to_string(), "invalid PORT: \"abc\"");
}

#[test]
fn startup_error_wraps_config_error() {
    let err = ServerError::from(ConfigError::Leptos("missing site root".to_owned()));
    assert_eq!(err.to_string(), "leptos configuration: missing site root");
}
