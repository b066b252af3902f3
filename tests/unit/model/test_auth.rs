use edu_client::error::AppError;
use edu_client::model::auth::{AuthResponse, Session, User};
use reqwest::StatusCode;
use serde_json::json;

#[test]
fn test_user_round_trip_preserves_extra_fields() {
    let original = json!({
        "id": 7,
        "name": "Анна",
        "email": "anna@example.com",
        "role": "student",
        "plan": { "id": "pro", "active": true }
    });

    let user: User = serde_json::from_value(original.clone()).unwrap();
    assert_eq!(user.id, json!(7));
    assert_eq!(user.name.as_deref(), Some("Анна"));
    assert_eq!(user.extra.get("role"), Some(&json!("student")));

    let back = serde_json::to_value(&user).unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_user_without_email_round_trips() {
    let original = json!({ "id": 1, "name": "A" });
    let user: User = serde_json::from_value(original.clone()).unwrap();
    assert!(user.email.is_none());
    assert_eq!(serde_json::to_value(&user).unwrap(), original);
}

#[test]
fn test_into_session_with_token_and_user() {
    let response: AuthResponse = serde_json::from_value(json!({
        "token": "T1",
        "user": { "id": 1, "name": "A" }
    }))
    .unwrap();

    let session = response.into_session(StatusCode::OK).unwrap();
    assert_eq!(session.token, "T1");
    assert_eq!(session.user.id, json!(1));
    assert_eq!(session.user_json().unwrap(), r#"{"id":1,"name":"A"}"#);
}

#[test]
fn test_into_session_token_wins_over_status() {
    let response: AuthResponse = serde_json::from_value(json!({
        "token": "T2",
        "user": { "id": 2 }
    }))
    .unwrap();

    let session = response.into_session(StatusCode::CREATED).unwrap();
    assert_eq!(session, Session::new("T2", User { id: json!(2), ..User::default() }));
}

#[test]
fn test_into_session_without_token_uses_backend_message() {
    let response: AuthResponse =
        serde_json::from_value(json!({ "message": "Invalid credentials" })).unwrap();

    match response.into_session(StatusCode::UNAUTHORIZED) {
        Err(AppError::BackendRejected(message)) => assert_eq!(message, "Invalid credentials"),
        other => panic!("Expected BackendRejected, got {other:?}"),
    }
}

#[test]
fn test_into_session_without_token_falls_back_to_error_field() {
    let response: AuthResponse =
        serde_json::from_value(json!({ "error": "Bad credentials" })).unwrap();

    match response.into_session(StatusCode::UNAUTHORIZED) {
        Err(AppError::BackendRejected(message)) => assert_eq!(message, "Bad credentials"),
        other => panic!("Expected BackendRejected, got {other:?}"),
    }
}

#[test]
fn test_into_session_prefers_message_over_error() {
    let response: AuthResponse =
        serde_json::from_value(json!({ "message": "Account locked", "error": "locked" }))
            .unwrap();

    match response.into_session(StatusCode::FORBIDDEN) {
        Err(AppError::BackendRejected(message)) => assert_eq!(message, "Account locked"),
        other => panic!("Expected BackendRejected, got {other:?}"),
    }
}

#[test]
fn test_into_session_without_token_or_message_reports_status() {
    let response = AuthResponse::default();

    match response.into_session(StatusCode::INTERNAL_SERVER_ERROR) {
        Err(AppError::BackendRejected(message)) => {
            assert_eq!(message, "request rejected with status 500")
        }
        other => panic!("Expected BackendRejected, got {other:?}"),
    }
}

#[test]
fn test_into_session_empty_token_is_not_a_token() {
    let response: AuthResponse = serde_json::from_value(json!({
        "token": "",
        "user": { "id": 1 },
        "message": "Account locked"
    }))
    .unwrap();

    match response.into_session(StatusCode::OK) {
        Err(AppError::BackendRejected(message)) => assert_eq!(message, "Account locked"),
        other => panic!("Expected BackendRejected, got {other:?}"),
    }
}

#[test]
fn test_into_session_token_without_user_is_rejected() {
    let response: AuthResponse = serde_json::from_value(json!({ "token": "T3" })).unwrap();

    match response.into_session(StatusCode::OK) {
        Err(AppError::BackendRejected(message)) => {
            assert_eq!(message, "response missing user record")
        }
        other => panic!("Expected BackendRejected, got {other:?}"),
    }
}
