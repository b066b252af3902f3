use crate::common::TestClient;
use edu_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_create_payment_redirects_to_checkout() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/payments/create")
        .match_header("authorization", "Bearer T1")
        .match_body(Matcher::Json(json!({ "planId": "pro" })))
        .with_status(200)
        .with_body(r#"{"paymentUrl":"https://pay.example.com/c/abc","amount":1990}"#)
        .create_async()
        .await;

    let t = TestClient::logged_in(&server, "T1");
    let payment = t.client.create_payment("pro").await.unwrap();

    mock.assert_async().await;
    assert_eq!(payment.payment_url, "https://pay.example.com/c/abc");
    assert_eq!(payment.extra.get("amount"), Some(&json!(1990)));
    assert_eq!(
        t.navigator.visited(),
        vec!["https://pay.example.com/c/abc".to_string()]
    );
}

#[tokio::test]
async fn test_create_payment_without_url_does_not_navigate() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/payments/create")
        .with_status(200)
        .with_body(r#"{"status":"pending"}"#)
        .create_async()
        .await;

    let t = TestClient::logged_in(&server, "T1");
    match t.client.create_payment("basic").await {
        Err(AppError::BackendRejected(message)) => {
            assert_eq!(message, "payment response missing paymentUrl")
        }
        other => panic!("Expected BackendRejected, got {other:?}"),
    }
    assert!(t.navigator.visited().is_empty());
}

#[tokio::test]
async fn test_create_payment_unknown_plan() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/payments/create")
        .with_status(404)
        .with_body(r#"{"message":"Plan not found"}"#)
        .create_async()
        .await;

    let t = TestClient::logged_in(&server, "T1");
    let err = t.client.create_payment("gold").await.unwrap_err();
    assert_eq!(err.to_string(), "Plan not found");
    assert!(t.navigator.visited().is_empty());
}

#[tokio::test]
async fn test_create_payment_requires_login() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/payments/create")
        .expect(0)
        .create_async()
        .await;

    let t = TestClient::new(&server);
    let err = t.client.create_payment("pro").await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
}
