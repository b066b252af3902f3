use edu_client::model::requests::{
    ContactForm, LoginRequest, NewsletterRequest, PaymentRequest, RegisterRequest, Review,
};
use serde_json::json;

#[test]
fn test_register_request_shape() {
    let body = RegisterRequest {
        name: "A",
        email: "a@b.com",
        password: "pw",
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "name": "A", "email": "a@b.com", "password": "pw" })
    );
}

#[test]
fn test_login_request_shape() {
    let body = LoginRequest {
        email: "a@b.com",
        password: "pw",
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "email": "a@b.com", "password": "pw" })
    );
}

#[test]
fn test_payment_request_uses_camel_case() {
    let body = PaymentRequest { plan_id: "pro" };
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "planId": "pro" }));
}

#[test]
fn test_review_shape() {
    let review = Review::new(5, "Отличный курс");
    assert_eq!(
        serde_json::to_value(&review).unwrap(),
        json!({ "rating": 5, "comment": "Отличный курс" })
    );
}

#[test]
fn test_contact_form_sends_extra_fields_and_skips_missing() {
    let mut form = ContactForm {
        name: Some("Иван".to_string()),
        email: Some("ivan@example.com".to_string()),
        ..ContactForm::default()
    };
    form.extra.insert("course".to_string(), json!("python"));

    assert_eq!(
        serde_json::to_value(&form).unwrap(),
        json!({ "name": "Иван", "email": "ivan@example.com", "course": "python" })
    );
}

#[test]
fn test_newsletter_request_shape() {
    let body = NewsletterRequest { email: "a@b.com" };
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "email": "a@b.com" }));
}
