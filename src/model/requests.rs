/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /register`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest<'a> {
    /// Display name
    pub name: &'a str,
    /// Email address
    pub email: &'a str,
    /// Plain password, validated by the backend only
    pub password: &'a str,
}

/// Body of `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest<'a> {
    /// Email address
    pub email: &'a str,
    /// Plain password
    pub password: &'a str,
}

/// Body of `POST /payments/create`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest<'a> {
    /// Pricing plan identifier (e.g. `basic`, `pro`, `enterprise`)
    pub plan_id: &'a str,
}

/// A course review as submitted by a student
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Star rating
    pub rating: u8,
    /// Free-text comment
    pub comment: String,
}

impl Review {
    /// Creates a new review
    pub fn new(rating: u8, comment: impl Into<String>) -> Self {
        Self {
            rating,
            comment: comment.into(),
        }
    }
}

/// Contact form submission
///
/// The landing page form has no fixed schema, so any extra fields are sent
/// along unchanged.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContactForm {
    /// Sender name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sender email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Sender phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Message body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Additional form fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /newsletter/subscribe`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsletterRequest<'a> {
    /// Subscriber email
    pub email: &'a str,
}
