/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Answer of `POST /payments/create`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    /// Checkout page the user is sent to
    pub payment_url: String,
    /// Remaining fields of the payment record
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outcome of a newsletter subscription
///
/// `success` mirrors the HTTP status; a refused subscription is not an error.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsletterResponse {
    /// Whether the backend answered with a 2xx status
    pub success: bool,
    /// Backend message, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
