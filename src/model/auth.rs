/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::http::rejection_message;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User record returned by the backend on login or registration
///
/// Only `id`, `name` and `email` are interpreted; every other field is kept
/// as-is so the persisted record matches what the backend sent.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier (number or string)
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Any additional fields the backend attaches
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An authentication token paired with the user it authenticates
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Opaque bearer token
    pub token: String,
    /// User the token was issued for
    pub user: User,
}

impl Session {
    /// Creates a new session
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Serialized form of the user record, as persisted under the `user` key
    pub fn user_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(&self.user)?)
    }
}

/// Body of a `/login` or `/register` response
///
/// Success is signalled solely by a non-empty `token`; the HTTP status is
/// only used to describe a rejection that carries no `message` or `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Issued token, present on success
    #[serde(default)]
    pub token: Option<String>,
    /// Authenticated user, present on success
    #[serde(default)]
    pub user: Option<User>,
    /// Backend explanation, present on failure
    #[serde(default)]
    pub message: Option<String>,
    /// Alternative explanation field some rejections use instead of `message`
    #[serde(default)]
    pub error: Option<String>,
}

impl AuthResponse {
    /// Interprets the response as a new session
    ///
    /// # Returns
    /// * `Ok(Session)` - a token and a user record were both present
    /// * `Err(AppError::BackendRejected)` - no token, or a token without a user
    pub fn into_session(self, status: StatusCode) -> Result<Session, AppError> {
        match (self.token.filter(|t| !t.is_empty()), self.user) {
            (Some(token), Some(user)) => Ok(Session::new(token, user)),
            (Some(_), None) => Err(AppError::BackendRejected(
                "response missing user record".to_string(),
            )),
            (None, _) => {
                let body = serde_json::json!({ "message": self.message, "error": self.error });
                Err(AppError::BackendRejected(rejection_message(status, &body)))
            }
        }
    }
}
