/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Uniform `{success, data | error}` results for UI code
//!
//! Typed [`AppError`]s flow through the client untouched; this is the one
//! place where they are flattened into a message for a notification toast.

use crate::error::{AppError, ErrorKind};
use serde::{Deserialize, Serialize};

/// Outcome of a user-facing action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult<T> {
    /// Whether the action succeeded
    pub success: bool,
    /// Payload on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Message on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Failure classification, kept for callers that still want to branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
}

impl<T> ActionResult<T> {
    /// Successful result
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            kind: None,
        }
    }

    /// Failed result
    pub fn failure(error: &AppError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
            kind: Some(error.kind()),
        }
    }

    /// Payload, falling back to `default` on failure
    ///
    /// Listing pages render an empty grid rather than an error.
    pub fn data_or(self, default: T) -> T {
        self.data.unwrap_or(default)
    }
}

impl<T> From<Result<T, AppError>> for ActionResult<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::failure(&e),
        }
    }
}
