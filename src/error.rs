/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the education platform client
//!
//! Every failure is one of three kinds: the transport failed, the backend
//! rejected the request, or a local precondition was not met. [`AppError`]
//! keeps those apart so callers can branch on [`AppError::kind`]; the
//! presentation layer is the only place they are flattened to a message.

use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure (connection refused, timeout, TLS, ...)
    #[error("network error: {0}")]
    Network(String),
    /// No token is stored, so an authenticated request cannot be issued
    #[error("not authenticated")]
    Unauthenticated,
    /// The backend answered but refused the request
    #[error("{0}")]
    BackendRejected(String),
    /// The backend answered with a body that could not be decoded
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// The persisted user record is not valid serialized data
    #[error("corrupt session: {0}")]
    CorruptSession(String),
    /// Session storage could not be read or written
    #[error("storage error: {0}")]
    Storage(String),
    /// Caller-supplied input could not be turned into a request
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Underlying I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON (de)serialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of an [`AppError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Transport failure
    Network,
    /// Missing token
    Unauthenticated,
    /// Application-level rejection or unusable backend answer
    BackendRejected,
    /// Local storage, serialization or input problem
    Local,
}

impl AppError {
    /// Classifies this error into one of the [`ErrorKind`] buckets
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Network(_) => ErrorKind::Network,
            AppError::Unauthenticated => ErrorKind::Unauthenticated,
            AppError::BackendRejected(_) | AppError::InvalidResponse(_) => {
                ErrorKind::BackendRejected
            }
            AppError::CorruptSession(_)
            | AppError::Storage(_)
            | AppError::InvalidInput(_)
            | AppError::Io(_)
            | AppError::Json(_) => ErrorKind::Local,
        }
    }

    /// Returns `true` when the failure happened before or during transport
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            AppError::InvalidResponse(error.to_string())
        } else {
            AppError::Network(error.to_string())
        }
    }
}
