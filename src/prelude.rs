/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Edu Client Prelude
//!
//! Brings the commonly used types and traits into scope:
//!
//! ```rust
//! use edu_client::prelude::*;
//!
//! let store = std::sync::Arc::new(MemoryStore::new());
//! assert!(store.token().unwrap().is_none());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the platform client
pub use crate::application::config::{Config, RestApiConfig, SiteConfig, StorageConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and its classification
pub use crate::error::{AppError, ErrorKind};

// ============================================================================
// SESSION AND API CLIENTS
// ============================================================================

/// Session client
pub use crate::application::auth::SessionClient;

/// API client
pub use crate::application::client::Client;

/// Navigation hooks
pub use crate::application::navigator::{LogNavigator, Navigator, RecordingNavigator};

/// Service traits
pub use crate::application::interfaces::course::CourseService;
pub use crate::application::interfaces::payment::PaymentService;
pub use crate::application::interfaces::platform::PlatformService;

// ============================================================================
// STORAGE
// ============================================================================

/// Session stores
pub use crate::storage::{FileStore, MemoryStore, SessionStore};

// ============================================================================
// MODELS
// ============================================================================

/// Session and user models
pub use crate::model::auth::{Session, User};

/// Request options for authenticated requests
pub use crate::model::http::RequestOptions;

/// Request bodies
pub use crate::model::requests::{ContactForm, Review};

/// Response bodies
pub use crate::model::responses::{NewsletterResponse, PaymentResponse};

/// Presentation models
pub use crate::presentation::{ActionResult, Course, CourseReview, PlatformStats};

// ============================================================================
// UTILITIES AND CONSTANTS
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
