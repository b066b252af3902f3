/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session store abstraction
//!
//! The session lives in two string entries, `authToken` and `user` (the
//! latter serialized JSON). Implementations must write and clear both
//! entries together so a token never exists without its user record.

use crate::error::AppError;

/// Key-value storage for the authentication token and the user record
pub trait SessionStore: Send + Sync {
    /// Returns the stored token, if any
    fn token(&self) -> Result<Option<String>, AppError>;

    /// Returns the stored user entry exactly as persisted
    fn user_raw(&self) -> Result<Option<String>, AppError>;

    /// Persists the token and the serialized user in a single step
    fn save(&self, token: &str, user_json: &str) -> Result<(), AppError>;

    /// Removes both entries; clearing an empty store succeeds
    fn clear(&self) -> Result<(), AppError>;
}
