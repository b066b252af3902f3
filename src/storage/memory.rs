/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{AUTH_TOKEN_KEY, USER_KEY};
use crate::error::AppError;
use crate::storage::interface::SessionStore;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Process-local session store
///
/// Used in tests and by embedders that do not want anything on disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a single raw entry, bypassing the token/user pairing
    ///
    /// Simulates the host environment editing storage behind the client's
    /// back, e.g. leaving a corrupt `user` entry.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Returns a raw entry by key
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.get(key).cloned())
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.entries
            .lock()
            .map_err(|e| AppError::Storage(format!("memory store poisoned: {e}")))
    }
}

impl SessionStore for MemoryStore {
    fn token(&self) -> Result<Option<String>, AppError> {
        self.get_raw(AUTH_TOKEN_KEY)
    }

    fn user_raw(&self) -> Result<Option<String>, AppError> {
        self.get_raw(USER_KEY)
    }

    fn save(&self, token: &str, user_json: &str) -> Result<(), AppError> {
        let mut entries = self.lock()?;
        entries.insert(AUTH_TOKEN_KEY.to_string(), token.to_string());
        entries.insert(USER_KEY.to_string(), user_json.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        let mut entries = self.lock()?;
        entries.remove(AUTH_TOKEN_KEY);
        entries.remove(USER_KEY);
        Ok(())
    }
}
