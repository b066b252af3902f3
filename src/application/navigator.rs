/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::sync::Mutex;
use tracing::{info, warn};

/// Receives navigation requests (logout to the site root, payment checkout)
pub trait Navigator: Send + Sync {
    /// Moves the user to `location`
    fn navigate(&self, location: &str);
}

/// Navigator that only logs the requested location
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, location: &str) {
        info!("Navigating to {}", location);
    }
}

/// Navigator that remembers every location it was sent to
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locations visited so far, oldest first
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().map(|v| v.clone()).unwrap_or_default()
    }

    /// Most recent location
    pub fn last(&self) -> Option<String> {
        self.visited().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        match self.visited.lock() {
            Ok(mut visited) => visited.push(location.to_string()),
            Err(e) => warn!("Navigation to {} not recorded: {}", location, e),
        }
    }
}
