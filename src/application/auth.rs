/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session client for the education platform API
//!
//! This module owns the authentication token and the current-user record:
//! - Login and registration, persisting `{token, user}` on success
//! - Logout, clearing both entries and returning to the site root
//! - Local authentication checks (no token validation against the backend)
//! - The authenticated-request helper used by every protected call

use crate::application::config::Config;
use crate::application::navigator::Navigator;
use crate::constants::{JSON_CONTENT_TYPE, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{AuthResponse, Session, User};
use crate::model::http::{
    RequestOptions, join_url, make_http_request, make_json_request, merge_headers, read_json,
    rejection_message,
};
use crate::model::requests::{LoginRequest, RegisterRequest};
use crate::storage::SessionStore;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Builds the HTTP client shared by the session and API clients
///
/// The configured timeout applies to every request.
pub fn build_http_client(config: &Config) -> Result<Client, AppError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.rest_api.timeout())
        .build()?)
}

/// Owner of the authentication token and current-user record
///
/// Holds no session state of its own: every check reads the injected
/// [`SessionStore`], so two clients over the same store see the same session
/// and the last successful login wins.
pub struct SessionClient {
    config: Arc<Config>,
    http_client: Client,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl SessionClient {
    /// Creates a new session client
    ///
    /// # Arguments
    /// * `config` - API base URL, timeout and site root
    /// * `store` - Where the token and user are persisted
    /// * `navigator` - Receives the site root on logout
    pub fn new(
        config: Arc<Config>,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppError> {
        let http_client = build_http_client(&config)?;
        Ok(Self::with_http_client(config, http_client, store, navigator))
    }

    /// Creates a session client around an existing HTTP client
    pub fn with_http_client(
        config: Arc<Config>,
        http_client: Client,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            http_client,
            store,
            navigator,
        }
    }

    /// Registers a new account and starts a session for it
    ///
    /// Nothing is validated locally; the backend decides.
    ///
    /// # Returns
    /// * `Ok(User)` - The response carried a token; the session is persisted
    /// * `Err(AppError::BackendRejected)` - No token; carries the backend message
    /// * `Err(AppError::Network)` - The request never completed
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AppError> {
        info!("Registering new account");
        let body = RegisterRequest {
            name,
            email,
            password,
        };
        self.authenticate("register", &body).await
    }

    /// Logs in with email and password
    ///
    /// Same contract as [`SessionClient::register`], against `/login`.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        info!("Logging in");
        let body = LoginRequest { email, password };
        self.authenticate("login", &body).await
    }

    async fn authenticate<B: Serialize>(&self, path: &str, body: &B) -> Result<User, AppError> {
        let url = join_url(&self.config.rest_api.base_url, path);
        let options = RequestOptions::new().with_json(body)?;

        let response = make_json_request(&self.http_client, Method::POST, &url, &options).await?;
        let (status, value) = read_json(response).await?;

        if !value.is_object() {
            if status.is_success() {
                return Err(AppError::InvalidResponse(format!(
                    "unexpected {path} response: not a JSON object"
                )));
            }
            let message = rejection_message(status, &value);
            warn!("{} rejected ({}): {}", path, status, message);
            return Err(AppError::BackendRejected(message));
        }
        let auth: AuthResponse = serde_json::from_value(value)
            .map_err(|e| AppError::InvalidResponse(format!("unexpected {path} response: {e}")))?;

        let session = match auth.into_session(status) {
            Ok(session) => session,
            Err(e) => {
                warn!("{} rejected ({}): {}", path, status, e);
                return Err(e);
            }
        };

        self.store.save(&session.token, &session.user_json()?)?;
        info!("✓ Session established for user {}", session.user.id);
        Ok(session.user)
    }

    /// Ends the session
    ///
    /// Clears the token and user unconditionally, then navigates to the site
    /// root. A storage failure is logged; the navigation still happens.
    pub fn logout(&self) {
        info!("Logging out");
        if let Err(e) = self.store.clear() {
            error!("Failed to clear session storage: {}", e);
        }
        self.navigator.navigate(&self.config.site.url);
    }

    /// Whether a token is stored
    ///
    /// Purely local: the token is not checked against the backend.
    pub fn is_authenticated(&self) -> bool {
        match self.store.token() {
            Ok(token) => token.is_some_and(|t| !t.is_empty()),
            Err(e) => {
                warn!("Session storage unreadable, treating as logged out: {}", e);
                false
            }
        }
    }

    /// The stored user record, `None` when absent or unreadable
    ///
    /// Corrupt data is logged and treated as absent; use
    /// [`SessionClient::try_current_user`] to tell the two apart.
    pub fn current_user(&self) -> Option<User> {
        match self.try_current_user() {
            Ok(user) => user,
            Err(e) => {
                warn!("Ignoring stored user record: {}", e);
                None
            }
        }
    }

    /// The stored user record
    ///
    /// # Returns
    /// * `Ok(Some(User))` - A valid record is stored
    /// * `Ok(None)` - Nothing is stored
    /// * `Err(AppError::CorruptSession)` - The stored entry is not a valid user
    pub fn try_current_user(&self) -> Result<Option<User>, AppError> {
        let Some(raw) = self.store.user_raw()? else {
            return Ok(None);
        };
        serde_json::from_str::<Option<User>>(&raw)
            .map_err(|e| AppError::CorruptSession(e.to_string()))
    }

    /// Token and user as currently stored
    pub fn stored_session(&self) -> Option<Session> {
        let token = self.store.token().ok().flatten().filter(|t| !t.is_empty())?;
        let user = self.current_user()?;
        Some(Session::new(token, user))
    }

    /// Sends a request carrying the stored bearer token
    ///
    /// Fails with [`AppError::Unauthenticated`] before touching the network
    /// when no token is stored. Otherwise the caller's headers are sent with
    /// `Authorization: Bearer <token>` and `Content-Type: application/json`
    /// taking precedence. The response is returned as-is: a 401/403 is not
    /// intercepted, retried or turned into a logout.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `url` - Endpoint path (joined onto the base URL) or absolute URL
    /// * `options` - Extra headers, query pairs and JSON body
    pub async fn authenticated_request(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<Response, AppError> {
        let token = match self.store.token()? {
            Some(token) if !token.is_empty() => token,
            _ => {
                debug!("No stored token, refusing {} {}", method, url);
                return Err(AppError::Unauthenticated);
            }
        };

        let url = join_url(&self.config.rest_api.base_url, url);
        let headers = merge_headers(
            &options.headers,
            &[
                (AUTHORIZATION, format!("Bearer {token}")),
                (CONTENT_TYPE, JSON_CONTENT_TYPE.to_string()),
            ],
        )?;

        make_http_request(&self.http_client, method, &url, headers, &options).await
    }

    /// Gets the configuration
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Gets the underlying HTTP client
    pub fn http_client(&self) -> &Client {
        &self.http_client
    }

    /// Gets the navigator
    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Gets the session store
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }
}
