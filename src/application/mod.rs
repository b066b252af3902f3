/// Session client: login, registration, logout and authenticated requests
pub mod auth;
/// API client built on the session client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces implemented by the API client
pub mod interfaces;
/// Navigation hooks for logout and payment redirects
pub mod navigator;
