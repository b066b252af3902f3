/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! API client for the education platform
//!
//! Wraps a [`SessionClient`] and exposes the platform endpoints:
//! - Protected calls (enrollment, payments, reviews) via the bearer helper
//! - Public catalogue calls (courses, search, reviews, stats)
//! - Contact form and newsletter submissions
//!
//! # Example
//! ```ignore
//! use edu_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! client.session().login("a@b.com", "pw").await?;
//! client.enroll_course("rust-101").await?;
//! ```

use crate::application::auth::{SessionClient, build_http_client};
use crate::application::config::Config;
use crate::application::interfaces::course::CourseService;
use crate::application::interfaces::payment::PaymentService;
use crate::application::interfaces::platform::PlatformService;
use crate::application::navigator::{LogNavigator, Navigator};
use crate::error::AppError;
use crate::model::http::{
    RequestOptions, expect_success, join_url, make_json_request, read_json, rejection_message,
};
use crate::model::requests::{ContactForm, NewsletterRequest, PaymentRequest, Review};
use crate::model::responses::{NewsletterResponse, PaymentResponse};
use crate::presentation::course::{Course, CourseReview, PlatformStats};
use crate::storage::{FileStore, SessionStore};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Client for the platform API with session handling
pub struct Client {
    session: Arc<SessionClient>,
    http_client: HttpClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a client with the durable file store from `config.storage`
    ///
    /// Navigation requests are logged.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let store = Arc::new(FileStore::new(&config.storage.session_file));
        Self::with_parts(config, store, Arc::new(LogNavigator))
    }

    /// Creates a client with an explicit store and navigator
    ///
    /// # Arguments
    /// * `config` - Configuration
    /// * `store` - Session storage shared with the inner [`SessionClient`]
    /// * `navigator` - Receives logout and checkout redirects
    pub fn with_parts(
        config: Config,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = build_http_client(&config)?;
        let session = Arc::new(SessionClient::with_http_client(
            config.clone(),
            http_client.clone(),
            store,
            navigator,
        ));
        Ok(Self {
            session,
            http_client,
            config,
        })
    }

    /// Gets the session client (login, register, logout, current user)
    pub fn session(&self) -> &SessionClient {
        &self.session
    }

    /// Gets a shared handle to the session client
    pub fn session_handle(&self) -> Arc<SessionClient> {
        self.session.clone()
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Authenticated POST, decoded as JSON
    async fn post_authenticated(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value), AppError> {
        let options = RequestOptions {
            body,
            ..RequestOptions::default()
        };
        let response = self
            .session
            .authenticated_request(Method::POST, path, options)
            .await?;
        read_json(response).await
    }

    /// Unauthenticated request, decoded as JSON
    async fn send_public(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<(StatusCode, Value), AppError> {
        let url = join_url(&self.config.rest_api.base_url, path);
        let response = make_json_request(&self.http_client, method, &url, &options).await?;
        read_json(response).await
    }

    /// Public GET that must succeed and decode into `T`
    async fn get_public<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let mut options = RequestOptions::new();
        for (key, value) in query {
            options = options.with_query(*key, *value);
        }
        let (status, body) = self.send_public(Method::GET, path, options).await?;
        decode(path, expect_success(status, body)?)
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: Value) -> Result<T, AppError> {
    serde_json::from_value(body)
        .map_err(|e| AppError::InvalidResponse(format!("unexpected {path} response: {e}")))
}

#[async_trait]
impl CourseService for Client {
    async fn fetch_courses(&self, filters: &[(&str, &str)]) -> Result<Vec<Course>, AppError> {
        debug!("Fetching courses with {} filters", filters.len());
        let courses: Vec<Course> = self.get_public("courses", filters).await?;
        debug!("Courses obtained: {}", courses.len());
        Ok(courses)
    }

    async fn search_courses(
        &self,
        query: &str,
        filters: &[(&str, &str)],
    ) -> Result<Vec<Course>, AppError> {
        info!("Searching courses: {}", query);
        let mut params = Vec::with_capacity(filters.len() + 1);
        params.push(("q", query));
        params.extend_from_slice(filters);
        let courses: Vec<Course> = self.get_public("courses/search", &params).await?;
        debug!("Search returned {} courses", courses.len());
        Ok(courses)
    }

    async fn enroll_course(&self, course_id: &str) -> Result<Value, AppError> {
        info!("Enrolling in course {}", course_id);
        let path = format!("courses/{course_id}/enroll");
        let (status, body) = self.post_authenticated(&path, None).await?;
        expect_success(status, body)
    }

    async fn submit_review(&self, course_id: &str, review: &Review) -> Result<Value, AppError> {
        info!("Submitting review for course {}", course_id);
        let path = format!("courses/{course_id}/reviews");
        let body = serde_json::to_value(review)?;
        let (status, body) = self.post_authenticated(&path, Some(body)).await?;
        expect_success(status, body)
    }

    async fn fetch_reviews(
        &self,
        course_id: &str,
        page: u32,
    ) -> Result<Vec<CourseReview>, AppError> {
        let path = format!("courses/{course_id}/reviews");
        let page = page.max(1).to_string();
        let reviews: Vec<CourseReview> = self.get_public(&path, &[("page", page.as_str())]).await?;
        debug!("Reviews obtained for {}: {}", course_id, reviews.len());
        Ok(reviews)
    }
}

#[async_trait]
impl PaymentService for Client {
    async fn create_payment(&self, plan_id: &str) -> Result<PaymentResponse, AppError> {
        info!("Creating payment for plan {}", plan_id);
        let body = serde_json::to_value(PaymentRequest { plan_id })?;
        let (status, body) = self.post_authenticated("payments/create", Some(body)).await?;
        let body = expect_success(status, body)?;

        let has_url = body
            .get("paymentUrl")
            .and_then(Value::as_str)
            .is_some_and(|url| !url.is_empty());
        if !has_url {
            warn!("Payment response for plan {} has no paymentUrl", plan_id);
            let message = match body.get("message") {
                Some(_) => rejection_message(status, &body),
                None => "payment response missing paymentUrl".to_string(),
            };
            return Err(AppError::BackendRejected(message));
        }

        let payment: PaymentResponse = decode("payments/create", body)?;
        self.session.navigator().navigate(&payment.payment_url);
        Ok(payment)
    }
}

#[async_trait]
impl PlatformService for Client {
    async fn submit_contact_form(&self, form: &ContactForm) -> Result<Value, AppError> {
        info!("Submitting contact form");
        let options = RequestOptions::new().with_json(form)?;
        let (status, body) = self.send_public(Method::POST, "contact", options).await?;
        if !status.is_success() {
            warn!("Contact form rejected with status {}", status);
            return Err(AppError::BackendRejected(format!(
                "HTTP error! status: {}",
                status.as_u16()
            )));
        }
        Ok(body)
    }

    async fn subscribe_newsletter(&self, email: &str) -> Result<NewsletterResponse, AppError> {
        info!("Subscribing to newsletter");
        let options = RequestOptions::new().with_json(&NewsletterRequest { email })?;
        let (status, body) = self
            .send_public(Method::POST, "newsletter/subscribe", options)
            .await?;
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(NewsletterResponse {
            success: status.is_success(),
            message,
        })
    }

    async fn fetch_platform_stats(&self) -> Result<PlatformStats, AppError> {
        debug!("Fetching platform stats");
        self.get_public("stats", &[]).await
    }
}
