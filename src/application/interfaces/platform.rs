use crate::error::AppError;
use crate::model::requests::ContactForm;
use crate::model::responses::NewsletterResponse;
use crate::presentation::course::PlatformStats;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for platform-wide operations
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Sends the landing-page contact form
    async fn submit_contact_form(&self, form: &ContactForm) -> Result<Value, AppError>;

    /// Subscribes an email address to the newsletter
    async fn subscribe_newsletter(&self, email: &str) -> Result<NewsletterResponse, AppError>;

    /// Gets the headline counters (students, courses, satisfaction)
    async fn fetch_platform_stats(&self) -> Result<PlatformStats, AppError>;
}
