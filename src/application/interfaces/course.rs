use crate::error::AppError;
use crate::model::requests::Review;
use crate::presentation::course::{Course, CourseReview};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the course service
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Lists courses, optionally filtered (e.g. `category`, `level`)
    async fn fetch_courses(&self, filters: &[(&str, &str)]) -> Result<Vec<Course>, AppError>;

    /// Full-text search over the catalogue
    ///
    /// # Arguments
    /// * `query` - Search text, sent as `q`
    /// * `filters` - Extra query pairs
    async fn search_courses(
        &self,
        query: &str,
        filters: &[(&str, &str)],
    ) -> Result<Vec<Course>, AppError>;

    /// Enrolls the logged-in user in a course
    ///
    /// Requires a stored token; succeeds on any 2xx answer.
    async fn enroll_course(&self, course_id: &str) -> Result<Value, AppError>;

    /// Posts a review for a course as the logged-in user
    async fn submit_review(&self, course_id: &str, review: &Review) -> Result<Value, AppError>;

    /// Gets one page of reviews for a course (pages start at 1)
    async fn fetch_reviews(&self, course_id: &str, page: u32)
    -> Result<Vec<CourseReview>, AppError>;
}
