/// Course catalogue models
pub mod course;
/// Uniform action results for UI code
pub mod result;

pub use course::{Course, CourseReview, PlatformStats};
pub use result::ActionResult;
