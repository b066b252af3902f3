/// Course catalogue, enrollment and review operations
pub mod course;
/// Payment operations
pub mod payment;
/// Platform-wide operations: contact form, newsletter, statistics
pub mod platform;
