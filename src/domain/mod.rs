//! Data model and error types for the course planner.

mod catalog;
mod course;
mod error;

pub use catalog::Catalog;
pub use course::Course;
pub use error::AppError;
