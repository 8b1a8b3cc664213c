use std::io;

use thiserror::Error;

/// Library-wide error type for course-planner operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// The course data file could not be opened.
    #[error("The course data file '{path}' is unavailable.")]
    FileUnavailable { path: String },

    /// A line in the data file ran out of delimiters before the title field.
    #[error("Invalid data format in the course data file (line {line}).")]
    MalformedRecord { line: usize },

    /// Underlying I/O failure while reading an already-open file or stream.
    #[error(transparent)]
    Io(#[from] io::Error),
}
