//! Parsing of the comma-delimited course data file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::{AppError, Catalog, Course};

/// Read and parse the course data file at `path`.
///
/// Returns a fresh catalog on success. The file handle is scoped to this
/// call and released on every exit path. Any malformed line aborts the whole
/// load; no partial catalog is ever returned.
pub fn load(path: &Path) -> Result<Catalog, AppError> {
    let file = File::open(path)
        .map_err(|_| AppError::FileUnavailable { path: path.display().to_string() })?;
    parse(BufReader::new(file))
}

/// Parse course records from any line-oriented reader.
///
/// A final line without a trailing newline still counts; empty lines are
/// skipped.
pub fn parse<R: BufRead>(reader: R) -> Result<Catalog, AppError> {
    let mut courses = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        courses.push(parse_record(&line, index + 1)?);
    }
    Ok(Catalog::new(courses))
}

/// Split one line into identifier, title, and prerequisites.
///
/// The split is naive: no quoting, no escaping, no trimming. Empty segments
/// produced by consecutive commas become literal empty-string prerequisites.
/// A line with no comma at all lacks the title field and fails the load.
fn parse_record(line: &str, line_number: usize) -> Result<Course, AppError> {
    let mut fields = line.split(',');
    // split always yields at least one segment
    let id = fields.next().unwrap_or_default();
    let title = fields.next().ok_or(AppError::MalformedRecord { line: line_number })?;
    let prerequisites = fields.map(str::to_string).collect();
    Ok(Course::new(id, title, prerequisites))
}
