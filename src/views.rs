//! Read-only rendering of the course catalog.
//!
//! Both views are pure: they take the catalog by shared reference and
//! produce display lines without touching the terminal, so the shell and
//! the tests share one code path.

use crate::domain::{Catalog, Course};

/// Render the full course list in stored order, one line per course.
///
/// Always starts with a header; an empty catalog renders the header alone.
pub fn render_list(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::with_capacity(catalog.len() + 1);
    lines.push("List of Courses:".to_string());
    for course in catalog {
        lines.push(format!("{} {}", course.id, course.title));
    }
    lines
}

/// Look up one course by identifier and render its details.
///
/// The first exact match wins; a miss is a normal negative result, not an
/// error.
pub fn render_detail<'a>(catalog: &'a Catalog, id: &str) -> DetailResult<'a> {
    match catalog.find_first(id) {
        Some(course) => DetailResult::Found(course),
        None => DetailResult::NotFound { id: id.to_string() },
    }
}

/// Outcome of a detail lookup.
#[derive(Debug, PartialEq, Eq)]
pub enum DetailResult<'a> {
    Found(&'a Course),
    NotFound { id: String },
}

impl DetailResult<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, DetailResult::Found(_))
    }

    /// Display lines for this result.
    pub fn lines(&self) -> Vec<String> {
        match self {
            DetailResult::Found(course) => {
                let prerequisites = if course.has_prerequisites() {
                    course.prerequisites.join(" ")
                } else {
                    "None".to_string()
                };
                vec![
                    "Course Details:".to_string(),
                    format!("ID: {}", course.id),
                    format!("Title: {}", course.title),
                    format!("Prerequisites: {prerequisites}"),
                ]
            }
            DetailResult::NotFound { id } => vec![format!("Course {id} not found.")],
        }
    }
}
