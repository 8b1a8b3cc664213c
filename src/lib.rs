//! course-planner: browse a comma-delimited course catalog from an
//! interactive console menu.
//!
//! The data file holds one course per line: identifier, title, then zero or
//! more prerequisite identifiers, all comma-separated. The shell loads the
//! file once per run and serves read-only list and detail views over it.

pub mod domain;
pub mod loader;
pub mod shell;
pub mod views;

use std::io;
use std::path::Path;

pub use domain::{AppError, Catalog, Course};
pub use shell::{MenuCommand, Shell};
pub use views::DetailResult;

/// Run the interactive shell over stdin/stdout against `data_file`.
///
/// Returns once the user exits (or stdin closes); load failures are reported
/// to the user inside the loop and do not end the session.
pub fn run(data_file: &Path) -> Result<(), AppError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), data_file);
    shell.run()?;
    Ok(())
}
