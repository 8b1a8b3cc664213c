//! Interactive menu loop for browsing the course catalog.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::domain::Catalog;
use crate::{loader, views};

const NOT_LOADED: &str = "Course data is not loaded. Please choose option 1 to load data.";

/// Menu commands recognized by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Load,
    List,
    Detail,
    Exit,
}

impl MenuCommand {
    /// Map a parsed menu selector to a command. Selectors match the printed
    /// menu: 1 load, 2 list, 3 detail, 9 exit.
    pub fn from_selector(selector: i64) -> Option<MenuCommand> {
        match selector {
            1 => Some(MenuCommand::Load),
            2 => Some(MenuCommand::List),
            3 => Some(MenuCommand::Detail),
            9 => Some(MenuCommand::Exit),
            _ => None,
        }
    }
}

/// The interactive shell: a two-state machine (`Start` until a successful
/// load, `Loaded` afterward) driving the loader and the views.
///
/// Generic over its input and output streams so tests can run whole sessions
/// against in-memory buffers; the binary instantiates it over locked stdio.
pub struct Shell<R, W> {
    input: R,
    output: W,
    data_file: PathBuf,
    catalog: Option<Catalog>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new<P: Into<PathBuf>>(input: R, output: W, data_file: P) -> Self {
        Shell { input, output, data_file: data_file.into(), catalog: None }
    }

    /// Whether a catalog has been loaded in this session.
    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    /// Run the menu loop until the user exits or the input stream ends.
    ///
    /// Load and lookup failures are reported to the user and never end the
    /// loop; only a write failure on the output stream is fatal.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = read_line(&mut self.input)? else {
                break;
            };
            let Ok(selector) = line.trim().parse::<i64>() else {
                writeln!(self.output, "Invalid input. Please enter a valid menu option.")?;
                continue;
            };
            match MenuCommand::from_selector(selector) {
                Some(MenuCommand::Load) => self.load()?,
                Some(MenuCommand::List) => self.list()?,
                Some(MenuCommand::Detail) => self.detail()?,
                Some(MenuCommand::Exit) => {
                    writeln!(self.output, "Goodbye.")?;
                    break;
                }
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Welcome to the Course Planner.")?;
        writeln!(self.output, "1. Load Data Structure")?;
        writeln!(self.output, "2. Print Course List")?;
        writeln!(self.output, "3. Print Course")?;
        writeln!(self.output, "9. Exit")?;
        write!(self.output, "What Would You Like To Do? ")?;
        self.output.flush()
    }

    /// Load the data file. Reload is intentionally blocked: once loaded, the
    /// catalog stays as it is for the rest of the run.
    fn load(&mut self) -> io::Result<()> {
        if self.is_loaded() {
            return writeln!(self.output, "Course data is already loaded.");
        }
        match loader::load(&self.data_file) {
            Ok(catalog) => {
                writeln!(self.output, "Course data loaded successfully.")?;
                self.catalog = Some(catalog);
            }
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    fn list(&mut self) -> io::Result<()> {
        let Some(catalog) = self.catalog.as_ref() else {
            return writeln!(self.output, "{NOT_LOADED}");
        };
        writeln!(self.output)?;
        for line in views::render_list(catalog) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn detail(&mut self) -> io::Result<()> {
        let Some(catalog) = self.catalog.as_ref() else {
            return writeln!(self.output, "{NOT_LOADED}");
        };
        write!(self.output, "Enter the course ID: ")?;
        self.output.flush()?;
        let Some(line) = read_line(&mut self.input)? else {
            return Ok(());
        };
        let id = line.split_whitespace().next().unwrap_or_default();
        writeln!(self.output)?;
        for line in views::render_detail(catalog, id).lines() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}

/// Read one input line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
