/// One parsed record from the course data file.
///
/// Prerequisites keep their source order, including duplicates and the
/// empty-string segments produced by consecutive delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Short identifier, e.g. "CS101".
    pub id: String,
    /// Human-readable course title.
    pub title: String,
    /// Identifiers of prerequisite courses, possibly empty.
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new<I, T>(id: I, title: T, prerequisites: Vec<String>) -> Self
    where
        I: Into<String>,
        T: Into<String>,
    {
        Course { id: id.into(), title: title.into(), prerequisites }
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}
