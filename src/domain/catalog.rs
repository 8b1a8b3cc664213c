use crate::domain::Course;

/// The full ordered list of courses held after a successful load.
///
/// Insertion order equals file line order. The catalog is populated once by
/// the loader and never mutated afterward; the shell owns it and lends it to
/// the views by shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Catalog { courses }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Iterate over courses in stored (file) order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// Linear scan for the first course whose identifier exactly equals `id`.
    ///
    /// Matching is case-sensitive with no trimming; duplicate identifiers are
    /// resolved by first occurrence.
    pub fn find_first(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}
