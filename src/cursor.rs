//! The value emitted for every visited element of a level-order traversal.

use core::fmt;

/// An element visited during a level-order traversal together with its level,
/// i.e., the number of child edges between the element and the root it descends from.
/// Roots are at level 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelOrderCursor<T> {
    level: usize,
    item: T,
}

impl<T> LevelOrderCursor<T> {
    pub fn new(level: usize, item: T) -> Self {
        LevelOrderCursor { level, item }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn into_item(self) -> T {
        self.item
    }

    /// Splits the cursor into `(level, item)`
    pub fn into_parts(self) -> (usize, T) {
        (self.level, self.item)
    }
}

impl<T> From<LevelOrderCursor<T>> for (usize, T) {
    fn from(cursor: LevelOrderCursor<T>) -> Self {
        cursor.into_parts()
    }
}

impl<T> fmt::Display for LevelOrderCursor<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.item)
    }
}
