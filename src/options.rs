//! Runtime configuration of a traversal.

/// Options that bound or tune a level-order traversal. The default traverses
/// without a level limit and lets the frontier queue grow on demand.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Deepest level that is produced. Children of elements at this level are not requested.
    pub max_level: Option<usize>,
    /// Initial capacity of the frontier queue
    pub capacity: usize,
}

impl TraversalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = Some(max_level);
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether the children of an element at `level` are to be expanded
    pub(crate) fn expands(&self, level: usize) -> bool {
        match self.max_level {
            Some(max_level) => level < max_level,
            None => true,
        }
    }
}
