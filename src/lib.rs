//! ## About
//!
//! This crate provides a lazy, breadth-first (level-order) traversal over forests, i.e., collections of
//! zero or more independent trees. The crate does not define a tree structure: the forest is given by a
//! sequence of roots and an accessor that returns the children of an element. This way, the same traversal
//! can walk a database schema, a file system or a UI model without copying it.
//!
//! See [level_order] (or [LevelOrderIterable]) to get started.
//!
//! ```
//! use levelorder::level_order;
//!
//! // Two roots, "a" and "b", with the children "c", "d" and "e"
//! let children = |node: &&str| match *node {
//!     "a" => vec!["c", "d"],
//!     "b" => vec!["e"],
//!     _ => vec![],
//! };
//! for cursor in level_order(["a", "b"], children) {
//!     println!("{}{}", "  ".repeat(cursor.level()), cursor.item());
//! }
//! ```
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             use substantives (i.e., omit a `get_` prefix) much like the standard library.

pub mod breadth;
pub mod cursor;
pub mod errors;
pub mod iterable;
pub mod options;

pub use breadth::{LevelOrder, TryLevelOrder};
pub use cursor::LevelOrderCursor;
pub use errors::TraversalError;
pub use iterable::LevelOrderIterable;
pub use options::TraversalOptions;

/// Traverses the forest spanned by `roots` and the `children` accessor in level order.
/// Shortcut for [LevelOrder::new].
pub fn level_order<Roots, F, I>(roots: Roots, children: F) -> LevelOrder<Roots::IntoIter, F, I>
where
    Roots: IntoIterator,
    F: FnMut(&Roots::Item) -> I,
    I: IntoIterator<Item = Roots::Item>,
{
    LevelOrder::new(roots, children)
}

/// Like [level_order] but with an accessor that may fail. Shortcut for [TryLevelOrder::new].
pub fn try_level_order<Roots, F, I, E>(roots: Roots, children: F) -> TryLevelOrder<Roots::IntoIter, F, I, E>
where
    Roots: IntoIterator,
    F: FnMut(&Roots::Item) -> Result<I, E>,
    I: IntoIterator<Item = Roots::Item>,
{
    TryLevelOrder::new(roots, children)
}
