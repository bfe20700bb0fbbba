//! Breadth-first (level-order) traversal of a forest.
//!
//! The forest is never materialized: it is given by a sequence of roots and an accessor
//! that maps an element to the sequence of its children. The traversal keeps a FIFO queue of
//! *frontier entries*, each pairing a level with a partially consumed sequence (the roots,
//! or the children of one element). The front entry is drained completely before the next one
//! is touched, and every element pulled from it queues its own children one level deeper.
//! The level travels with the entry, so any number of roots interleaves correctly.
//!
//! Sequences held by the queue are owned by the traversal. They are dropped as soon as they
//! are exhausted, and all remaining ones are dropped with the traversal (or when a fallible
//! accessor fails), whichever happens first.

use crate::{LevelOrderCursor, TraversalError, TraversalOptions};
use itertools::Either;
use std::{
    collections::VecDeque,
    convert::Infallible,
    iter::{FusedIterator, Peekable},
};
use tracing::{debug, trace};
use tracing_attributes::instrument;

/// A level paired with a sequence whose elements are reported at that level
struct FrontierEntry<R, C>
where
    C: Iterator,
{
    level: usize,
    sequence: Either<R, Peekable<C>>,
}

/// The queue shared by the infallible and the fallible traversal
struct Frontier<R, C>
where
    R: Iterator,
    C: Iterator<Item = R::Item>,
{
    queue: VecDeque<FrontierEntry<R, C>>,
    options: TraversalOptions,
}

impl<R, C> Frontier<R, C>
where
    R: Iterator,
    C: Iterator<Item = R::Item>,
{
    fn new(roots: Option<R>, options: TraversalOptions) -> Self {
        let mut queue = VecDeque::with_capacity(options.capacity);
        if let Some(roots) = roots {
            queue.push_back(FrontierEntry {
                level: 0,
                sequence: Either::Left(roots),
            });
        }
        Frontier { queue, options }
    }

    /// Pulls the next element in level order. Exhausted entries are dropped on the way.
    fn pull(&mut self) -> Option<(usize, R::Item)> {
        loop {
            let entry = self.queue.front_mut()?;
            if let Some(item) = entry.sequence.next() {
                return Some((entry.level, item));
            }
            self.queue.pop_front();
        }
    }

    /// Queues the children of an element at `level` (one deeper than the element).
    /// Empty sequences are dropped right away.
    fn enqueue(&mut self, level: usize, children: C) {
        let mut children = children.peekable();
        if children.peek().is_none() {
            return;
        }
        trace!(level, pending = self.queue.len() + 1, "Queued frontier entry");
        self.queue.push_back(FrontierEntry {
            level,
            sequence: Either::Right(children),
        });
    }

    fn release(&mut self) {
        if !self.queue.is_empty() {
            trace!(released = self.queue.len(), "Releasing frontier entries");
            self.queue.clear();
        }
    }
}

impl<R, C> Drop for Frontier<R, C>
where
    R: Iterator,
    C: Iterator<Item = R::Item>,
{
    fn drop(&mut self) {
        self.release();
    }
}

/// Lazy level-order traversal with an infallible children accessor.
///
/// Yields a [LevelOrderCursor] per visited element: all roots (level 0) first, then their
/// children (level 1) in the order of their parents, and so on. The accessor is called once
/// per visited element, right before the element is yielded. Cyclic structures yield forever
/// unless bounded with [TraversalOptions::max_level].
///
/// The element is moved into its cursor, so its children are requested during the same call
/// to `next`. Abandoning the traversal right after an element has still paid for that
/// element's children (and their first element, which is peeked to skip empty sequences).
/// Panics of the accessor or of a child sequence unwind through `next`, dropping every queued
/// sequence with the traversal.
///
/// ```
/// use levelorder::LevelOrder;
///
/// let roots = ["a", "b"];
/// let children = |node: &&str| match *node {
///     "a" => vec!["c", "d"],
///     "b" => vec!["e"],
///     _ => vec![],
/// };
/// let visited: Vec<(usize, &str)> = LevelOrder::new(roots, children).map(Into::into).collect();
/// assert_eq!(visited, [(0, "a"), (0, "b"), (1, "c"), (1, "d"), (1, "e")]);
/// ```
pub struct LevelOrder<R, F, I>
where
    R: Iterator,
    I: IntoIterator<Item = R::Item>,
{
    frontier: Frontier<R, I::IntoIter>,
    children: F,
}

impl<R, F, I> LevelOrder<R, F, I>
where
    R: Iterator,
    F: FnMut(&R::Item) -> I,
    I: IntoIterator<Item = R::Item>,
{
    pub fn new<Roots>(roots: Roots, children: F) -> Self
    where
        Roots: IntoIterator<IntoIter = R>,
    {
        Self::with_options(roots, children, TraversalOptions::default())
    }

    #[instrument(level = "trace", skip_all, fields(max_level = ?options.max_level))]
    pub fn with_options<Roots>(roots: Roots, children: F, options: TraversalOptions) -> Self
    where
        Roots: IntoIterator<IntoIter = R>,
    {
        LevelOrder {
            frontier: Frontier::new(Some(roots.into_iter()), options),
            children,
        }
    }

    /// Constructor for optional arguments. Absent roots yield an empty traversal, an absent
    /// accessor is rejected with [TraversalError::InvalidArgument].
    #[instrument(level = "trace", skip_all)]
    pub fn from_parts<Roots>(
        roots: Option<Roots>,
        children: Option<F>,
        options: TraversalOptions,
    ) -> Result<Self, TraversalError<Infallible>>
    where
        Roots: IntoIterator<IntoIter = R>,
    {
        let children = children.ok_or_else(|| {
            debug!("Rejecting traversal without children accessor");
            TraversalError::InvalidArgument("children")
        })?;
        Ok(LevelOrder {
            frontier: Frontier::new(roots.map(IntoIterator::into_iter), options),
            children,
        })
    }

    /// Number of frontier entries currently held
    pub fn pending(&self) -> usize {
        self.frontier.queue.len()
    }

    pub fn options(&self) -> &TraversalOptions {
        &self.frontier.options
    }
}

impl<R, F, I> Iterator for LevelOrder<R, F, I>
where
    R: Iterator,
    F: FnMut(&R::Item) -> I,
    I: IntoIterator<Item = R::Item>,
{
    type Item = LevelOrderCursor<R::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let (level, item) = self.frontier.pull()?;
        if self.frontier.options.expands(level) {
            let children = (self.children)(&item).into_iter();
            self.frontier.enqueue(level + 1, children);
        }
        Some(LevelOrderCursor::new(level, item))
    }
}

impl<R, F, I> FusedIterator for LevelOrder<R, F, I>
where
    R: Iterator,
    F: FnMut(&R::Item) -> I,
    I: IntoIterator<Item = R::Item>,
{
}

/// Lazy level-order traversal with a fallible children accessor.
///
/// Behaves like [LevelOrder] as long as the accessor succeeds. When it fails for an element,
/// that element's cursor is still yielded, every queued sequence is released, and the next
/// call yields the failure wrapped in [TraversalError::Children]. The traversal ends afterwards.
pub struct TryLevelOrder<R, F, I, E>
where
    R: Iterator,
    I: IntoIterator<Item = R::Item>,
{
    frontier: Frontier<R, I::IntoIter>,
    children: F,
    failure: Option<E>,
}

impl<R, F, I, E> TryLevelOrder<R, F, I, E>
where
    R: Iterator,
    F: FnMut(&R::Item) -> Result<I, E>,
    I: IntoIterator<Item = R::Item>,
{
    pub fn new<Roots>(roots: Roots, children: F) -> Self
    where
        Roots: IntoIterator<IntoIter = R>,
    {
        Self::with_options(roots, children, TraversalOptions::default())
    }

    #[instrument(level = "trace", skip_all, fields(max_level = ?options.max_level))]
    pub fn with_options<Roots>(roots: Roots, children: F, options: TraversalOptions) -> Self
    where
        Roots: IntoIterator<IntoIter = R>,
    {
        TryLevelOrder {
            frontier: Frontier::new(Some(roots.into_iter()), options),
            children,
            failure: None,
        }
    }

    /// See [LevelOrder::from_parts]
    #[instrument(level = "trace", skip_all)]
    pub fn from_parts<Roots>(
        roots: Option<Roots>,
        children: Option<F>,
        options: TraversalOptions,
    ) -> Result<Self, TraversalError<E>>
    where
        Roots: IntoIterator<IntoIter = R>,
    {
        let children = children.ok_or_else(|| {
            debug!("Rejecting traversal without children accessor");
            TraversalError::InvalidArgument("children")
        })?;
        Ok(TryLevelOrder {
            frontier: Frontier::new(roots.map(IntoIterator::into_iter), options),
            children,
            failure: None,
        })
    }

    /// Number of frontier entries currently held
    pub fn pending(&self) -> usize {
        self.frontier.queue.len()
    }

    pub fn options(&self) -> &TraversalOptions {
        &self.frontier.options
    }
}

impl<R, F, I, E> Iterator for TryLevelOrder<R, F, I, E>
where
    R: Iterator,
    F: FnMut(&R::Item) -> Result<I, E>,
    I: IntoIterator<Item = R::Item>,
{
    type Item = Result<LevelOrderCursor<R::Item>, TraversalError<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.failure.take() {
            return Some(Err(TraversalError::Children(err)));
        }
        let (level, item) = self.frontier.pull()?;
        if self.frontier.options.expands(level) {
            match (self.children)(&item) {
                Ok(children) => self.frontier.enqueue(level + 1, children.into_iter()),
                Err(err) => {
                    debug!(level, "Children accessor failed, aborting traversal");
                    self.frontier.release();
                    self.failure = Some(err);
                }
            }
        }
        Some(Ok(LevelOrderCursor::new(level, item)))
    }
}

impl<R, F, I, E> FusedIterator for TryLevelOrder<R, F, I, E>
where
    R: Iterator,
    F: FnMut(&R::Item) -> Result<I, E>,
    I: IntoIterator<Item = R::Item>,
{
}
