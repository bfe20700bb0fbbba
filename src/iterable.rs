//! Definition of the interface for starting a traversal from any collection of roots

use crate::{LevelOrder, TryLevelOrder};

/// Level-order traversal for everything that can be turned into an iterator over roots.
///
/// ```
/// use levelorder::LevelOrderIterable;
///
/// let levels: Vec<usize> = vec![1u32]
///     .level_order(|n: &u32| if *n < 4 { vec![2 * n, 2 * n + 1] } else { vec![] })
///     .map(|cursor| cursor.level())
///     .collect();
/// assert_eq!(levels, [0, 1, 1, 2, 2, 2, 2]);
/// ```
pub trait LevelOrderIterable: IntoIterator + Sized {
    fn level_order<F, I>(self, children: F) -> LevelOrder<Self::IntoIter, F, I>
    where
        F: FnMut(&Self::Item) -> I,
        I: IntoIterator<Item = Self::Item>,
    {
        LevelOrder::new(self, children)
    }

    fn try_level_order<F, I, E>(self, children: F) -> TryLevelOrder<Self::IntoIter, F, I, E>
    where
        F: FnMut(&Self::Item) -> Result<I, E>,
        I: IntoIterator<Item = Self::Item>,
    {
        TryLevelOrder::new(self, children)
    }
}

impl<Roots> LevelOrderIterable for Roots where Roots: IntoIterator {}

#[cfg(test)]
mod tests {

    use crate::*;
    use itertools::Itertools;
    use test_log;

    #[test_log::test]
    fn test_slice_of_references() {
        // Nodes refer to their children by index
        let children: [&[usize]; 5] = [&[2, 3], &[4], &[], &[], &[]];

        let result = [0usize, 1]
            .iter()
            .level_order(|n: &&usize| children[**n].iter())
            .map(|c| (c.level(), **c.item()))
            .collect_vec();

        assert_eq!(result, &[(0, 0), (0, 1), (1, 2), (1, 3), (1, 4)]);
    }

    #[test_log::test]
    fn test_try_level_order() {
        let result = vec![3i32]
            .try_level_order(|n: &i32| if *n < 0 { Err(*n) } else { Ok(vec![n - 2]) })
            .map_ok(|c| c.into_parts())
            .collect_vec();

        assert_eq!(
            result,
            &[
                Ok((0, 3)),
                Ok((1, 1)),
                Ok((2, -1)),
                Err(TraversalError::Children(-1))
            ]
        );
    }
}
