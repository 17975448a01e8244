use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::dpll_assert_simple;

/// A stack of values partitioned into levels. Every case split of the search opens a new level;
/// when the split fails, the values pushed since then are handed back (most recent first) so the
/// caller can undo them.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    /// At index i is the position where the (i + 1)-th level starts on the trail
    level_starts: Vec<usize>,
    trail: Vec<T>,
}

// Implemented by hand to avoid imposing Default on T.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            level_starts: Default::default(),
            trail: Default::default(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn new_level(&mut self) {
        self.level_starts.push(self.trail.len());
    }

    pub(crate) fn get_level(&self) -> usize {
        self.level_starts.len()
    }

    /// Closes the most recent level and returns the values pushed on it in reverse order.
    pub(crate) fn undo_level(&mut self) -> Rev<Drain<'_, T>> {
        dpll_assert_simple!(self.get_level() > 0, "cannot undo the root level");

        let start = self.level_starts.pop().unwrap_or(0);
        self.trail.drain(start..).rev()
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.trail.push(elem)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_pushed_at_the_root_survive_undo() {
        let mut trail = Trail::default();
        trail.push('a');

        trail.new_level();
        trail.push('b');
        let _ = trail.undo_level();

        assert_eq!(&['a'], trail.deref());
        assert_eq!(0, trail.get_level());
    }

    #[test]
    fn undo_only_affects_the_most_recent_level() {
        let mut trail = Trail::default();
        trail.new_level();
        trail.push(1);
        trail.new_level();
        trail.push(2);
        trail.push(3);

        let undone = trail.undo_level().collect::<Vec<_>>();

        assert_eq!(vec![3, 2], undone);
        assert_eq!(&[1], trail.deref());
        assert_eq!(1, trail.get_level());
    }

    #[test]
    fn empty_levels_undo_nothing() {
        let mut trail: Trail<u32> = Trail::default();
        trail.new_level();
        trail.new_level();

        assert_eq!(0, trail.undo_level().count());
        assert_eq!(1, trail.get_level());
    }
}
