use crate::{Error, Result};

/// A deterministic source of 32-bit words, with the derived draws built on
/// top of [`Generator::next`].
pub trait Generator {
    /// Advances the generator and returns the new value.
    fn next(&mut self) -> i32;

    /// Draws a value in `min..max`.
    ///
    /// The draw is reduced with a Euclidean remainder, so a negative
    /// [`Generator::next`] still lands in range. For non-negative draws this
    /// is the plain `next() % (max - min) + min`.
    fn try_next_range(&mut self, min: i32, max: i32) -> Result<i32> {
        if min >= max {
            return Err(Error::EmptyRange { min, max });
        }
        let span = i64::from(max) - i64::from(min);
        let v = i64::from(self.next()).rem_euclid(span) + i64::from(min);
        Ok(v as i32)
    }

    /// Like [`Generator::try_next_range`], but panics when `min >= max`.
    fn next_range(&mut self, min: i32, max: i32) -> i32 {
        match self.try_next_range(min, max) {
            Ok(v) => v,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns `true` when the next value is even.
    fn next_bool(&mut self) -> bool {
        self.next() % 2 == 0
    }

    /// Shuffles `items` in place with a Fisher–Yates walk from the last
    /// index down to 1.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        assert!(
            items.len() <= i32::MAX as usize,
            "cannot shuffle {} items",
            items.len(),
        );
        for i in (1..items.len()).rev() {
            let j = self.next_range(0, i as i32 + 1) as usize;
            items.swap(i, j);
        }
    }

    fn int_array(&mut self, len: usize, min: i32, max: i32) -> Vec<i32> {
        (0..len).map(|_| self.next_range(min, max)).collect()
    }

    fn bool_array(&mut self, len: usize) -> Vec<bool> {
        (0..len).map(|_| self.next_bool()).collect()
    }
}
