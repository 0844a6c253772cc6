// Copyright (C) 2022 Thalia Archibald
//
// ubf is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any
// later version. You should have received a copy of the GNU Lesser General
// Public License along with ubf. If not, see http://www.gnu.org/licenses/.

/// A closed enumeration whose variants have a fixed order, indexed from 0 to
/// `COUNT - 1`.
///
/// The order is treated as a cycle by [`rotate`](VariantIndex::rotate), so
/// the successor of the last variant is the first.
pub trait VariantIndex {
    const COUNT: u32;

    /// Returns the variant at `index`. Panics when `index >= COUNT`.
    #[must_use]
    fn variant(index: u32) -> Self;

    #[must_use]
    fn index(&self) -> u32;

    /// Moves `n` places forward in the cycle, or backward for negative `n`.
    #[must_use]
    #[inline]
    fn rotate(&self, n: i64) -> Self
    where
        Self: Sized,
    {
        let count = i64::from(Self::COUNT);
        let index = (i64::from(self.index()) + n.rem_euclid(count)) % count;
        Self::variant(index as u32)
    }

    #[must_use]
    #[inline]
    fn succ(&self) -> Self
    where
        Self: Sized,
    {
        self.rotate(1)
    }

    #[must_use]
    #[inline]
    fn pred(&self) -> Self
    where
        Self: Sized,
    {
        self.rotate(-1)
    }
}
