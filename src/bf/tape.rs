// Copyright (C) 2022 Thalia Archibald
//
// ubf is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any
// later version. You should have received a copy of the GNU Lesser General
// Public License along with ubf. If not, see http://www.gnu.org/licenses/.

/// Default number of cells.
pub const TAPE_LEN: usize = 30_000;

/// A circular tape of byte cells. Both the pointer and the cells wrap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tape {
    cells: Box<[u8]>,
    ptr: usize,
}

impl Tape {
    /// Creates a zeroed tape.
    ///
    /// # Panics
    ///
    /// Panics when `len` is 0.
    #[must_use]
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "tape must have at least one cell");
        Tape {
            cells: vec![0; len].into_boxed_slice(),
            ptr: 0,
        }
    }

    #[inline]
    pub fn right(&mut self) {
        self.ptr = if self.ptr + 1 == self.cells.len() { 0 } else { self.ptr + 1 };
    }

    #[inline]
    pub fn left(&mut self) {
        self.ptr = if self.ptr == 0 { self.cells.len() - 1 } else { self.ptr - 1 };
    }

    #[inline]
    pub fn inc(&mut self) {
        let cell = &mut self.cells[self.ptr];
        *cell = cell.wrapping_add(1);
    }

    #[inline]
    pub fn dec(&mut self) {
        let cell = &mut self.cells[self.ptr];
        *cell = cell.wrapping_sub(1);
    }

    #[inline]
    #[must_use]
    pub fn get(&self) -> u8 {
        self.cells[self.ptr]
    }

    #[inline]
    pub fn set(&mut self, value: u8) {
        self.cells[self.ptr] = value;
    }

    #[inline]
    #[must_use]
    pub const fn ptr(&self) -> usize {
        self.ptr
    }

    /// Moves the pointer, wrapping `ptr` into range.
    #[cfg(test)]
    pub(crate) fn seek(&mut self, ptr: usize) {
        self.ptr = ptr % self.cells.len();
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for Tape {
    #[inline]
    fn default() -> Self {
        Tape::new(TAPE_LEN)
    }
}
