// Copyright (C) 2022 Andrew Archibald
//
// ubf is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any
// later version. You should have received a copy of the GNU Lesser General
// Public License along with ubf. If not, see http://www.gnu.org/licenses/.

//! Ultimate Brainfuck syntax.
//!
//! An Ultimate Brainfuck program is a Brainfuck program where the instruction
//! at position `i` (from 0) is shifted `i` places forward through the cycle
//! `> < + - . , [ ]`, wrapping from `]` to `>`. Decoding shifts each one back
//! by the same amount.

use std::fmt::{self, Display, Formatter};

use crate::bf::Inst;
use crate::syntax::VariantIndex;

const CYCLE: i64 = Inst::COUNT as i64;

/// Encodes Brainfuck to Ultimate Brainfuck.
#[must_use]
pub fn encode(insts: &[Inst]) -> Vec<Inst> {
    shift_all(insts, 1)
}

/// Decodes Ultimate Brainfuck to Brainfuck.
#[must_use]
pub fn decode(insts: &[Inst]) -> Vec<Inst> {
    shift_all(insts, -1)
}

fn shift_all(insts: &[Inst], dir: i64) -> Vec<Inst> {
    let mut out = Vec::with_capacity(insts.len());
    out.extend(
        insts
            .iter()
            .zip(0i64..)
            .map(|(inst, pos)| inst.rotate(dir * (pos % CYCLE))),
    );
    out
}

/// A char of unfiltered text as seen by the cipher: either an instruction or
/// the blank sentinel that every other char collapses to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Inst(Inst),
    /// Has no place in the cycle, so shifting it yields itself.
    Blank,
}

impl Symbol {
    #[inline]
    #[must_use]
    pub fn rotate(self, n: i64) -> Self {
        match self {
            Symbol::Inst(inst) => Symbol::Inst(inst.rotate(n)),
            Symbol::Blank => Symbol::Blank,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Symbol::Inst(inst) => inst.as_char(),
            Symbol::Blank => ' ',
        }
    }
}

impl From<char> for Symbol {
    #[inline]
    fn from(ch: char) -> Self {
        Inst::from_char(ch).map_or(Symbol::Blank, Symbol::Inst)
    }
}

impl From<Inst> for Symbol {
    #[inline]
    fn from(inst: Inst) -> Self {
        Symbol::Inst(inst)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Encodes unfiltered text char by char. Chars outside the instruction
/// alphabet become spaces but still take up a position.
#[must_use]
pub fn encode_str(src: &str) -> String {
    shift_str(src, 1)
}

/// Decodes unfiltered text char by char. See [`encode_str`].
#[must_use]
pub fn decode_str(src: &str) -> String {
    shift_str(src, -1)
}

fn shift_str(src: &str, dir: i64) -> String {
    let mut out = String::with_capacity(src.len());
    for (ch, pos) in src.chars().zip(0i64..) {
        out.push(Symbol::from(ch).rotate(dir * (pos % CYCLE)).as_char());
    }
    out
}
