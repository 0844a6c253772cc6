// Copyright (C) 2022 Andrew Archibald
//
// ubf is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any
// later version. You should have received a copy of the GNU Lesser General
// Public License along with ubf. If not, see http://www.gnu.org/licenses/.

//! Brainfuck language and its position-shifted Ultimate Brainfuck encoding.
//!
//! # Resources
//!
//! - [Esolang wiki](https://esolangs.org/wiki/Brainfuck)

use strum::{Display, IntoStaticStr};

pub use io::Input;
pub use lex::{lex, lex_bytes, Lexer};
pub use tape::Tape;
pub use vm::{Vm, VmError};

pub mod io;
pub mod lex;
pub mod tape;
pub mod ubf;
pub mod vm;


use crate::syntax::VariantIndex;

/// Brainfuck instructions, declared in the cycle order that Ultimate
/// Brainfuck shifts through.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Display, IntoStaticStr)]
pub enum Inst {
    /// `>`
    #[strum(serialize = ">")]
    Right,
    /// `<`
    #[strum(serialize = "<")]
    Left,
    /// `+`
    #[strum(serialize = "+")]
    Inc,
    /// `-`
    #[strum(serialize = "-")]
    Dec,
    /// `.`
    #[strum(serialize = ".")]
    Output,
    /// `,`
    #[strum(serialize = ",")]
    Input,
    /// `[`
    #[strum(serialize = "[")]
    Head,
    /// `]`
    #[strum(serialize = "]")]
    Tail,
}

const INSTS: [Inst; 8] = [
    Inst::Right,
    Inst::Left,
    Inst::Inc,
    Inst::Dec,
    Inst::Output,
    Inst::Input,
    Inst::Head,
    Inst::Tail,
];

impl Inst {
    #[inline]
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '>' => Some(Inst::Right),
            '<' => Some(Inst::Left),
            '+' => Some(Inst::Inc),
            '-' => Some(Inst::Dec),
            '.' => Some(Inst::Output),
            ',' => Some(Inst::Input),
            '[' => Some(Inst::Head),
            ']' => Some(Inst::Tail),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Inst::Right => '>',
            Inst::Left => '<',
            Inst::Inc => '+',
            Inst::Dec => '-',
            Inst::Output => '.',
            Inst::Input => ',',
            Inst::Head => '[',
            Inst::Tail => ']',
        }
    }
}

impl VariantIndex for Inst {
    const COUNT: u32 = 8;
    #[inline]
    fn variant(index: u32) -> Self {
        INSTS[index as usize]
    }
    #[inline]
    fn index(&self) -> u32 {
        *self as u32
    }
}

/// Renders an instruction stream as source text.
#[must_use]
pub fn to_string(insts: &[Inst]) -> String {
    let mut s = String::with_capacity(insts.len());
    s.extend(insts.iter().map(Inst::as_char));
    s
}
