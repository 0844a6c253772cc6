// Copyright (C) 2022 Andrew Archibald
//
// ubf is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any
// later version. You should have received a copy of the GNU Lesser General
// Public License along with ubf. If not, see http://www.gnu.org/licenses/.

use std::iter::FusedIterator;

use log::warn;

use crate::bf::Inst;
use crate::text::{ByteIterator, EncodingError, Utf8Iterator};

/// Extracts instructions from text, skipping every char outside the
/// instruction alphabet. Invalid UTF-8 is skipped like any other comment
/// text, so lexing never fails.
#[derive(Clone, Debug)]
pub struct Lexer<I> {
    iter: I,
}

impl<I> Lexer<I> {
    #[inline]
    pub const fn new(iter: I) -> Self {
        Lexer { iter }
    }
}

impl<'a> Lexer<Utf8Iterator<'a>> {
    #[inline]
    pub fn new_utf8<B: AsRef<[u8]> + ?Sized>(src: &'a B) -> Self {
        Self::new(Utf8Iterator::new(src))
    }
}

impl<'a> Lexer<ByteIterator<'a>> {
    #[inline]
    pub fn new_bytes<B: AsRef<[u8]> + ?Sized>(src: &'a B) -> Self {
        Self::new(ByteIterator::new(src))
    }
}

impl<I> Iterator for Lexer<I>
where
    I: Iterator<Item = Result<char, EncodingError>>,
{
    type Item = Inst;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.iter.next()? {
                Ok(ch) => {
                    if let Some(inst) = Inst::from_char(ch) {
                        return Some(inst);
                    }
                }
                Err(err) => warn!("skipping {err}"),
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I> FusedIterator for Lexer<I> where
    I: Iterator<Item = Result<char, EncodingError>> + FusedIterator
{
}

/// Lexes UTF-8 source into an instruction stream.
#[must_use]
pub fn lex<B: AsRef<[u8]> + ?Sized>(src: &B) -> Vec<Inst> {
    Lexer::new_utf8(src).collect()
}

/// Lexes source byte by byte, without decoding.
#[must_use]
pub fn lex_bytes<B: AsRef<[u8]> + ?Sized>(src: &B) -> Vec<Inst> {
    Lexer::new_bytes(src).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bf::{to_string, Inst::*};

    #[test]
    fn keeps_only_alphabet_in_order() {
        let insts = lex("Hello, world! [->+<] # done.\n");
        assert_eq!(vec![Input, Head, Dec, Right, Inc, Left, Tail, Output], insts);
    }

    #[test]
    fn empty_and_comment_only() {
        assert!(lex("").is_empty());
        assert!(lex("no instructions here").is_empty());
        assert!(lex_bytes(b"\x00\xff\n").is_empty());
    }

    #[test]
    fn skips_invalid_utf8() {
        let src = b"+\xff\xfe-\xe2\x82[]";
        assert_eq!(vec![Inc, Dec, Head, Tail], lex(src));
        assert_eq!(lex(src), lex_bytes(src));
    }

    #[test]
    fn multibyte_chars_are_dropped() {
        // Every byte of a multibyte sequence is >= 0x80, so byte-wise lexing
        // drops them too.
        let src = "→>⮞<λ";
        assert_eq!("><", to_string(&lex(src)));
        assert_eq!(lex(src), lex_bytes(src));
    }

    #[test]
    fn dropping_comment_chars_is_stable() {
        let src = "a+b-c[d]e.f,g<h>";
        let expected = lex(src);
        for (i, ch) in src.char_indices() {
            if Inst::from_char(ch).is_none() {
                let mut shorter = src.to_owned();
                shorter.remove(i);
                assert_eq!(expected, lex(&shorter));
            }
        }
    }
}
