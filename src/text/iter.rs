// Copyright (C) 2022 Thalia Archibald
//
// ubf is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any
// later version. You should have received a copy of the GNU Lesser General
// Public License along with ubf. If not, see http://www.gnu.org/licenses/.

use std::fmt::{self, Display, Formatter};
use std::iter::FusedIterator;

use arrayvec::ArrayVec;
use bstr::decode_utf8;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EncodingError {
    /// An invalid UTF-8 sequence and its byte offset in the source.
    InvalidUtf8(ArrayVec<u8, 3>, usize),
}

impl Display for EncodingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::InvalidUtf8(bad, offset) => {
                write!(f, "invalid UTF-8 sequence {bad:02x?} at offset {offset}")
            }
        }
    }
}

/// Iterates the chars of UTF-8 text, yielding an error for each invalid
/// sequence and then resuming after it.
#[derive(Clone, Debug)]
pub struct Utf8Iterator<'a> {
    src: &'a [u8],
    offset: usize,
}

impl<'a> Utf8Iterator<'a> {
    #[inline]
    #[must_use]
    pub fn new<B: AsRef<[u8]> + ?Sized>(src: &'a B) -> Self {
        Utf8Iterator { src: src.as_ref(), offset: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Utf8Iterator<'_> {
    type Item = Result<char, EncodingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.src.len() {
            return None;
        }
        let offset = self.offset;
        let (ch, size) = decode_utf8(&self.src[offset..]);
        self.offset += size;
        match ch {
            Some(ch) => Some(Ok(ch)),
            None => {
                // Size is between 1 and 3, inclusive, for an unsuccessful
                // decode.
                let bad = self.src[offset..offset + size].iter().copied().collect();
                Some(Err(EncodingError::InvalidUtf8(bad, offset)))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.src.len() - self.offset;
        ((rest + 3) / 4, Some(rest))
    }
}

impl FusedIterator for Utf8Iterator<'_> {}

/// Iterates raw bytes without decoding. It never fails, but shares the item
/// type of [`Utf8Iterator`] so either can feed a lexer.
#[derive(Clone, Debug)]
pub struct ByteIterator<'a> {
    src: &'a [u8],
    offset: usize,
}

impl<'a> ByteIterator<'a> {
    #[inline]
    #[must_use]
    pub fn new<B: AsRef<[u8]> + ?Sized>(src: &'a B) -> Self {
        ByteIterator { src: src.as_ref(), offset: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for ByteIterator<'_> {
    type Item = Result<char, EncodingError>;

    fn next(&mut self) -> Option<Self::Item> {
        let b = *self.src.get(self.offset)?;
        self.offset += 1;
        Some(Ok(char::from(b)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.src.len() - self.offset;
        (rest, Some(rest))
    }
}

impl FusedIterator for ByteIterator<'_> {}

#[cfg(test)]
mod tests {
    use std::mem::size_of;

    use static_assertions::const_assert;

    use super::*;

    const_assert!(size_of::<ArrayVec<u8, 3>>() < size_of::<Vec<u8>>());

    #[test]
    fn utf8_resumes_after_error() {
        let src = b"a\xffb\xe2\x82";
        let items = Utf8Iterator::new(src).collect::<Vec<_>>();
        assert_eq!(
            vec![
                Ok('a'),
                Err(EncodingError::InvalidUtf8([0xff].into_iter().collect(), 1)),
                Ok('b'),
                Err(EncodingError::InvalidUtf8([0xe2, 0x82].into_iter().collect(), 3)),
            ],
            items,
        );
    }

    #[test]
    fn utf8_multibyte() {
        let chars = Utf8Iterator::new("λ>ü")
            .collect::<Result<String, _>>()
            .unwrap();
        assert_eq!("λ>ü", chars);
    }

    #[test]
    fn bytes_never_fail() {
        let mut iter = ByteIterator::new(b"+\xff");
        assert_eq!(Some(Ok('+')), iter.next());
        assert_eq!(Some(Ok('\u{ff}')), iter.next());
        assert_eq!(None, iter.next());
        assert_eq!(2, iter.offset());
    }
}
