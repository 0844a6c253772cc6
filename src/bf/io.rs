// Copyright (C) 2022 Thalia Archibald
//
// ubf is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any
// later version. You should have received a copy of the GNU Lesser General
// Public License along with ubf. If not, see http://www.gnu.org/licenses/.

use std::io::{self, ErrorKind, Read};

/// Byte source for the `,` instruction.
///
/// Once the underlying reader is exhausted, every read yields `0` without
/// blocking. Interrupted reads are retried; other errors are returned.
#[derive(Debug)]
pub struct Input<R> {
    reader: R,
    eof: bool,
}

impl<R: Read> Input<R> {
    #[inline]
    pub const fn new(reader: R) -> Self {
        Input { reader, eof: false }
    }

    pub fn read_byte(&mut self) -> io::Result<u8> {
        if self.eof {
            return Ok(0);
        }
        let mut buf = [0];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(0);
                }
                Ok(_) => return Ok(buf[0]),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.eof
    }
}
