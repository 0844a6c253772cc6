// Copyright (C) 2022 Thalia Archibald
//
// ubf is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any
// later version. You should have received a copy of the GNU Lesser General
// Public License along with ubf. If not, see http://www.gnu.org/licenses/.

use std::path::Path;

use strum::Display;

use crate::bf::tape::TAPE_LEN;

/// Interpreter limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VmConfig {
    /// Number of tape cells. Must be nonzero.
    pub tape_len: usize,
    /// Maximum number of instructions to execute, if any.
    pub step_limit: Option<u64>,
}

impl Default for VmConfig {
    #[inline]
    fn default() -> Self {
        VmConfig {
            tape_len: TAPE_LEN,
            step_limit: None,
        }
    }
}

/// Source language of a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Dialect {
    #[strum(serialize = "brainfuck")]
    Bf,
    #[strum(serialize = "ultimate brainfuck")]
    Ubf,
}

/// File name suffixes recognized for each dialect.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Extensions {
    pub bf: Vec<String>,
    pub ubf: Vec<String>,
}

impl Extensions {
    /// Detects the dialect from the end of the file name.
    #[must_use]
    pub fn classify(&self, path: &Path) -> Option<Dialect> {
        let name = path.file_name()?.to_str()?;
        let matches = |exts: &[String]| exts.iter().any(|ext| name.ends_with(ext.as_str()));
        if matches(&self.bf) {
            Some(Dialect::Bf)
        } else if matches(&self.ubf) {
            Some(Dialect::Ubf)
        } else {
            None
        }
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Extensions {
            bf: vec![".bf".into(), ".brainfuck".into()],
            ubf: vec![".ultimate_brainfuck".into(), ".ultimate-brainfuck".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_defaults() {
        let exts = Extensions::default();
        let classify = |p: &str| exts.classify(Path::new(p));
        assert_eq!(Some(Dialect::Bf), classify("hello.bf"));
        assert_eq!(Some(Dialect::Bf), classify("dir.x/hello.brainfuck"));
        assert_eq!(Some(Dialect::Ubf), classify("hello.ultimate_brainfuck"));
        assert_eq!(Some(Dialect::Ubf), classify("hello.ultimate-brainfuck"));
        assert_eq!(None, classify("hello.txt"));
        assert_eq!(None, classify("hello.bf.txt"));
        assert_eq!(None, classify("hello"));
    }

    #[test]
    fn classify_custom() {
        let exts = Extensions {
            bf: vec![".b".into()],
            ubf: vec![".ub".into()],
        };
        assert_eq!(Some(Dialect::Bf), exts.classify(Path::new("x.b")));
        assert_eq!(Some(Dialect::Ubf), exts.classify(Path::new("x.ub")));
        assert_eq!(None, exts.classify(Path::new("x.bf")));
    }

    #[test]
    fn dialect_names() {
        assert_eq!("brainfuck", Dialect::Bf.to_string());
        assert_eq!("ultimate brainfuck", Dialect::Ubf.to_string());
    }
}
