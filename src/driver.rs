// Copyright (C) 2022 Andrew Archibald
//
// ubf is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any
// later version. You should have received a copy of the GNU Lesser General
// Public License along with ubf. If not, see http://www.gnu.org/licenses/.

//! Transpiles or runs a source file, choosing the direction from its
//! extension.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use log::debug;

use crate::bf::{self, ubf, Inst, Vm};
use crate::config::{Dialect, Extensions, VmConfig};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Scan the file byte by byte instead of as UTF-8.
    pub ascii: bool,
    /// Omit the headings around transpiled programs.
    pub quiet: bool,
    pub vm: VmConfig,
    pub extensions: Extensions,
}

/// Handles one source file and returns the process exit status.
///
/// An unrecognized extension or an unreadable file is reported to `err`, but
/// is not a failure. Only a program that fails while running gives status 1.
/// Errors writing to `out` or `err` are returned.
pub fn run_file<R, W, E>(
    path: &Path,
    opts: &Options,
    input: R,
    mut out: W,
    mut err: E,
) -> io::Result<u8>
where
    R: Read,
    W: Write,
    E: Write,
{
    let dialect = match opts.extensions.classify(path) {
        Some(dialect) => dialect,
        None => {
            writeln!(err, "Error: Unsupported file extension")?;
            return Ok(0);
        }
    };
    debug!("reading {} as {dialect}", path.display());
    let insts = read_program(path, opts.ascii, &mut err)?;

    match dialect {
        Dialect::Bf => {
            let encoded = ubf::encode(&insts);
            if !opts.quiet {
                writeln!(out, "Brainfuck transpiled to ultimate brainfuck:")?;
            }
            writeln!(out, "{}", bf::to_string(&encoded))?;
            Ok(0)
        }
        Dialect::Ubf => {
            let decoded = ubf::decode(&insts);
            if !opts.quiet {
                writeln!(out, "Ultimate brainfuck transpiled to brainfuck:")?;
            }
            writeln!(out, "{}", bf::to_string(&decoded))?;
            if !opts.quiet {
                writeln!(out, "Interpreting transpiled brainfuck:")?;
            }
            let mut vm = Vm::new(&decoded, input, &mut out, &opts.vm);
            match vm.run() {
                Ok(()) => Ok(0),
                Err(e) => {
                    writeln!(err, "Error: {e}")?;
                    Ok(1)
                }
            }
        }
    }
}

/// Reads and lexes a program. A file that cannot be read is reported and
/// treated as empty.
fn read_program<E: Write>(path: &Path, ascii: bool, err: &mut E) -> io::Result<Vec<Inst>> {
    match fs::read(path) {
        Ok(src) if ascii => Ok(bf::lex_bytes(&src)),
        Ok(src) => Ok(bf::lex(&src)),
        Err(e) => {
            writeln!(err, "Error: Could not open file {}", path.display())?;
            debug!("{e}");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::{tempdir, TempDir};

    use super::*;

    struct Run {
        status: u8,
        out: String,
        err: String,
    }

    fn run(path: &Path, opts: &Options, input: &[u8]) -> Run {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = run_file(path, opts, input, &mut out, &mut err).unwrap();
        Run {
            status,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    fn write_src(dir: &TempDir, name: &str, src: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, src).unwrap();
        path
    }

    #[test]
    fn unsupported_extension_is_not_a_failure() {
        let dir = tempdir().unwrap();
        let path = write_src(&dir, "x.txt", "+[-]");
        let res = run(&path, &Options::default(), b"");
        assert_eq!(0, res.status);
        assert_eq!("", res.out);
        assert_eq!("Error: Unsupported file extension\n", res.err);
    }

    #[test]
    fn missing_file_runs_empty_program() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.ultimate_brainfuck");
        let res = run(&path, &Options::default(), b"");
        assert_eq!(0, res.status);
        assert_eq!(
            format!("Error: Could not open file {}\n", path.display()),
            res.err,
        );
        assert_eq!(
            "Ultimate brainfuck transpiled to brainfuck:\n\nInterpreting transpiled brainfuck:\n",
            res.out,
        );
    }

    #[test]
    fn missing_file_transpiles_empty_program() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.bf");
        let opts = Options {
            quiet: true,
            ..Options::default()
        };
        let res = run(&path, &opts, b"");
        assert_eq!(0, res.status);
        assert_eq!("\n", res.out);
        assert!(res.err.starts_with("Error: Could not open file "), "{}", res.err);
    }

    #[test]
    fn malformed_program_fails() {
        let dir = tempdir().unwrap();
        let path = write_src(&dir, "bad.ultimate_brainfuck", "]");
        let res = run(&path, &Options::default(), b"");
        assert_eq!(1, res.status);
        assert_eq!("Error: unmatched `]` at instruction 0\n", res.err);
    }

    #[test]
    fn step_limit_fails() {
        let dir = tempdir().unwrap();
        // Decodes to `+[]`.
        let path = write_src(&dir, "spin.ultimate_brainfuck", "+]<");
        let opts = Options {
            vm: VmConfig {
                step_limit: Some(50),
                ..VmConfig::default()
            },
            ..Options::default()
        };
        let res = run(&path, &opts, b"");
        assert_eq!(1, res.status);
        assert_eq!("Error: exceeded step limit of 50 instructions\n", res.err);
    }

    #[test]
    fn transpiles_bf() {
        let dir = tempdir().unwrap();
        let path = write_src(&dir, "loop.brainfuck", "clear: +[-]\n");
        let res = run(&path, &Options::default(), b"");
        assert_eq!(0, res.status);
        assert_eq!("Brainfuck transpiled to ultimate brainfuck:\n+],+\n", res.out);
        assert_eq!("", res.err);
    }

    #[test]
    fn runs_ubf_with_input() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/cat.ultimate_brainfuck");
        let opts = Options {
            quiet: true,
            ..Options::default()
        };
        let res = run(&path, &opts, b"hi\0");
        assert_eq!(0, res.status);
        assert_eq!(",[.,]\nhi", res.out);
        assert_eq!("", res.err);
    }

    #[test]
    fn ascii_mode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.bf");
        fs::write(&path, b"+\xff-").unwrap();
        let opts = Options {
            ascii: true,
            quiet: true,
            ..Options::default()
        };
        let res = run(&path, &opts, b"");
        assert_eq!("+.\n", res.out);
    }
}
