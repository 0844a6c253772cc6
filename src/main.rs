// Copyright (C) 2022 Andrew Archibald
//
// ubf is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any
// later version. You should have received a copy of the GNU Lesser General
// Public License along with ubf. If not, see http://www.gnu.org/licenses/.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as CliParser;
use ubf::bf::tape::TAPE_LEN;
use ubf::config::{Extensions, VmConfig};
use ubf::driver::{run_file, Options};

#[derive(Debug, CliParser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Path to a Brainfuck (.bf, .brainfuck) or Ultimate Brainfuck
    /// (.ultimate_brainfuck) program
    #[clap(required = true, value_parser)]
    filename: PathBuf,
    /// Disable UTF-8 decoding and scan the file byte by byte
    #[clap(long, value_parser, default_value_t = false)]
    ascii: bool,
    /// Set the number of tape cells
    #[clap(long, value_parser = parse_tape_len, default_value_t = TAPE_LEN)]
    tape_len: usize,
    /// Abort execution after this many instructions
    #[clap(long, value_parser)]
    max_steps: Option<u64>,
    /// Omit the headings around transpiled programs
    #[clap(short, long, value_parser, default_value_t = false)]
    quiet: bool,
}

fn parse_tape_len(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("tape must have at least one cell".to_owned()),
        Ok(len) => Ok(len),
        Err(err) => Err(err.to_string()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let opts = Options {
        ascii: cli.ascii,
        quiet: cli.quiet,
        vm: VmConfig {
            tape_len: cli.tape_len,
            step_limit: cli.max_steps,
        },
        extensions: Extensions::default(),
    };
    let res = run_file(
        &cli.filename,
        &opts,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr().lock(),
    );
    match res {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
