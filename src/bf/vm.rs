// Copyright (C) 2022 Thalia Archibald
//
// ubf is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any
// later version. You should have received a copy of the GNU Lesser General
// Public License along with ubf. If not, see http://www.gnu.org/licenses/.

use std::io::{self, Read, Write};

use log::{debug, trace};
use smallvec::SmallVec;
use thiserror::Error;

use crate::bf::{Inst, Input, Tape};
use crate::config::VmConfig;

#[derive(Debug, Error)]
pub enum VmError {
    #[error("unmatched `[` at instruction {pos}")]
    UnmatchedHead { pos: usize },
    #[error("unmatched `]` at instruction {pos}")]
    UnmatchedTail { pos: usize },
    #[error("exceeded step limit of {limit} instructions")]
    StepLimit { limit: u64 },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Brainfuck interpreter over a circular tape.
///
/// Loops are tracked with a stack of the positions of active `[`
/// instructions. A `[` on a zero cell scans forward for its match, so
/// brackets are only checked when execution reaches them.
#[derive(Debug)]
pub struct Vm<'a, R, W> {
    insts: &'a [Inst],
    tape: Tape,
    ip: usize,
    loops: SmallVec<[usize; 16]>,
    input: Input<R>,
    output: W,
    steps: u64,
    step_limit: Option<u64>,
}

impl<'a, R: Read, W: Write> Vm<'a, R, W> {
    /// Creates a VM with a zeroed tape.
    ///
    /// # Panics
    ///
    /// Panics when `config.tape_len` is 0.
    #[must_use]
    pub fn new(insts: &'a [Inst], input: R, output: W, config: &VmConfig) -> Self {
        Vm {
            insts,
            tape: Tape::new(config.tape_len),
            ip: 0,
            loops: SmallVec::new(),
            input: Input::new(input),
            output,
            steps: 0,
            step_limit: config.step_limit,
        }
    }

    /// Runs until the program halts or fails. Output is flushed either way.
    pub fn run(&mut self) -> Result<(), VmError> {
        debug!(
            "running {} instructions on a {}-cell tape",
            self.insts.len(),
            self.tape.len(),
        );
        let res = self.run_to_end();
        self.output.flush()?;
        match &res {
            Ok(()) => debug!("halted after {} steps", self.steps),
            Err(err) => debug!("stopped after {} steps: {err}", self.steps),
        }
        res
    }

    fn run_to_end(&mut self) -> Result<(), VmError> {
        while self.step()? {}
        Ok(())
    }

    /// Executes a single instruction. Returns `false` once halted.
    pub fn step(&mut self) -> Result<bool, VmError> {
        let inst = match self.insts.get(self.ip) {
            Some(&inst) => inst,
            None => return Ok(false),
        };
        if let Some(limit) = self.step_limit {
            if self.steps >= limit {
                return Err(VmError::StepLimit { limit });
            }
        }
        self.steps += 1;

        let mut next = self.ip + 1;
        match inst {
            Inst::Right => self.tape.right(),
            Inst::Left => self.tape.left(),
            Inst::Inc => self.tape.inc(),
            Inst::Dec => self.tape.dec(),
            Inst::Output => self.output.write_all(&[self.tape.get()])?,
            Inst::Input => {
                let b = self.input.read_byte()?;
                self.tape.set(b);
            }
            Inst::Head => {
                if self.tape.get() == 0 {
                    next = self.matching_tail()? + 1;
                    trace!("skip loop {} to {next}", self.ip);
                } else {
                    self.loops.push(self.ip);
                }
            }
            Inst::Tail => {
                let head = *self
                    .loops
                    .last()
                    .ok_or(VmError::UnmatchedTail { pos: self.ip })?;
                if self.tape.get() != 0 {
                    next = head + 1;
                    trace!("repeat loop {head} from {}", self.ip);
                } else {
                    self.loops.pop();
                }
            }
        }
        self.ip = next;
        Ok(true)
    }

    fn matching_tail(&self) -> Result<usize, VmError> {
        let mut depth = 0usize;
        for (pos, inst) in self.insts.iter().enumerate().skip(self.ip) {
            match inst {
                Inst::Head => depth += 1,
                Inst::Tail => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(pos);
                    }
                }
                _ => {}
            }
        }
        Err(VmError::UnmatchedHead { pos: self.ip })
    }

    #[inline]
    #[must_use]
    pub const fn tape(&self) -> &Tape {
        &self.tape
    }

    #[inline]
    #[must_use]
    pub const fn ip(&self) -> usize {
        self.ip
    }

    #[inline]
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    #[inline]
    #[must_use]
    pub fn loop_depth(&self) -> usize {
        self.loops.len()
    }

    #[inline]
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.ip >= self.insts.len()
    }

    #[inline]
    pub fn output(&self) -> &W {
        &self.output
    }

    #[inline]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Runs a program to completion and returns its output.
pub fn run_to_vec<R: Read>(
    insts: &[Inst],
    input: R,
    config: &VmConfig,
) -> Result<Vec<u8>, VmError> {
    let mut vm = Vm::new(insts, input, Vec::new(), config);
    vm.run()?;
    Ok(vm.into_output())
}
