// Copyright (C) 2022 Andrew Archibald
//
// ubf is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any
// later version. You should have received a copy of the GNU Lesser General
// Public License along with ubf. If not, see http://www.gnu.org/licenses/.

//! Transpiler and interpreter for Brainfuck and Ultimate Brainfuck.

pub mod bf;
pub mod config;
pub mod driver;
pub mod syntax;
pub mod text;
