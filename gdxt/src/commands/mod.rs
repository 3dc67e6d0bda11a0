//! Command modules for the gdxt CLI.
//!
//! Each subcommand lives in its own file with an `*Args` struct and a
//! `run_*` function.

pub mod common;

pub mod check;
pub mod lex;
pub mod project;
pub mod serve;
