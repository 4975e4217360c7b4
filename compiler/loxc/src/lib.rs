//! Lox toolchain CLI library.
//!
//! The `lox` binary is a thin argument dispatcher over this crate. Command
//! handlers live in [`commands`]; they do all file and stream I/O so the
//! scanner in `lox_lexer_core` stays pure.

pub mod commands;
pub mod tracing_setup;
