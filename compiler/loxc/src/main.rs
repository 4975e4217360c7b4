//! Lox CLI
//!
//! `lox tokenize <filename>` prints the token stream of a source file.
//! There are no other commands.

use std::process::ExitCode;

use loxc::commands::{tokenize_file, ExitStatus};

fn main() -> ExitCode {
    loxc::tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    run(&args).into()
}

fn run(args: &[String]) -> ExitStatus {
    let Some(command) = args.get(1) else {
        eprintln!("Usage: lox tokenize <filename>");
        return ExitStatus::Failure;
    };

    match command.as_str() {
        "tokenize" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: lox tokenize <filename>");
                return ExitStatus::Failure;
            };
            tokenize_file(path)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            ExitStatus::Failure
        }
    }
}

