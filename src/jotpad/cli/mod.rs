//! CLI Layer
//!
//! One possible client of the notepad API. This is the only layer that
//! knows about the terminal: argument parsing, prompts, reading stdin, and
//! turning [`CmdResult`](jotpad::commands::CmdResult) values into tagged,
//! colored lines. The layers below never print.

mod print;
mod repl;
mod setup;

use std::io;

use clap::Parser;

use jotpad::api::Session;
use jotpad::error::Result;

use crate::args::Cli;
use repl::Repl;

/// Runs the whole program: argument parsing, the capacity question, then
/// the command loop. Any failure this returns has already been reported on
/// stdout; the caller only maps it onto the exit code.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let capacity = match setup::obtain_capacity(&cli, &mut reader) {
        Ok(capacity) => capacity,
        Err(err) => {
            print::print_error(&err);
            return Err(err);
        }
    };

    let mut repl = Repl::new(Session::new(capacity), reader);
    if let Err(err) = repl.run() {
        print::print_error(&err);
        return Err(err);
    }
    Ok(())
}
