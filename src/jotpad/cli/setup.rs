//! Startup: deciding the notepad capacity before the loop begins.

use std::io::BufRead;

use jotpad::error::{NotepadError, Result};
use jotpad::input::parse_capacity;

use super::print;
use crate::args::Cli;

/// Decides the notepad capacity. The `--capacity` flag wins; without it the
/// user is asked on stdin. Either way the same validation applies, so a bad
/// flag value fails with the same message as a bad typed answer.
pub(super) fn obtain_capacity<R: BufRead>(cli: &Cli, reader: &mut R) -> Result<usize> {
    match &cli.capacity {
        Some(raw) => parse_capacity(raw),
        None => read_capacity(reader),
    }
}

/// Prompts for the maximum number of notes and reads one line. End of input
/// counts as an invalid answer.
fn read_capacity<R: BufRead>(reader: &mut R) -> Result<usize> {
    print::prompt(print::CAPACITY_PROMPT);
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(NotepadError::InvalidCapacityInput);
    }
    parse_capacity(&line)
}
