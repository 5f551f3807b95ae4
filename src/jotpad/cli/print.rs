//! Terminal output: prompts, message rendering, list rendering.
//!
//! Everything the program shows goes through here, so the look of the tool
//! lives in one file. Output goes to stdout; `colored` drops the colors on
//! its own when stdout is not a terminal.

use colored::Colorize;
use std::io::{self, Write};

use jotpad::commands::{CmdMessage, ListEntry, MessageLevel};
use jotpad::error::NotepadError;

pub(super) const COMMAND_PROMPT: &str = "Enter a command and data: > ";
pub(super) const CAPACITY_PROMPT: &str = "Enter the maximum number of notes: > ";

/// Prints a prompt without a trailing newline and flushes so the user sees
/// it before we block on input.
pub(super) fn prompt(text: &str) {
    print!("{}", text);
    io::stdout().flush().ok();
}

/// Prints command messages with their level tag.
pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{} {}", "[Info]".dimmed(), message.content),
            MessageLevel::Success => println!("{} {}", "[OK]".green(), message.content),
            MessageLevel::Error => println!("{} {}", "[Error]".red(), message.content),
        }
    }
}

/// Prints list entries, one note per line, as "position: text".
pub(super) fn print_entries(entries: &[ListEntry]) {
    for entry in entries {
        println!("{} {}: {}", "[Info]".dimmed(), entry.position, entry.text);
    }
}

/// Prints an error through the same tagged pipeline as command messages.
pub(super) fn print_error(error: &NotepadError) {
    print_messages(&[CmdMessage::error(error.to_string())]);
}
