use crate::position::Position;

pub mod clear;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod update;

/// Severity of a line of command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

/// One line of command output. Confirmations are built fresh per invocation;
/// nothing here is shared or mutated between commands.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A note listed by a command, with its user-facing position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub position: Position,
    pub text: String,
}

/// Structured output of one command invocation. The CLI layer decides how
/// entries and messages reach the terminal.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub entries: Vec<ListEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_entries(mut self, entries: Vec<ListEntry>) -> Self {
        self.entries = entries;
        self
    }
}
