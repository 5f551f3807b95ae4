use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::NotepadError;

/// The six notepad commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Exit,
    Create,
    List,
    Clear,
    Update,
    Delete,
}

/// Keyword registry: built once on first use, immutable afterwards.
/// Lookup is an exact, case-sensitive match.
static REGISTRY: Lazy<HashMap<&'static str, Command>> = Lazy::new(|| {
    HashMap::from([
        ("exit", Command::Exit),
        ("create", Command::Create),
        ("list", Command::List),
        ("clear", Command::Clear),
        ("update", Command::Update),
        ("delete", Command::Delete),
    ])
});

impl Command {
    pub fn lookup(keyword: &str) -> Option<Command> {
        REGISTRY.get(keyword).copied()
    }

    /// The keyword this command is registered under.
    pub fn keyword(self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::Create => "create",
            Command::List => "list",
            Command::Clear => "clear",
            Command::Update => "update",
            Command::Delete => "delete",
        }
    }
}

impl FromStr for Command {
    type Err = NotepadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or(NotepadError::UnknownCommand)
    }
}
