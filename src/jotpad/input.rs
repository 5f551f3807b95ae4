use crate::error::{NotepadError, Result};

/// One parsed input line: the command keyword plus the rest of the line.
///
/// The line is split on whitespace; the first token is the keyword and the
/// remaining tokens, rejoined with single spaces, form the data string. No
/// quoting or escaping is supported. A blank line parses to an empty keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInput {
    keyword: String,
    data: String,
}

impl CommandInput {
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().unwrap_or_default().to_string();
        let data = tokens.collect::<Vec<_>>().join(" ");
        Self { keyword, data }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

/// Parses the startup capacity: one line holding a single integer greater
/// than zero. Anything else, including end of input, is invalid.
pub fn parse_capacity(line: &str) -> Result<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or(NotepadError::InvalidCapacityInput)
}
