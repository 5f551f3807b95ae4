use std::fmt;

/// A 1-based note position, as shown to the user.
///
/// All user-facing messages and inputs talk about positions starting at 1;
/// only the model translates them into vector indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(usize);

impl Position {
    /// Builds a position from a 1-based value. Zero is not a position.
    pub fn new(value: usize) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Builds a position from a 0-based storage index.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// The 1-based value.
    pub fn get(self) -> usize {
        self.0
    }

    /// The 0-based storage index.
    pub fn index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
