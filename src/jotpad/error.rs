use thiserror::Error;

/// Everything that can go wrong while running the notepad.
///
/// Every variant except [`NotepadError::InvalidCapacityInput`] and
/// [`NotepadError::Io`] is recoverable: the REPL reports it as a single
/// `[Error]` line and keeps reading commands.
#[derive(Error, Debug)]
pub enum NotepadError {
    #[error("Notepad is full")]
    NotepadFull,

    // Deliberately worded like MissingNoteArgument; the kinds stay distinct
    // so callers can tell them apart.
    #[error("Missing note argument")]
    EmptyNote,

    #[error("Unknown command")]
    UnknownCommand,

    #[error("Invalid input while getting max notepad size")]
    InvalidCapacityInput,

    #[error("Missing position argument")]
    MissingPositionArgument,

    #[error("Missing note argument")]
    MissingNoteArgument,

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Position {position} is out of the boundaries [1, {max}]")]
    PositionOutOfBounds { position: i64, max: usize },

    #[error("There is nothing to update")]
    NothingToUpdate,

    #[error("There is nothing to delete")]
    NothingToDelete,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NotepadError>;
