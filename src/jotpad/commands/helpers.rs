use crate::error::{NotepadError, Result};
use crate::model::Notepad;
use crate::position::Position;

/// Parses a position token and checks it against the notepad capacity.
///
/// Non-numeric tokens and numbers outside `[1, capacity]` get distinct
/// errors. Whether the slot actually holds a note is left to the caller,
/// since update and delete report that case differently.
pub fn resolve_position(pad: &Notepad, token: &str) -> Result<Position> {
    let value: i64 = token
        .parse()
        .map_err(|_| NotepadError::InvalidPosition(token.to_string()))?;

    let max = pad.capacity();
    if value < 1 || value as u64 > max as u64 {
        return Err(NotepadError::PositionOutOfBounds {
            position: value,
            max,
        });
    }

    Ok(Position::from_index(value as usize - 1))
}
