use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotepadError, Result};
use crate::model::{Note, Notepad};

use super::helpers::resolve_position;

pub fn run(pad: &mut Notepad, data: &str) -> Result<CmdResult> {
    let mut tokens = data.split_whitespace();
    let Some(position_token) = tokens.next() else {
        return Err(NotepadError::MissingPositionArgument);
    };
    let text = tokens.collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return Err(NotepadError::MissingNoteArgument);
    }

    let position = resolve_position(pad, position_token)?;
    let note = Note::new(text)?;
    let slot = pad
        .get_mut(position)
        .ok_or(NotepadError::NothingToUpdate)?;
    *slot = note;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "The note at position {} was successfully updated",
        position
    )));
    Ok(result)
}
