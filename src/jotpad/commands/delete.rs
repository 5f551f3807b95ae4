use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotepadError, Result};
use crate::model::Notepad;

use super::helpers::resolve_position;

pub fn run(pad: &mut Notepad, data: &str) -> Result<CmdResult> {
    let mut tokens = data.split_whitespace();
    let Some(position_token) = tokens.next() else {
        return Err(NotepadError::MissingPositionArgument);
    };

    let position = resolve_position(pad, position_token)?;
    pad.remove(position).ok_or(NotepadError::NothingToDelete)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "The note at position {} was successfully deleted",
        position
    )));
    Ok(result)
}
