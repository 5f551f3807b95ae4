use crate::commands::{CmdMessage, CmdResult, ListEntry};
use crate::error::Result;
use crate::model::Notepad;

pub fn run(pad: &Notepad) -> Result<CmdResult> {
    if pad.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Notepad is empty"));
        return Ok(result);
    }

    let entries = pad
        .iter()
        .map(|(position, note)| ListEntry {
            position,
            text: note.text().to_string(),
        })
        .collect();
    Ok(CmdResult::default().with_entries(entries))
}
