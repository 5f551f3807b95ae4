use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Notepad;

pub fn run(pad: &mut Notepad) -> Result<CmdResult> {
    pad.clear();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("All notes were successfully deleted"));
    Ok(result)
}
