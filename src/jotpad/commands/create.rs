use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotepadError, Result};
use crate::model::{Note, Notepad};

pub fn run(pad: &mut Notepad, data: &str) -> Result<CmdResult> {
    // A full notepad wins over an empty note.
    if pad.is_full() {
        return Err(NotepadError::NotepadFull);
    }
    let note = Note::new(data)?;
    pad.push(note)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("The note was successfully created"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn appends_the_note_and_confirms() {
        let mut pad = Notepad::with_capacity(5);
        let result = run(&mut pad, "buy milk").unwrap();

        assert_eq!(pad.len(), 1);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "The note was successfully created");
    }

    #[test]
    fn fills_up_to_capacity_then_fails() {
        let capacity = 4;
        let mut pad = Notepad::with_capacity(capacity);
        for i in 0..capacity {
            run(&mut pad, &format!("note {}", i + 1)).unwrap();
        }
        assert_eq!(pad.len(), capacity);
        assert!(matches!(
            run(&mut pad, "one too many"),
            Err(NotepadError::NotepadFull)
        ));
        assert_eq!(pad.len(), capacity);
    }

    #[test]
    fn rejects_whitespace_only_notes() {
        let mut pad = Notepad::with_capacity(5);
        assert!(matches!(run(&mut pad, "   "), Err(NotepadError::EmptyNote)));
        assert!(matches!(run(&mut pad, ""), Err(NotepadError::EmptyNote)));
        assert!(pad.is_empty());
    }

    #[test]
    fn full_notepad_is_reported_before_empty_text() {
        let mut pad = Notepad::with_capacity(1);
        run(&mut pad, "only note").unwrap();
        assert!(matches!(run(&mut pad, ""), Err(NotepadError::NotepadFull)));
    }
}
