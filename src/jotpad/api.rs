//! # Session Facade
//!
//! The single entry point for executing notepad commands, regardless of the
//! UI driving it. The session:
//!
//! - **Owns the state**: the notepad and the termination flag live here as
//!   fields, never as process-wide globals.
//! - **Dispatches**: resolves the keyword through the command registry and
//!   calls the matching command module.
//! - **Returns structured types**: `Result<CmdResult>` — no stdout, no
//!   stderr, no process exits.
//!
//! Presentation is entirely the CLI layer's job; an `Err` from
//! [`Session::execute`] is a recoverable, user-facing condition that the
//! caller renders and then keeps going.

use crate::command::Command;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::input::CommandInput;
use crate::model::Notepad;

/// One interactive notepad session.
pub struct Session {
    pad: Notepad,
    finished: bool,
}

impl Session {
    /// Starts a session over an empty notepad with the given capacity.
    /// The capacity is assumed validated (positive) by the caller.
    pub fn new(capacity: usize) -> Self {
        Self {
            pad: Notepad::with_capacity(capacity),
            finished: false,
        }
    }

    /// Executes one parsed input line and returns its structured output.
    pub fn execute(&mut self, input: &CommandInput) -> Result<CmdResult> {
        let command: Command = input.keyword().parse()?;
        match command {
            Command::Exit => Ok(self.exit()),
            Command::Create => commands::create::run(&mut self.pad, input.data()),
            Command::List => commands::list::run(&self.pad),
            Command::Clear => commands::clear::run(&mut self.pad),
            Command::Update => commands::update::run(&mut self.pad, input.data()),
            Command::Delete => commands::delete::run(&mut self.pad, input.data()),
        }
    }

    /// True once `exit` has run; the REPL stops reading input then.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn pad(&self) -> &Notepad {
        &self.pad
    }

    fn exit(&mut self) -> CmdResult {
        self.finished = true;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Bye!"));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotepadError;

    fn exec(session: &mut Session, line: &str) -> Result<CmdResult> {
        session.execute(&CommandInput::parse(line))
    }

    #[test]
    fn dispatches_to_the_matching_command() {
        let mut session = Session::new(5);
        exec(&mut session, "create buy milk").unwrap();
        assert_eq!(session.pad().len(), 1);

        exec(&mut session, "update 1 buy bread").unwrap();
        let (_, note) = session.pad().iter().next().unwrap();
        assert_eq!(note.text(), "buy bread");

        exec(&mut session, "delete 1").unwrap();
        assert!(session.pad().is_empty());
    }

    #[test]
    fn exit_finishes_the_session_with_a_farewell() {
        let mut session = Session::new(5);
        assert!(!session.is_finished());

        let result = exec(&mut session, "exit").unwrap();
        assert!(session.is_finished());
        assert_eq!(result.messages[0].content, "Bye!");
    }

    #[test]
    fn exit_ignores_trailing_data() {
        let mut session = Session::new(5);
        exec(&mut session, "exit right now").unwrap();
        assert!(session.is_finished());
    }

    #[test]
    fn unknown_keywords_leave_the_session_running() {
        let mut session = Session::new(5);
        for line in ["quit", "LIST", "", "   "] {
            let err = exec(&mut session, line).unwrap_err();
            assert!(matches!(err, NotepadError::UnknownCommand));
            assert!(!session.is_finished());
        }
    }

    #[test]
    fn clear_discards_every_note() {
        let mut session = Session::new(3);
        exec(&mut session, "create a").unwrap();
        exec(&mut session, "create b").unwrap();
        exec(&mut session, "clear").unwrap();
        assert!(session.pad().is_empty());
    }

    #[test]
    fn capacity_is_honored_for_any_positive_size() {
        for capacity in [1, 2, 5, 8] {
            let mut session = Session::new(capacity);
            for i in 0..capacity {
                exec(&mut session, &format!("create note {i}")).unwrap();
            }
            let err = exec(&mut session, "create overflow").unwrap_err();
            assert!(matches!(err, NotepadError::NotepadFull));
        }
    }

    #[test]
    fn delete_then_list_renumbers_from_one() {
        let mut session = Session::new(5);
        exec(&mut session, "create a").unwrap();
        exec(&mut session, "create b").unwrap();
        exec(&mut session, "delete 1").unwrap();

        let result = exec(&mut session, "list").unwrap();
        let listed: Vec<_> = result
            .entries
            .iter()
            .map(|e| (e.position.get(), e.text.as_str()))
            .collect();
        assert_eq!(listed, [(1, "b")]);
    }
}
