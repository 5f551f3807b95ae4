//! The interactive loop: prompt, read a line, execute, print, repeat.

use std::io::BufRead;

use jotpad::api::Session;
use jotpad::error::Result;
use jotpad::input::CommandInput;

use super::print;

/// Drives a [`Session`] from a line-based reader.
///
/// Each line is fully executed and its output printed before the next prompt
/// appears. Command failures are printed and the loop carries on; only the
/// `exit` command or the end of input stops it.
pub(super) struct Repl<R> {
    session: Session,
    reader: R,
}

impl<R: BufRead> Repl<R> {
    pub(super) fn new(session: Session, reader: R) -> Self {
        Self { session, reader }
    }

    pub(super) fn run(&mut self) -> Result<()> {
        loop {
            print::prompt(print::COMMAND_PROMPT);

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                // End of input ends the session as cleanly as `exit` does.
                return Ok(());
            }

            let input = CommandInput::parse(&line);
            match self.session.execute(&input) {
                Ok(result) => {
                    print::print_entries(&result.entries);
                    print::print_messages(&result.messages);
                }
                Err(err) => print::print_error(&err),
            }

            if self.session.is_finished() {
                return Ok(());
            }
        }
    }

    #[cfg(test)]
    fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(capacity: usize, script: &str) -> Repl<Cursor<&str>> {
        let mut repl = Repl::new(Session::new(capacity), Cursor::new(script));
        repl.run().unwrap();
        repl
    }

    #[test]
    fn end_of_input_stops_the_loop_and_keeps_state() {
        let repl = run_script(5, "create a\ncreate b\n");
        assert!(!repl.session().is_finished());
        assert_eq!(repl.session().pad().len(), 2);
    }

    #[test]
    fn exit_stops_reading_further_lines() {
        let repl = run_script(5, "create a\nexit\ncreate b\n");
        assert!(repl.session().is_finished());
        assert_eq!(repl.session().pad().len(), 1);
    }

    #[test]
    fn failed_commands_keep_the_loop_alive() {
        let repl = run_script(1, "bogus\ncreate a\ncreate b\n");
        assert_eq!(repl.session().pad().len(), 1);
    }

    #[test]
    fn a_last_line_without_newline_is_still_executed() {
        let repl = run_script(5, "create a");
        assert_eq!(repl.session().pad().len(), 1);
    }
}
