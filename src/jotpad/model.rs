use std::fmt;

use crate::error::{NotepadError, Result};
use crate::position::Position;

/// A single note. The text is validated at construction: whitespace-only
/// content is rejected, so a stored note is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note(String);

impl Note {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(NotepadError::EmptyNote);
        }
        Ok(Self(text))
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The in-memory notepad: an ordered sequence of notes with a fixed maximum
/// capacity. Insertion order is preserved and `len <= capacity` holds at all
/// times; [`Notepad::push`] refuses to grow past the capacity.
#[derive(Debug)]
pub struct Notepad {
    notes: Vec<Note>,
    capacity: usize,
}

impl Notepad {
    pub fn with_capacity(capacity: usize) -> Self {
        // Storage grows on demand; the capacity is a bound, not a reservation.
        Self {
            notes: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.notes.len() == self.capacity
    }

    /// Appends a note at the end, failing when the notepad is at capacity.
    pub fn push(&mut self, note: Note) -> Result<()> {
        if self.is_full() {
            return Err(NotepadError::NotepadFull);
        }
        self.notes.push(note);
        Ok(())
    }

    /// Mutable access to the note at `position`, if that slot holds one.
    pub fn get_mut(&mut self, position: Position) -> Option<&mut Note> {
        self.notes.get_mut(position.index())
    }

    /// Removes the note at `position`, shifting later notes one slot left.
    /// Returns `None` when the position is beyond the current note count.
    pub fn remove(&mut self, position: Position) -> Option<Note> {
        if position.index() >= self.notes.len() {
            return None;
        }
        Some(self.notes.remove(position.index()))
    }

    /// Drops every note; the capacity stays the same.
    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Notes in storage order, paired with their 1-based positions.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Note)> {
        self.notes
            .iter()
            .enumerate()
            .map(|(i, note)| (Position::from_index(i), note))
    }
}
