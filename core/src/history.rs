use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Linear undo/redo history kept as two stacks.
///
/// A new entry clears the redo side. Moving back and forth never loses an entry, it only
/// shifts between the two stacks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History<T> {
    undo: Vec<T>,
    redo: Vec<T>,
}

impl<T> History<T> {
    pub const fn new() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Entries that can be undone, oldest first.
    pub fn undo_entries(&self) -> &[T] {
        &self.undo
    }

    /// Entries that can be redone, most recently undone last.
    pub fn redo_entries(&self) -> &[T] {
        &self.redo
    }

    /// Records a new action, or a value that is about to be replaced.
    pub fn push(&mut self, entry: T) {
        self.undo.push(entry);
        self.redo.clear();
    }

    /// Moves the latest action to the redo side and returns it.
    pub fn undo(&mut self) -> Option<&T> {
        let entry = self.undo.pop()?;
        self.redo.push(entry);
        self.redo.last()
    }

    /// Moves the latest undone action back to the undo side and returns it.
    pub fn redo(&mut self) -> Option<&T> {
        let entry = self.redo.pop()?;
        self.undo.push(entry);
        self.undo.last()
    }

    /// Exchanges `current` for the most recently recorded value.
    ///
    /// `current` is kept on the redo side so [`History::step_forward`] can bring it back.
    /// Returns `None`, dropping nothing, when there is nothing to go back to.
    pub fn step_back(&mut self, current: T) -> Option<T> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Counterpart of [`History::step_back`].
    pub fn step_forward(&mut self, current: T) -> Option<T> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}
