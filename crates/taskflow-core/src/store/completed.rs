//! Completed stack: last in, first out.
//!
//! Besides `push`/`pop` the stack allows removal by id from any depth. The
//! board uses that to delete the *oldest* completed task rather than the top.

use crate::domain::{Keyed, TaskId};

/// LIFO holding area for finished tasks. The end of the vector is the top.
#[derive(Debug, Clone)]
pub struct CompletedStack<T> {
    items: Vec<T>,
}

impl<T: Keyed> CompletedStack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Top of the stack (most recently pushed).
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Bottom of the stack (first pushed still present).
    pub fn bottom(&self) -> Option<&T> {
        self.items.first()
    }

    /// Remove the first element whose key is `id`, wherever it sits.
    pub fn remove_by_id(&mut self, id: TaskId) -> Option<T> {
        let position = self.items.iter().position(|item| item.key() == id)?;
        Some(self.items.remove(position))
    }

    pub fn find_by_id(&self, id: TaskId) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Every element, bottom to top.
    pub fn all(&self) -> Vec<&T> {
        self.items.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Keyed> Default for CompletedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
