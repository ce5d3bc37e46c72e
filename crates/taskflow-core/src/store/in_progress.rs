//! In-progress queue: first in, first out.

use std::collections::VecDeque;

use crate::domain::{Keyed, TaskId};

/// FIFO holding area for started tasks.
#[derive(Debug, Clone)]
pub struct InProgressQueue<T> {
    items: VecDeque<T>,
}

impl<T: Keyed> InProgressQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the oldest element.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn find_by_id(&self, id: TaskId) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Every element, front to back.
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

impl<T: Keyed> Default for InProgressQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
