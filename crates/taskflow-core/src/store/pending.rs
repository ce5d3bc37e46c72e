//! Pending list: a singly linked list in insertion order.
//!
//! Nodes live in a slot arena and link to each other by index. Removed
//! slots go on a free list and are reused by later inserts, so the arena
//! never grows past the peak number of live elements.

use crate::domain::{Keyed, TaskId};

#[derive(Debug, Clone)]
struct ListNode<T> {
    item: T,
    next: Option<usize>,
}

/// Ordered holding area for tasks that have not started yet.
#[derive(Debug, Clone)]
pub struct PendingList<T> {
    slots: Vec<Option<ListNode<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T: Keyed> PendingList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Append `item` at the end of the list.
    pub fn add(&mut self, item: T) {
        let node = ListNode { item, next: None };
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => {
                if let Some(tail_node) = self.node_mut(tail) {
                    tail_node.next = Some(index);
                }
            }
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    /// Unlink the first element whose key is `id`.
    ///
    /// Returns `None` when the list is empty or holds no such element.
    pub fn remove(&mut self, id: TaskId) -> Option<T> {
        let (previous, index) = self.locate(id)?;
        let node = self.slots.get_mut(index)?.take()?;

        match previous {
            Some(previous) => {
                if let Some(prev_node) = self.node_mut(previous) {
                    prev_node.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        if self.tail == Some(index) {
            self.tail = previous;
        }

        self.free.push(index);
        self.len -= 1;
        Some(node.item)
    }

    pub fn find_by_id(&self, id: TaskId) -> Option<&T> {
        self.iter().find(|item| item.key() == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Every element, head to tail.
    pub fn all(&self) -> Vec<&T> {
        self.iter().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, index: usize) -> Option<&ListNode<T>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut ListNode<T>> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Slot of the first match plus the slot linking to it.
    fn locate(&self, id: TaskId) -> Option<(Option<usize>, usize)> {
        let mut previous = None;
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.node(index)?;
            if node.item.key() == id {
                return Some((previous, index));
            }
            previous = Some(index);
            cursor = node.next;
        }
        None
    }
}

impl<T: Keyed> Default for PendingList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over a [`PendingList`], head to tail.
pub struct Iter<'a, T> {
    list: &'a PendingList<T>,
    cursor: Option<usize>,
}

impl<'a, T: Keyed> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.item)
    }
}
