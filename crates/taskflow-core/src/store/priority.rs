//! Priority index: a binary search tree keyed by priority.
//!
//! Design:
//! - Nodes are stored in a `Vec` arena; children are indices into it.
//! - Insertion and traversal are iterative, so a degenerate tree (all
//!   priorities ascending) cannot overflow the call stack.
//! - Equal priorities descend to the right, so among equals an in-order walk
//!   yields insertion order.
//! - There is no removal. Once indexed, an element stays indexed.

use crate::domain::Priority;

#[derive(Debug, Clone)]
struct TreeNode<T> {
    priority: Priority,
    item: T,
    left: Option<usize>,
    right: Option<usize>,
}

/// Ordering of every task ever created, by ascending priority.
#[derive(Debug, Clone)]
pub struct PriorityIndex<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<usize>,
}

impl<T> PriorityIndex<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Insert `item` under `priority`.
    pub fn add(&mut self, priority: Priority, item: T) {
        let index = self.nodes.len();
        self.nodes.push(TreeNode {
            priority,
            item,
            left: None,
            right: None,
        });

        let Some(mut current) = self.root else {
            self.root = Some(index);
            return;
        };

        loop {
            let node = &mut self.nodes[current];
            let slot = if priority < node.priority {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(child) => current = child,
                None => {
                    *slot = Some(index);
                    return;
                }
            }
        }
    }

    /// Every indexed element in ascending priority (left, root, right).
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<usize> = Vec::new();
        let mut cursor = self.root;

        while cursor.is_some() || !stack.is_empty() {
            while let Some(index) = cursor {
                stack.push(index);
                cursor = self.nodes[index].left;
            }
            let Some(index) = stack.pop() else {
                break;
            };
            let node = &self.nodes[index];
            out.push(&node.item);
            cursor = node.right;
        }
        out
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T> Default for PriorityIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn index_of(priorities: &[i64]) -> PriorityIndex<i64> {
        let mut index = PriorityIndex::new();
        for &p in priorities {
            index.add(Priority::new(p), p);
        }
        index
    }

    fn walk(index: &PriorityIndex<i64>) -> Vec<i64> {
        index.in_order().into_iter().copied().collect()
    }

    #[test]
    fn empty_index_walks_nothing() {
        let index: PriorityIndex<i64> = PriorityIndex::new();
        assert!(index.in_order().is_empty());
        assert!(index.is_empty());
    }

    #[rstest]
    #[case::shuffled(&[5, 1, 3], &[1, 3, 5])]
    #[case::ascending(&[1, 2, 3, 4], &[1, 2, 3, 4])]
    #[case::descending(&[4, 3, 2, 1], &[1, 2, 3, 4])]
    #[case::negative(&[0, -5, 7, -1], &[-5, -1, 0, 7])]
    fn walks_in_ascending_priority(#[case] input: &[i64], #[case] expected: &[i64]) {
        assert_eq!(walk(&index_of(input)), expected);
    }

    #[test]
    fn equal_priorities_keep_insertion_order() {
        let mut index = PriorityIndex::new();
        index.add(Priority::new(2), "first");
        index.add(Priority::new(1), "low");
        index.add(Priority::new(2), "second");
        index.add(Priority::new(2), "third");

        assert_eq!(
            index.in_order(),
            vec![&"low", &"first", &"second", &"third"]
        );
    }

    #[test]
    fn degenerate_tree_does_not_recurse() {
        let priorities: Vec<i64> = (0..5_000).collect();
        let index = index_of(&priorities);
        assert_eq!(index.len(), 5_000);
        assert_eq!(walk(&index), priorities);
    }
}
