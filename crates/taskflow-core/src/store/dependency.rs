//! Dependency graph for tracking which tasks wait for which.
//!
//! Design:
//! - Edges: task -> tasks it depends on (waits for), in the order added
//! - Vertices are remembered in registration order, which fixes the order
//!   cycle detection probes them in
//! - Edges are only recorded between registered vertices
//! - Nothing is ever removed; finished and deleted tasks keep their vertex

use std::collections::{HashMap, HashSet};

use crate::domain::TaskId;

/// Directed graph of task-id adjacency.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Forward edges: task -> tasks it depends on.
    edges: HashMap<TaskId, Vec<TaskId>>,

    /// Vertices in registration order.
    order: Vec<TaskId>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `task` with no edges. Registering twice changes nothing.
    pub fn add_vertex(&mut self, task: TaskId) {
        if !self.edges.contains_key(&task) {
            self.edges.insert(task, Vec::new());
            self.order.push(task);
        }
    }

    /// Add an edge: `task` depends on `depends_on`.
    ///
    /// Example: add_edge(task_b, task_a) means "B waits for A".
    ///
    /// Returns `false` without touching the graph when either vertex is
    /// unknown. Duplicate edges are kept, and edges closing a cycle are
    /// accepted.
    pub fn add_edge(&mut self, task: TaskId, depends_on: TaskId) -> bool {
        if !self.edges.contains_key(&depends_on) {
            return false;
        }
        match self.edges.get_mut(&task) {
            Some(deps) => {
                deps.push(depends_on);
                true
            }
            None => false,
        }
    }

    /// Everything `task` depends on, or an empty slice for unknown tasks.
    pub fn adjacent(&self, task: TaskId) -> &[TaskId] {
        self.edges.get(&task).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, task: TaskId) -> bool {
        self.edges.contains_key(&task)
    }

    /// Vertices in registration order.
    pub fn vertices(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether any cycle exists anywhere in the graph.
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// Detect a cycle in the dependency graph.
    ///
    /// Returns the first cycle found as a closed path (`[a, b, c, a]`), or
    /// `None` if the graph is acyclic.
    ///
    /// Depth-first search from every vertex not yet visited, in registration
    /// order, with two marker sets:
    /// - `visited`: entered at some point. Reaching one that is no longer on
    ///   the path means its subtree was already explored without a cycle.
    /// - `in_stack`: on the current path. Reaching one of these is a cycle.
    ///
    /// A vertex leaves `in_stack` once all its edges are explored. The search
    /// stops at the first cycle. Frames live on an explicit stack instead of
    /// the call stack.
    pub fn find_cycle(&self) -> Option<Vec<TaskId>> {
        let mut visited: HashSet<TaskId> = HashSet::new();
        let mut in_stack: HashSet<TaskId> = HashSet::new();

        for start in self.vertices() {
            if visited.contains(&start) {
                continue;
            }
            if let Some(cycle) = self.probe(start, &mut visited, &mut in_stack) {
                return Some(cycle);
            }
        }
        None
    }

    fn probe(
        &self,
        start: TaskId,
        visited: &mut HashSet<TaskId>,
        in_stack: &mut HashSet<TaskId>,
    ) -> Option<Vec<TaskId>> {
        // (vertex, index of the next edge to follow)
        let mut frames: Vec<(TaskId, usize)> = vec![(start, 0)];
        visited.insert(start);
        in_stack.insert(start);

        while let Some(frame) = frames.last_mut() {
            let (vertex, cursor) = *frame;
            let Some(&next) = self.adjacent(vertex).get(cursor) else {
                // Every edge explored: backtrack.
                in_stack.remove(&vertex);
                frames.pop();
                continue;
            };
            frame.1 += 1;

            if in_stack.contains(&next) {
                return Some(Self::close_cycle(&frames, next));
            }
            if visited.insert(next) {
                in_stack.insert(next);
                frames.push((next, 0));
            }
        }
        None
    }

    /// Path from the first occurrence of `join` on the stack back to `join`.
    fn close_cycle(frames: &[(TaskId, usize)], join: TaskId) -> Vec<TaskId> {
        let from = frames
            .iter()
            .position(|&(vertex, _)| vertex == join)
            .unwrap_or(0);
        let mut cycle: Vec<TaskId> = frames[from..].iter().map(|&(vertex, _)| vertex).collect();
        cycle.push(join);
        cycle
    }
}
