use rustc_hash::FxHashSet;
use std::{collections::VecDeque, hash::Hash};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FrontierOrder {
    /// Queue: breadth-first.
    Fifo,
    /// Stack: depth-first.
    Lifo,
}

/// Frontier and visited set for one BFS or DFS run.
///
/// A vertex may sit in the frontier several times; only the first pop
/// that finds it unvisited is accepted.
pub(super) struct SearchState<V> {
    frontier: VecDeque<V>,
    visited: FxHashSet<V>,
    visit_order: Vec<V>,
    order: FrontierOrder,
}

impl<V: Eq + Hash + Clone> SearchState<V> {
    pub(super) fn new(start: V, order: FrontierOrder) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(start);

        Self {
            frontier,
            visited: FxHashSet::default(),
            visit_order: Vec::new(),
            order,
        }
    }

    /// Next vertex that has not been visited yet, discarding stale entries.
    pub(super) fn next_unvisited(&mut self) -> Option<V> {
        loop {
            let candidate = match self.order {
                FrontierOrder::Fifo => self.frontier.pop_front(),
                FrontierOrder::Lifo => self.frontier.pop_back(),
            }?;

            if !self.visited.contains(&candidate) {
                return Some(candidate);
            }
        }
    }

    pub(super) fn record_visit(&mut self, vertex: &V) {
        self.visit_order.push(vertex.clone());
    }

    pub(super) fn mark_visited(&mut self, vertex: V) {
        self.visited.insert(vertex);
    }

    pub(super) fn push_neighbor(&mut self, neighbor: &V) {
        if !self.visited.contains(neighbor) {
            self.frontier.push_back(neighbor.clone());
        }
    }

    pub(super) fn into_visit_order(self) -> Vec<V> {
        self.visit_order
    }
}
