mod bfs;
mod dfs;
mod dijkstra;
mod search_state;

use crate::algorithm::Algorithm;
use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::observer::notify_observers;
use search_state::{FrontierOrder, SearchState};
use std::{fmt, hash::Hash};

/// Result of a BFS or DFS run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<V> {
    /// Vertices in the order they were visited.
    pub visited: Vec<V>,
    pub reached_end: bool,
}

/// Result of a Dijkstra run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<V> {
    /// Start to end, both included.
    pub path: Vec<V>,
    pub cost: u64,
}

impl<V> ShortestPath<V> {
    pub fn step_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmOutcome<V> {
    Search(SearchOutcome<V>),
    ShortestPath(ShortestPath<V>),
}

impl<V> WeightedGraph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    pub fn run(&self, algorithm: Algorithm, start: &V, end: &V) -> Result<AlgorithmOutcome<V>> {
        match algorithm {
            Algorithm::Bfs => self.do_bfs(start, end).map(AlgorithmOutcome::Search),
            Algorithm::Dfs => self.do_dfs(start, end).map(AlgorithmOutcome::Search),
            Algorithm::Dijkstra => self
                .do_dijkstra(start, end)
                .map(AlgorithmOutcome::ShortestPath),
        }
    }

    /// Shared BFS/DFS loop; the frontier order is the only difference.
    fn run_search(&self, start: &V, end: &V, order: FrontierOrder) -> SearchOutcome<V> {
        let mut search_state = SearchState::new(start.clone(), order);

        while let Some(current_vertex) = search_state.next_unvisited() {
            notify_observers(self.observers(), |observer| observer.notify_visit(&current_vertex));
            search_state.record_visit(&current_vertex);
            tracing::trace!(vertex = ?current_vertex, "visit");

            if current_vertex == *end {
                notify_observers(self.observers(), |observer| observer.notify_search_is_over());
                return SearchOutcome {
                    visited: search_state.into_visit_order(),
                    reached_end: true,
                };
            }

            search_state.mark_visited(current_vertex.clone());
            for (neighbor, _) in self.neighbors(&current_vertex) {
                search_state.push_neighbor(neighbor);
            }
        }

        SearchOutcome {
            visited: search_state.into_visit_order(),
            reached_end: false,
        }
    }
}
