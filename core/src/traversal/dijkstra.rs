use super::ShortestPath;
use crate::error::{GraphError, Result};
use crate::graph::{Distance, Weight, WeightedGraph};
use crate::observer::notify_observers;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{fmt, hash::Hash};

struct DijkstraState<V> {
    costs: FxHashMap<V, Distance>,
    predecessors: FxHashMap<V, V>,
    finished: FxHashSet<V>,
}

impl<V: Eq + Hash + Clone> DijkstraState<V> {
    fn new<'a>(vertices: impl Iterator<Item = &'a V>, start: &V) -> Self
    where
        V: 'a,
    {
        let mut costs: FxHashMap<V, Distance> = vertices
            .map(|vertex| (vertex.clone(), Distance::Unreachable))
            .collect();
        let mut predecessors = FxHashMap::default();

        costs.insert(start.clone(), Distance::Finite(0));
        predecessors.insert(start.clone(), start.clone());

        Self {
            costs,
            predecessors,
            finished: FxHashSet::default(),
        }
    }

    fn cost_of(&self, vertex: &V) -> Distance {
        self.costs
            .get(vertex)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    fn is_complete(&self) -> bool {
        self.finished.len() == self.costs.len()
    }

    /// Cheapest unfinished vertex; ties go to the first one in `candidates`.
    fn cheapest_unfinished<'a>(&self, candidates: impl Iterator<Item = &'a V>) -> Option<V>
    where
        V: 'a,
    {
        candidates
            .filter(|vertex| !self.finished.contains(*vertex))
            .min_by_key(|vertex| self.cost_of(vertex))
            .cloned()
    }

    fn relax(&mut self, current: &V, neighbor: &V, edge_weight: Weight) {
        let candidate_cost = self.cost_of(current).extend(edge_weight);

        if candidate_cost < self.cost_of(neighbor) {
            self.costs.insert(neighbor.clone(), candidate_cost);
            self.predecessors.insert(neighbor.clone(), current.clone());
        }
    }

    /// Walks predecessor links back from `end`. `None` when `end` was never
    /// reached or the chain does not lead back to `start`.
    fn reconstruct_path(&self, start: &V, end: &V) -> Option<Vec<V>> {
        if !self.cost_of(end).is_finite() {
            return None;
        }

        let mut path = vec![end.clone()];
        let mut current_vertex = end;

        while current_vertex != start {
            if path.len() > self.costs.len() {
                return None;
            }
            let predecessor = self.predecessors.get(current_vertex)?;
            path.push(predecessor.clone());
            current_vertex = predecessor;
        }

        path.reverse();
        Some(path)
    }
}

impl<V> WeightedGraph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Dijkstra's shortest paths from `start`, finishing every vertex of the
    /// graph before reporting the cheapest path to `end`.
    ///
    /// Vertex selection is a linear scan over the unfinished set, so a run
    /// costs O(V²). Vertices unreachable from `start` are finished last with
    /// [`Distance::Unreachable`]. If `end` is one of them the run fails with
    /// [`GraphError::UnreachablePath`] and `notify_dijkstra_is_over` is not
    /// sent.
    pub fn do_dijkstra(&self, start: &V, end: &V) -> Result<ShortestPath<V>> {
        self.check_traversal_endpoints(start, end)?;
        tracing::debug!(?start, ?end, vertices = self.vertex_count(), "starting dijkstra");

        let mut dijkstra_state = DijkstraState::new(self.vertices(), start);
        notify_observers(self.observers(), |observer| observer.notify_dijkstra_has_begun());

        while !dijkstra_state.is_complete() {
            let Some(current_vertex) = dijkstra_state.cheapest_unfinished(self.vertices()) else {
                break;
            };
            let current_cost = dijkstra_state.cost_of(&current_vertex);

            notify_observers(self.observers(), |observer| {
                observer.notify_dijkstra_vertex_finished(&current_vertex, current_cost)
            });
            tracing::trace!(vertex = ?current_vertex, cost = %current_cost, "vertex finished");
            dijkstra_state.finished.insert(current_vertex.clone());

            for (neighbor, edge_weight) in self.neighbors(&current_vertex) {
                dijkstra_state.relax(&current_vertex, neighbor, edge_weight);
            }
        }

        let Some(path) = dijkstra_state.reconstruct_path(start, end) else {
            tracing::debug!(?start, ?end, "end vertex is unreachable");
            return Err(GraphError::unreachable_path(start, end));
        };
        let cost = dijkstra_state.cost_of(end).finite().unwrap_or_default();

        notify_observers(self.observers(), |observer| observer.notify_dijkstra_is_over(&path));
        tracing::debug!(cost, steps = path.len().saturating_sub(1), "dijkstra finished");

        Ok(ShortestPath { path, cost })
    }
}
