use crate::graph::Distance;
use serde::Serialize;
use std::{cell::RefCell, fmt, rc::Rc};

/// Listener for algorithm progress.
///
/// Hooks are called synchronously, in processing order, on the thread
/// running the algorithm. Every hook has an empty default body so a
/// listener only implements what it cares about.
pub trait GraphAlgorithmObserver<V> {
    fn notify_bfs_has_begun(&self) {}

    fn notify_dfs_has_begun(&self) {}

    fn notify_dijkstra_has_begun(&self) {}

    /// A vertex was taken off the frontier and accepted (BFS and DFS only).
    fn notify_visit(&self, _vertex: &V) {}

    /// The end vertex was just visited (BFS and DFS only).
    fn notify_search_is_over(&self) {}

    fn notify_dijkstra_vertex_finished(&self, _vertex: &V, _cost: Distance) {}

    /// Cheapest path from start to end, both included.
    fn notify_dijkstra_is_over(&self, _path: &[V]) {}
}

pub(crate) fn notify_observers<V, F>(observers: &[Rc<dyn GraphAlgorithmObserver<V>>], notify: F)
where
    F: Fn(&dyn GraphAlgorithmObserver<V>),
{
    for observer in observers {
        notify(observer.as_ref());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AlgorithmEvent<V> {
    BfsHasBegun,
    DfsHasBegun,
    DijkstraHasBegun,
    Visit { vertex: V },
    SearchIsOver,
    DijkstraVertexFinished { vertex: V, cost: Distance },
    DijkstraIsOver { path: Vec<V> },
}

/// Observer that keeps every notification it receives, in order.
pub struct EventRecorder<V> {
    events: RefCell<Vec<AlgorithmEvent<V>>>,
}

impl<V: Clone> EventRecorder<V> {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            events: RefCell::new(Vec::new()),
        })
    }

    pub fn events(&self) -> Vec<AlgorithmEvent<V>> {
        self.events.borrow().clone()
    }

    pub fn visited(&self) -> Vec<V> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                AlgorithmEvent::Visit { vertex } => Some(vertex.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn finished(&self) -> Vec<(V, Distance)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                AlgorithmEvent::DijkstraVertexFinished { vertex, cost } => {
                    Some((vertex.clone(), *cost))
                }
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: AlgorithmEvent<V>) {
        self.events.borrow_mut().push(event);
    }
}

impl<V: Clone> GraphAlgorithmObserver<V> for EventRecorder<V> {
    fn notify_bfs_has_begun(&self) {
        self.record(AlgorithmEvent::BfsHasBegun);
    }

    fn notify_dfs_has_begun(&self) {
        self.record(AlgorithmEvent::DfsHasBegun);
    }

    fn notify_dijkstra_has_begun(&self) {
        self.record(AlgorithmEvent::DijkstraHasBegun);
    }

    fn notify_visit(&self, vertex: &V) {
        self.record(AlgorithmEvent::Visit {
            vertex: vertex.clone(),
        });
    }

    fn notify_search_is_over(&self) {
        self.record(AlgorithmEvent::SearchIsOver);
    }

    fn notify_dijkstra_vertex_finished(&self, vertex: &V, cost: Distance) {
        self.record(AlgorithmEvent::DijkstraVertexFinished {
            vertex: vertex.clone(),
            cost,
        });
    }

    fn notify_dijkstra_is_over(&self, path: &[V]) {
        self.record(AlgorithmEvent::DijkstraIsOver {
            path: path.to_vec(),
        });
    }
}

/// Forwards every notification to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl<V: fmt::Debug> GraphAlgorithmObserver<V> for TracingObserver {
    fn notify_bfs_has_begun(&self) {
        tracing::debug!("bfs has begun");
    }

    fn notify_dfs_has_begun(&self) {
        tracing::debug!("dfs has begun");
    }

    fn notify_dijkstra_has_begun(&self) {
        tracing::debug!("dijkstra has begun");
    }

    fn notify_visit(&self, vertex: &V) {
        tracing::trace!(?vertex, "visit");
    }

    fn notify_search_is_over(&self) {
        tracing::debug!("search is over");
    }

    fn notify_dijkstra_vertex_finished(&self, vertex: &V, cost: Distance) {
        tracing::trace!(?vertex, %cost, "vertex finished");
    }

    fn notify_dijkstra_is_over(&self, path: &[V]) {
        tracing::debug!(path_len = path.len(), "dijkstra is over");
    }
}
