use crate::error::{EdgeFault, GraphError, Result};
use crate::observer::GraphAlgorithmObserver;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::{fmt, hash::Hash, rc::Rc};

pub type Weight = u32;

/// Shortest-path cost from the start vertex.
///
/// `Unreachable` orders after every finite cost and stands in for infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Distance {
    Finite(u64),
    Unreachable,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(&self) -> Option<u64> {
        match self {
            Distance::Finite(cost) => Some(*cost),
            Distance::Unreachable => None,
        }
    }

    pub(crate) fn extend(&self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(cost) => Distance::Finite(cost.saturating_add(u64::from(weight))),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(cost) => write!(f, "{}", cost),
            Distance::Unreachable => write!(f, "∞"),
        }
    }
}

/// Directed graph with non-negative integer edge weights.
///
/// Each vertex owns a map of its outgoing edges; there is at most one edge
/// per ordered pair. Registered observers are notified, in registration
/// order, while the algorithms in [`crate::traversal`] run.
pub struct WeightedGraph<V> {
    adjacency: FxHashMap<V, FxHashMap<V, Weight>>,
    observers: Vec<Rc<dyn GraphAlgorithmObserver<V>>>,
}

impl<V> WeightedGraph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            adjacency: FxHashMap::default(),
            observers: Vec::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        let mut adjacency = FxHashMap::default();
        adjacency.reserve(vertex_count);

        Self {
            adjacency,
            observers: Vec::new(),
        }
    }

    /// Registers an observer. Registering the same `Rc` twice has no effect.
    pub fn add_observer(&mut self, observer: Rc<dyn GraphAlgorithmObserver<V>>) {
        if self
            .observers
            .iter()
            .any(|registered| Rc::ptr_eq(registered, &observer))
        {
            return;
        }
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.contains_vertex(&vertex) {
            return Err(GraphError::duplicate_vertex(&vertex));
        }
        self.adjacency.insert(vertex, FxHashMap::default());
        Ok(())
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Sets the weight of the directed edge `from -> to`, replacing any
    /// previous weight for that pair.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: i64) -> Result<()> {
        self.check_endpoints(from, to)?;

        if weight < 0 {
            return Err(GraphError::invalid_edge(from, to, EdgeFault::NegativeWeight(weight)));
        }
        let weight = Weight::try_from(weight)
            .map_err(|_| GraphError::invalid_edge(from, to, EdgeFault::WeightOutOfRange(weight)))?;

        if let Some(outgoing_edges) = self.adjacency.get_mut(from) {
            outgoing_edges.insert(to.clone(), weight);
        }
        Ok(())
    }

    /// Weight of `from -> to`, or `None` when the two vertices exist but
    /// are not connected in that direction.
    pub fn get_weight(&self, from: &V, to: &V) -> Result<Option<Weight>> {
        self.check_endpoints(from, to)?;
        Ok(self
            .adjacency
            .get(from)
            .and_then(|outgoing_edges| outgoing_edges.get(to))
            .copied())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Outgoing edges of `vertex`. Empty for unknown vertices.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, Weight)> + use<'a, V> {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|outgoing_edges| outgoing_edges.iter().map(|(to, &weight)| (to, weight)))
    }

    pub(crate) fn observers(&self) -> &[Rc<dyn GraphAlgorithmObserver<V>>] {
        &self.observers
    }

    pub(crate) fn check_traversal_endpoints(&self, start: &V, end: &V) -> Result<()> {
        for endpoint in [start, end] {
            if !self.contains_vertex(endpoint) {
                return Err(GraphError::unknown_endpoint(endpoint));
            }
        }
        Ok(())
    }

    fn check_endpoints(&self, from: &V, to: &V) -> Result<()> {
        if !self.contains_vertex(from) {
            return Err(GraphError::invalid_edge(from, to, EdgeFault::MissingSource));
        }
        if !self.contains_vertex(to) {
            return Err(GraphError::invalid_edge(from, to, EdgeFault::MissingTarget));
        }
        Ok(())
    }
}

impl<V> Default for WeightedGraph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
