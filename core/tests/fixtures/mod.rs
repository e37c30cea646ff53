#![allow(dead_code)]

use mazegraph_core::{EventRecorder, WeightedGraph};
use std::rc::Rc;

pub fn graph_with_vertices(vertices: &[&'static str]) -> WeightedGraph<&'static str> {
    let mut graph = WeightedGraph::new();
    for vertex in vertices {
        graph.add_vertex(*vertex).unwrap();
    }
    graph
}

pub fn connect(graph: &mut WeightedGraph<&'static str>, edges: &[(&'static str, &'static str, i64)]) {
    for (from, to, weight) in edges {
        graph.add_edge(from, to, *weight).unwrap();
    }
}

/// A -> B (1), B -> C (2), A -> C (5), C -> D (1), plus an isolated E.
pub fn diamond_graph() -> WeightedGraph<&'static str> {
    let mut graph = graph_with_vertices(&["A", "B", "C", "D", "E"]);
    connect(
        &mut graph,
        &[("A", "B", 1), ("B", "C", 2), ("A", "C", 5), ("C", "D", 1)],
    );
    graph
}

/// A straight chain A -> B -> C -> D, each step weighing 1.
pub fn chain_graph() -> WeightedGraph<&'static str> {
    let mut graph = graph_with_vertices(&["A", "B", "C", "D"]);
    connect(&mut graph, &[("A", "B", 1), ("B", "C", 1), ("C", "D", 1)]);
    graph
}

pub fn record(graph: &mut WeightedGraph<&'static str>) -> Rc<EventRecorder<&'static str>> {
    let recorder = EventRecorder::<&'static str>::new();
    graph.add_observer(recorder.clone());
    recorder
}
