use mazegraph_core::{
    Algorithm, AlgorithmOutcome, GraphAlgorithmObserver, GraphError, GridMaze, Juncture,
    TracingObserver, maze_graph,
};
use std::{rc::Rc, time::Instant};

pub struct SearchRequest {
    pub maze: GridMaze,
    pub algorithm: Algorithm,
    pub from: Juncture,
    pub to: Juncture,
}

pub struct SearchResult {
    pub outcome: AlgorithmOutcome<Juncture>,
    pub algorithm: Algorithm,
    pub from: Juncture,
    pub to: Juncture,
    pub vertex_count: usize,
    pub search_duration: f64,
}

/// Builds the maze graph, registers `observers` plus a tracing observer and
/// runs the requested algorithm.
pub fn execute_search(
    request: &SearchRequest,
    observers: Vec<Rc<dyn GraphAlgorithmObserver<Juncture>>>,
) -> Result<SearchResult, GraphError> {
    let mut graph = maze_graph(&request.maze)?;
    for observer in observers {
        graph.add_observer(observer);
    }
    graph.add_observer(Rc::new(TracingObserver));

    let search_timer = Instant::now();
    let outcome = graph.run(request.algorithm, &request.from, &request.to)?;
    let search_duration = search_timer.elapsed().as_secs_f64();

    Ok(SearchResult {
        outcome,
        algorithm: request.algorithm,
        from: request.from,
        to: request.to,
        vertex_count: graph.vertex_count(),
        search_duration,
    })
}
