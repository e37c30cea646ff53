use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::maze::{Direction, Juncture, Maze};

/// Converts a maze into a graph with one vertex per juncture and one
/// directed edge per open passage, weighted by the maze.
///
/// Each side of a juncture is read on its own, so a passage open on one
/// side only becomes a one-way edge. Passages that lead off the grid are
/// dropped as if they were walls.
pub fn maze_graph<M: Maze>(maze: &M) -> Result<WeightedGraph<Juncture>> {
    let mut graph = WeightedGraph::with_capacity(maze.width().saturating_mul(maze.height()));

    for juncture in junctures(maze) {
        graph.add_vertex(juncture)?;
    }

    for juncture in junctures(maze) {
        for direction in Direction::ALL {
            if maze.is_wall(juncture, direction) {
                continue;
            }

            let neighbor = juncture.step(direction);
            if !maze.contains(neighbor) {
                tracing::warn!(%juncture, ?direction, "dropping passage that leaves the maze");
                continue;
            }

            let weight = maze.weight(juncture, direction);
            graph.add_edge(&juncture, &neighbor, i64::from(weight))?;
        }
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "built maze graph"
    );
    Ok(graph)
}

fn junctures<M: Maze>(maze: &M) -> impl Iterator<Item = Juncture> + use<M> {
    let width = i32::try_from(maze.width()).unwrap_or(i32::MAX);
    let height = i32::try_from(maze.height()).unwrap_or(i32::MAX);
    (0..width).flat_map(move |x| (0..height).map(move |y| Juncture::new(x, y)))
}
