pub mod algorithm;
pub mod error;
pub mod graph;
pub mod maze;
pub mod maze_graph;
pub mod observer;
pub mod traversal;

// Re-export commonly used items
pub use algorithm::Algorithm;
pub use error::{EdgeFault, GraphError, Result};
pub use graph::{Distance, Weight, WeightedGraph};
pub use maze::{Cell, Direction, GridMaze, Juncture, Maze, MazeError};
pub use maze_graph::maze_graph;
pub use observer::{AlgorithmEvent, EventRecorder, GraphAlgorithmObserver, TracingObserver};
pub use traversal::{AlgorithmOutcome, SearchOutcome, ShortestPath};
