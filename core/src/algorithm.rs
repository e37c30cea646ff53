use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }

    /// Human-readable name for console output.
    pub fn describe(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "breadth-first search",
            Algorithm::Dfs => "depth-first search",
            Algorithm::Dijkstra => "Dijkstra's shortest path",
        }
    }
}

// Unknown names fall back to BFS.
impl From<&str> for Algorithm {
    fn from(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "dfs" => Algorithm::Dfs,
            "dijkstra" => Algorithm::Dijkstra,
            _ => Algorithm::Bfs,
        }
    }
}

impl From<String> for Algorithm {
    fn from(name: String) -> Self {
        Algorithm::from(name.as_str())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
