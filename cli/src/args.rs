use clap::Parser;
use mazegraph_core::{Algorithm, Juncture};
use std::{fmt, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "mazegraph")]
#[command(about = "Run BFS, DFS or Dijkstra across a maze and print every step")]
pub struct Args {
    /// Maze JSON file
    #[arg(required_unless_present = "open", conflicts_with = "open")]
    pub maze_file: Option<PathBuf>,

    /// Build an open maze of this size instead of reading a file
    #[arg(long, value_name = "WxH", value_parser = parse_dimensions)]
    pub open: Option<Dimensions>,

    /// Passage weight for --open mazes
    #[arg(long, value_name = "WEIGHT", default_value = "1")]
    pub weight: u32,

    /// Algorithm to run: bfs, dfs or dijkstra
    #[arg(
        short,
        long,
        env = "MAZEGRAPH_ALGORITHM",
        default_value = "bfs",
        value_parser = parse_algorithm
    )]
    pub algorithm: Algorithm,

    /// Start juncture (defaults to the upper-left corner)
    #[arg(short, long, value_name = "X,Y")]
    pub from: Option<Juncture>,

    /// End juncture (defaults to the lower-right corner)
    #[arg(short, long, value_name = "X,Y")]
    pub to: Option<Juncture>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode - only show the outcome, not every step
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode - show search info, statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse_dimensions(text: &str) -> Result<Dimensions, String> {
    let (width, height) = text
        .to_lowercase()
        .split_once('x')
        .map(|(w, h)| (w.trim().to_string(), h.trim().to_string()))
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", text))?;

    let width: usize = width
        .parse()
        .map_err(|_| format!("invalid width '{}'", width))?;
    let height: usize = height
        .parse()
        .map_err(|_| format!("invalid height '{}'", height))?;

    if width == 0 || height == 0 {
        return Err("maze dimensions must be at least 1x1".to_string());
    }
    Ok(Dimensions { width, height })
}

pub fn parse_algorithm(text: &str) -> Result<Algorithm, String> {
    let name = text.trim().to_lowercase();
    Algorithm::ALL
        .into_iter()
        .find(|algorithm| algorithm.as_str() == name)
        .ok_or_else(|| format!("unknown algorithm '{}' (expected bfs, dfs or dijkstra)", text))
}
