use mazegraph_core::{GridMaze, Juncture, Maze};
use std::{error::Error, path::PathBuf};

use crate::args::{Args, Dimensions};

pub enum MazeSource {
    File(PathBuf),
    Open { dimensions: Dimensions, weight: u32 },
}

pub struct MazeGraphApp {
    pub source: MazeSource,
}

impl MazeGraphApp {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error>> {
        let source = match (&args.maze_file, args.open) {
            (Some(path), None) => {
                if !path.exists() {
                    return Err(format!("Maze file does not exist: {:?}", path).into());
                }
                MazeSource::File(path.clone())
            }
            (None, Some(dimensions)) => MazeSource::Open {
                dimensions,
                weight: args.weight,
            },
            _ => return Err("Pass either a maze file or --open WxH".into()),
        };

        Ok(Self { source })
    }

    pub fn load_maze(&self) -> Result<GridMaze, Box<dyn Error>> {
        let maze = match &self.source {
            MazeSource::File(path) => GridMaze::load(path)?,
            MazeSource::Open { dimensions, weight } => {
                GridMaze::open(dimensions.width, dimensions.height, *weight)?
            }
        };
        tracing::debug!(width = maze.width(), height = maze.height(), "loaded maze");
        Ok(maze)
    }

    pub fn describe_source(&self) -> String {
        match &self.source {
            MazeSource::File(path) => path.display().to_string(),
            MazeSource::Open { dimensions, weight } => {
                format!("open {} maze (weight {})", dimensions, weight)
            }
        }
    }
}

/// Start and end junctures, defaulting to opposite corners of the maze.
pub fn resolve_endpoints<M: Maze>(args: &Args, maze: &M) -> (Juncture, Juncture) {
    let from = args.from.unwrap_or(Juncture::new(0, 0));
    let to = args.to.unwrap_or(Juncture::new(
        maze.width() as i32 - 1,
        maze.height() as i32 - 1,
    ));
    (from, to)
}
