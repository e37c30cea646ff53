use mazegraph_core::{
    Direction, EventRecorder, GridMaze, Juncture, Maze, MazeError, maze_graph,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn j(x: i32, y: i32) -> Juncture {
    Juncture::new(x, y)
}

#[test]
fn test_open_maze_becomes_bidirectional_grid() {
    let maze = GridMaze::open(2, 2, 1).unwrap();

    let graph = maze_graph(&maze).unwrap();

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 8);
    assert_eq!(graph.get_weight(&j(0, 0), &j(1, 0)).unwrap(), Some(1));
    assert_eq!(graph.get_weight(&j(1, 0), &j(0, 0)).unwrap(), Some(1));
    // No diagonal moves.
    assert_eq!(graph.get_weight(&j(0, 0), &j(1, 1)).unwrap(), None);
}

#[test]
fn test_walls_remove_both_directions() {
    let mut maze = GridMaze::open(2, 2, 1).unwrap();
    maze.add_wall(j(0, 0), Direction::Right).unwrap();

    let graph = maze_graph(&maze).unwrap();

    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.get_weight(&j(0, 0), &j(1, 0)).unwrap(), None);
    assert_eq!(graph.get_weight(&j(1, 0), &j(0, 0)).unwrap(), None);
}

#[test]
fn test_directional_weights_from_json() {
    let maze = GridMaze::from_json(
        r#"{"width": 2, "height": 1, "cells": [{"right": 3, "up": 9}, {"left": 7}]}"#,
    )
    .unwrap();

    let graph = maze_graph(&maze).unwrap();

    assert_eq!(graph.get_weight(&j(0, 0), &j(1, 0)).unwrap(), Some(3));
    assert_eq!(graph.get_weight(&j(1, 0), &j(0, 0)).unwrap(), Some(7));
    // The passage leading off the top edge is dropped.
    assert_eq!(graph.edge_count(), 2);
    assert!(!graph.contains_vertex(&j(0, -1)));
}

#[test]
fn test_maze_trait_queries() {
    let maze = GridMaze::from_json(r#"{"width": 2, "height": 1, "cells": [{"right": 3}, {}]}"#)
        .unwrap();

    assert_eq!(maze.width(), 2);
    assert_eq!(maze.height(), 1);
    assert!(!maze.is_wall(j(0, 0), Direction::Right));
    assert!(maze.is_wall(j(1, 0), Direction::Left));
    assert_eq!(maze.weight(j(0, 0), Direction::Right), 3);
    assert!(maze.contains(j(1, 0)));
    assert!(!maze.contains(j(2, 0)));
    assert!(!maze.contains(j(-1, 0)));
}

#[test]
fn test_cell_count_mismatch_is_rejected() {
    let error = GridMaze::from_json(r#"{"width": 2, "height": 2, "cells": [{}, {}, {}]}"#)
        .unwrap_err();

    assert!(matches!(
        error,
        MazeError::CellCount {
            expected: 4,
            actual: 3
        }
    ));
}

#[test]
fn test_empty_and_malformed_mazes_are_rejected() {
    assert!(matches!(
        GridMaze::from_json(r#"{"width": 0, "height": 3, "cells": []}"#),
        Err(MazeError::EmptyMaze)
    ));
    assert!(matches!(
        GridMaze::from_json("{not json"),
        Err(MazeError::Json(_))
    ));
    assert!(matches!(GridMaze::open(0, 0, 1), Err(MazeError::EmptyMaze)));
}

#[test]
fn test_oversized_mazes_are_rejected() {
    // 2^63 x 2 cells overflows usize.
    let overflowing = GridMaze::from_json(
        r#"{"width": 9223372036854775808, "height": 2, "cells": []}"#,
    );
    assert!(matches!(
        overflowing,
        Err(MazeError::TooLarge {
            width: 9223372036854775808,
            height: 2
        })
    ));

    let too_wide = i32::MAX as usize + 1;
    assert!(matches!(
        GridMaze::new(too_wide, 1, Vec::new()),
        Err(MazeError::TooLarge { .. })
    ));
    assert!(matches!(
        GridMaze::open(1, too_wide, 1),
        Err(MazeError::TooLarge { .. })
    ));
}

#[test]
fn test_one_sided_passage_is_one_way_edge() {
    let maze = GridMaze::from_json(r#"{"width": 2, "height": 1, "cells": [{"right": 3}, {}]}"#)
        .unwrap();

    let graph = maze_graph(&maze).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_weight(&j(0, 0), &j(1, 0)).unwrap(), Some(3));
    assert_eq!(graph.get_weight(&j(1, 0), &j(0, 0)).unwrap(), None);
}

#[test]
fn test_set_passage_outside_maze_fails() {
    let mut maze = GridMaze::open(1, 1, 1).unwrap();

    let error = maze.set_passage(j(3, 3), Direction::Up, Some(1)).unwrap_err();

    assert!(matches!(error, MazeError::OutOfBounds(juncture) if juncture == j(3, 3)));
}

#[test]
fn test_load_maze_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"width": 1, "height": 2, "cells": [{{"down": 2}}, {{"up": 5}}]}}"#
    )
    .unwrap();
    file.flush().unwrap();

    let maze = GridMaze::load(file.path()).unwrap();
    let graph = maze_graph(&maze).unwrap();

    assert_eq!(graph.get_weight(&j(0, 0), &j(0, 1)).unwrap(), Some(2));
    assert_eq!(graph.get_weight(&j(0, 1), &j(0, 0)).unwrap(), Some(5));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let error = GridMaze::load(&dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(error, MazeError::Io(_)));
}

#[test]
fn test_dijkstra_across_open_maze() {
    let maze = GridMaze::open(3, 3, 1).unwrap();
    let mut graph = maze_graph(&maze).unwrap();
    let recorder = EventRecorder::<Juncture>::new();
    graph.add_observer(recorder.clone());

    let shortest = graph.do_dijkstra(&j(0, 0), &j(2, 2)).unwrap();

    assert_eq!(shortest.cost, 4);
    assert_eq!(shortest.path.len(), 5);
    assert_eq!(shortest.path.first(), Some(&j(0, 0)));
    assert_eq!(shortest.path.last(), Some(&j(2, 2)));
    assert_eq!(recorder.finished().len(), 9);
}

#[test]
fn test_bfs_through_walled_corridor() {
    // A 3x1 corridor with the middle cut off from the right end.
    let mut maze = GridMaze::open(3, 1, 1).unwrap();
    maze.add_wall(j(1, 0), Direction::Right).unwrap();
    let graph = maze_graph(&maze).unwrap();

    let outcome = graph.do_bfs(&j(0, 0), &j(2, 0)).unwrap();

    assert!(!outcome.reached_end);
    assert_eq!(outcome.visited, vec![j(0, 0), j(1, 0)]);
}

#[test]
fn test_juncture_parse_and_display() {
    assert_eq!("2,3".parse::<Juncture>().unwrap(), j(2, 3));
    assert_eq!("(4, 5)".parse::<Juncture>().unwrap(), j(4, 5));
    assert!("4".parse::<Juncture>().is_err());
    assert!("a,b".parse::<Juncture>().is_err());
    assert_eq!(j(1, 2).to_string(), "(1, 2)");
    assert_eq!(j(1, 1).step(Direction::Up), j(1, 0));
}
