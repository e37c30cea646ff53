use mazegraph::colors::ColorScheme;
use mazegraph::display::{format_event, format_number, format_path, format_statistics};
use mazegraph_core::{Algorithm, AlgorithmEvent, Distance, Juncture};

#[test]
fn test_format_number() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(999), "999");
    assert_eq!(format_number(1000), "1,000");
    assert_eq!(format_number(1234567), "1,234,567");
}

#[test]
fn test_format_events_without_colors() {
    let colors = ColorScheme::new(false);

    let begun = format_event(&AlgorithmEvent::DijkstraHasBegun, 0, &colors);
    let visit = format_event(
        &AlgorithmEvent::Visit {
            vertex: Juncture::new(2, 1),
        },
        3,
        &colors,
    );
    let finished = format_event(
        &AlgorithmEvent::DijkstraVertexFinished {
            vertex: Juncture::new(0, 4),
            cost: Distance::Finite(12),
        },
        5,
        &colors,
    );
    let unreachable = format_event(
        &AlgorithmEvent::DijkstraVertexFinished {
            vertex: Juncture::new(9, 9),
            cost: Distance::Unreachable,
        },
        6,
        &colors,
    );

    assert_eq!(begun, "▶ Dijkstra's shortest path has begun");
    assert!(visit.ends_with("3. visit (2, 1)"));
    assert!(finished.ends_with("5. finished (0, 4) at cost 12"));
    assert!(unreachable.ends_with("at cost ∞"));
    assert_eq!(
        format_event(&AlgorithmEvent::BfsHasBegun, 0, &colors),
        "▶ Breadth-first search has begun"
    );
}

#[test]
fn test_format_path_and_dijkstra_is_over() {
    let colors = ColorScheme::new(false);
    let path = vec![Juncture::new(0, 0), Juncture::new(1, 0), Juncture::new(1, 1)];

    assert_eq!(format_path(&path, &colors), "(0, 0) → (1, 0) → (1, 1)");
    assert_eq!(
        format_event(&AlgorithmEvent::DijkstraIsOver { path }, 0, &colors),
        "🏁 Dijkstra is over: (0, 0) → (1, 0) → (1, 1)"
    );
}

#[test]
fn test_format_statistics_names_the_algorithm() {
    let colors = ColorScheme::new(false);

    let line = format_statistics(Algorithm::Dijkstra, 12345, 0.0421, &colors);

    assert_eq!(line, "📊 dijkstra explored 12,345 junctures in 0.042 sec");
}
