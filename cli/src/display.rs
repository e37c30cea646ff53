use mazegraph_core::{Algorithm, AlgorithmEvent, AlgorithmOutcome, Juncture};

use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};

pub fn display_search_info(request: &SearchRequest, source: &str, colors: &ColorScheme) {
    println!(
        "🧭 Searching {} from {} to {}",
        source,
        colors.juncture(&request.from.to_string()),
        colors.juncture(&request.to.to_string())
    );
    println!("⚙️  Using {}", request.algorithm.describe());
    println!("🔍 Searching...");
}

pub fn format_event(event: &AlgorithmEvent<Juncture>, step: usize, colors: &ColorScheme) -> String {
    match event {
        AlgorithmEvent::BfsHasBegun => colors.event(&begun_line(Algorithm::Bfs)).to_string(),
        AlgorithmEvent::DfsHasBegun => colors.event(&begun_line(Algorithm::Dfs)).to_string(),
        AlgorithmEvent::DijkstraHasBegun => {
            colors.event(&begun_line(Algorithm::Dijkstra)).to_string()
        }
        AlgorithmEvent::Visit { vertex } => format!(
            "{:>4} visit {}",
            colors.number(&format!("{}.", step)),
            colors.juncture(&vertex.to_string())
        ),
        AlgorithmEvent::SearchIsOver => colors.success("🏁 Search is over").to_string(),
        AlgorithmEvent::DijkstraVertexFinished { vertex, cost } => format!(
            "{:>4} finished {} at cost {}",
            colors.number(&format!("{}.", step)),
            colors.juncture(&vertex.to_string()),
            colors.cost(&cost.to_string())
        ),
        AlgorithmEvent::DijkstraIsOver { path } => format!(
            "{} {}",
            colors.success("🏁 Dijkstra is over:"),
            format_path(path, colors)
        ),
    }
}

fn begun_line(algorithm: Algorithm) -> String {
    let description = algorithm.describe();
    let mut capitalized = description.chars();
    match capitalized.next() {
        Some(first) => format!("▶ {}{} has begun", first.to_uppercase(), capitalized.as_str()),
        None => String::new(),
    }
}

pub fn format_path(path: &[Juncture], colors: &ColorScheme) -> String {
    path.iter()
        .map(|juncture| colors.juncture(&juncture.to_string()).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn display_search_results(result: &SearchResult, verbose: bool, colors: &ColorScheme) {
    if verbose {
        println!("\n---\n");
    }

    let explored = match &result.outcome {
        AlgorithmOutcome::Search(search) => {
            if search.reached_end {
                println!(
                    "{} Reached {} after visiting {} junctures",
                    colors.success("✅"),
                    colors.juncture(&result.to.to_string()),
                    colors.number(&format_number(search.visited.len()))
                );
            } else {
                println!(
                    "{} {} is unreachable from {}",
                    colors.error("❌"),
                    colors.juncture(&result.to.to_string()),
                    colors.juncture(&result.from.to_string())
                );
            }
            search.visited.len()
        }
        AlgorithmOutcome::ShortestPath(shortest) => {
            println!(
                "{} Found path with {} steps, total cost {}:\n",
                colors.success("✅"),
                colors.number(&shortest.step_count().to_string()),
                colors.cost(&shortest.cost.to_string())
            );
            println!("{}", format_path(&shortest.path, colors));
            result.vertex_count
        }
    };

    if verbose {
        println!("\n---\n");
        println!("{}", format_statistics(result.algorithm, explored, result.search_duration, colors));
    }
}

pub fn format_statistics(
    algorithm: Algorithm,
    junctures_explored: usize,
    search_duration: f64,
    colors: &ColorScheme,
) -> String {
    format!(
        "📊 {} explored {} junctures in {} sec",
        colors.event(algorithm.as_str()),
        colors.number(&format_number(junctures_explored)),
        colors.number(&format!("{:.3}", search_duration))
    )
}

pub fn format_number(number: usize) -> String {
    let digits = number.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}
