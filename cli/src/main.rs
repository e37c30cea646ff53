use clap::Parser;
use mazegraph::colors::ColorScheme;
use mazegraph::display::{display_search_info, display_search_results};
use mazegraph::logging::init_tracing;
use mazegraph::printer::StepPrinter;
use mazegraph::*;
use mazegraph_core::{GraphAlgorithmObserver, Juncture};
use std::{error::Error, rc::Rc};

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = init_tracing(args.verbose) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }

    if let Err(error) = run(args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn run(args: Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = MazeGraphApp::new(&args)?;
    let maze = app.load_maze()?;
    let (from, to) = resolve_endpoints(&args, &maze);

    let request = SearchRequest {
        maze,
        algorithm: args.algorithm,
        from,
        to,
    };

    if args.verbose {
        display_search_info(&request, &app.describe_source(), colors);
    }

    let mut observers: Vec<Rc<dyn GraphAlgorithmObserver<Juncture>>> = Vec::new();
    if !args.quiet {
        observers.push(Rc::new(StepPrinter::new(ColorScheme::new(!args.no_color))));
    }

    let result = execute_search(&request, observers)?;
    display_search_results(&result, args.verbose, colors);
    Ok(())
}
