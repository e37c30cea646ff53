use mazegraph_core::{AlgorithmEvent, Distance, GraphAlgorithmObserver, Juncture};
use std::cell::Cell;

use crate::colors::ColorScheme;
use crate::display::format_event;

/// Console listener that prints one line per algorithm notification.
pub struct StepPrinter {
    colors: ColorScheme,
    step: Cell<usize>,
}

impl StepPrinter {
    pub fn new(colors: ColorScheme) -> Self {
        Self {
            colors,
            step: Cell::new(0),
        }
    }

    fn print(&self, event: AlgorithmEvent<Juncture>) {
        println!("{}", format_event(&event, self.step.get(), &self.colors));
    }

    fn print_step(&self, event: AlgorithmEvent<Juncture>) {
        self.step.set(self.step.get() + 1);
        self.print(event);
    }

    fn restart(&self, event: AlgorithmEvent<Juncture>) {
        self.step.set(0);
        self.print(event);
    }
}

impl GraphAlgorithmObserver<Juncture> for StepPrinter {
    fn notify_bfs_has_begun(&self) {
        self.restart(AlgorithmEvent::BfsHasBegun);
    }

    fn notify_dfs_has_begun(&self) {
        self.restart(AlgorithmEvent::DfsHasBegun);
    }

    fn notify_dijkstra_has_begun(&self) {
        self.restart(AlgorithmEvent::DijkstraHasBegun);
    }

    fn notify_visit(&self, vertex: &Juncture) {
        self.print_step(AlgorithmEvent::Visit { vertex: *vertex });
    }

    fn notify_search_is_over(&self) {
        self.print(AlgorithmEvent::SearchIsOver);
    }

    fn notify_dijkstra_vertex_finished(&self, vertex: &Juncture, cost: Distance) {
        self.print_step(AlgorithmEvent::DijkstraVertexFinished {
            vertex: *vertex,
            cost,
        });
    }

    fn notify_dijkstra_is_over(&self, path: &[Juncture]) {
        self.print(AlgorithmEvent::DijkstraIsOver {
            path: path.to_vec(),
        });
    }
}
