use super::{SearchOutcome, search_state::FrontierOrder};
use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::observer::notify_observers;
use std::{fmt, hash::Hash};

impl<V> WeightedGraph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Breadth-first search from `start`, stopping right after `end` is
    /// visited. Observers see `notify_bfs_has_begun`, one `notify_visit`
    /// per accepted vertex, and `notify_search_is_over` if `end` is reached.
    pub fn do_bfs(&self, start: &V, end: &V) -> Result<SearchOutcome<V>> {
        self.check_traversal_endpoints(start, end)?;
        tracing::debug!(?start, ?end, vertices = self.vertex_count(), "starting bfs");

        notify_observers(self.observers(), |observer| observer.notify_bfs_has_begun());
        let outcome = self.run_search(start, end, FrontierOrder::Fifo);

        tracing::debug!(
            visited = outcome.visited.len(),
            reached_end = outcome.reached_end,
            "bfs finished"
        );
        Ok(outcome)
    }
}
