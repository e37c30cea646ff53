use super::{SearchOutcome, search_state::FrontierOrder};
use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::observer::notify_observers;
use std::{fmt, hash::Hash};

impl<V> WeightedGraph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Depth-first search from `start`, stopping right after `end` is
    /// visited. Same notifications as [`WeightedGraph::do_bfs`], opened by
    /// `notify_dfs_has_begun`.
    pub fn do_dfs(&self, start: &V, end: &V) -> Result<SearchOutcome<V>> {
        self.check_traversal_endpoints(start, end)?;
        tracing::debug!(?start, ?end, vertices = self.vertex_count(), "starting dfs");

        notify_observers(self.observers(), |observer| observer.notify_dfs_has_begun());
        let outcome = self.run_search(start, end, FrontierOrder::Lifo);

        tracing::debug!(
            visited = outcome.visited.len(),
            reached_end = outcome.reached_end,
            "dfs finished"
        );
        Ok(outcome)
    }
}
