//! Search result types and statistics

use std::time::Duration;

/// Final outcome of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Maximum number of squares visited on any explored path.
    pub best_visited: u32,
    /// Total number of squares on the board (cols * rows).
    pub total_squares: u32,
    /// Statistics gathered over the run.
    pub statistics: SearchStatistics,
}

impl SearchResult {
    /// Whether the best path is a full tour covering every square.
    pub fn is_full_tour(&self) -> bool {
        self.best_visited == self.total_squares
    }
}

/// Counters gathered over a search run, for reporting only.
///
/// The authoritative best value is `SearchResult::best_visited`, which
/// flows back through the per-child result channels; these counters come
/// from the shared observability aggregate.
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Workers that took part in the search, the root included.
    pub workers_spawned: u64,
    /// Dead ends reached across the whole tree.
    pub dead_ends: u64,
    /// Best move count observed by the shared aggregate.
    pub best_seen: u32,
    /// Wall-clock time for the whole search.
    pub elapsed_time: Duration,
}

impl SearchStatistics {
    /// Format statistics as a human-readable string.
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Workers spawned: {}\n", self.workers_spawned));
        s.push_str(&format!("Dead ends reached: {}\n", self.dead_ends));
        s.push_str(&format!("Best tour seen: {}\n", self.best_seen));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s
    }
}
