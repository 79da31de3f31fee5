//! Exhaustive parallel exploration of the knight's tour state space.
//!
//! The search walks every path the knight can take from the starting
//! square, in parallel. Each worker classifies its board into one of
//! three states:
//! - **dead end** (no legal moves): report the move count and stop
//! - **single** (one legal move): take it in place, no spawn
//! - **multi** (several legal moves): fan out one worker per move, wait
//!   for all of them, and keep the maximum
//!
//! Running time blows up exponentially with board size: every branch is
//! explored to exhaustion, with no pruning, no bound, and no timeout.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod parallel;
pub mod result;
pub mod worker;

pub use config::SearchConfig;
pub use error::SearchError;
pub use result::{SearchResult, SearchStatistics};

use crate::board::Board;
use crate::search::parallel::channel::SharedStats;
use crate::search::worker::Worker;
use std::sync::Arc;
use std::time::Instant;

/// Run the search to exhaustion from `board`'s starting state.
///
/// Prints the progress lines as workers branch and bottom out, then
/// returns the best tour found together with run statistics. Any spawn or
/// protocol failure anywhere in the tree aborts the whole search.
pub fn run_search(board: Board, config: SearchConfig) -> Result<SearchResult, SearchError> {
    let start = Instant::now();
    let stats = Arc::new(SharedStats::new());
    let total_squares = board.total_squares();

    let root = Worker::root(Arc::clone(&stats), config);
    root.announce(&board);
    let best_visited = root.explore(board)?;

    println!(
        "Worker {}: Best solution found visits {} squares (out of {})",
        root.id(),
        best_visited,
        total_squares
    );

    Ok(SearchResult {
        best_visited,
        total_squares,
        statistics: SearchStatistics {
            workers_spawned: stats.workers_spawned(),
            dead_ends: stats.dead_ends(),
            best_seen: stats.best_seen(),
            elapsed_time: start.elapsed(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_by_three_has_no_full_tour() {
        let result = run_search(Board::new(3, 3), SearchConfig::default()).unwrap();

        assert_eq!(result.best_visited, 8);
        assert_eq!(result.total_squares, 9);
        assert!(!result.is_full_tour());
        assert_eq!(result.statistics.best_seen, 8);
    }

    #[test]
    fn test_statistics_are_populated() {
        let result = run_search(Board::new(3, 3), SearchConfig::default()).unwrap();

        assert_eq!(result.statistics.workers_spawned, 3);
        assert_eq!(result.statistics.dead_ends, 2);
        assert!(result.statistics.elapsed_time.as_nanos() > 0);
    }

    #[test]
    fn test_sequential_search_agrees() {
        let parallel = run_search(Board::new(3, 4), SearchConfig::default()).unwrap();
        let sequential = run_search(
            Board::new(3, 4),
            SearchConfig::default().with_sequential(true),
        )
        .unwrap();

        assert_eq!(parallel.best_visited, sequential.best_visited);
        assert_eq!(parallel.statistics.dead_ends, sequential.statistics.dead_ends);
    }
}
