//! Configuration for search execution.

/// Configuration for a tour search.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfig {
    /// Explore fan-out branches one at a time in the current thread
    /// instead of spawning workers. Same results, deterministic schedule.
    pub sequential: bool,
    /// Print the board at every fan-out point and dead end.
    pub display_board: bool,
}

impl SearchConfig {
    /// Enable or disable sequential branch exploration.
    pub fn with_sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }

    /// Enable or disable board display on progress output.
    pub fn with_display_board(mut self, display_board: bool) -> Self {
        self.display_board = display_board;
        self
    }
}
