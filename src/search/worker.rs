//! The recursive fan-out/fan-in search worker.

use crate::board::{find_moves, Board, Position};
use crate::search::aggregate::aggregate;
use crate::search::config::SearchConfig;
use crate::search::error::SearchError;
use crate::search::parallel::channel::{result_channel, ResultReceiver, SharedStats};
use std::sync::Arc;
use std::thread;

/// What the current board state lets a worker do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// More than one legal move: fan out one worker per move.
    Multi(Vec<Position>),
    /// Exactly one legal move: take it in place, no spawn.
    Single(Position),
    /// No legal moves: report the move count and terminate.
    DeadEnd,
}

/// Classify the board into the worker state machine's next step.
pub fn classify(board: &Board) -> Step {
    let moves = find_moves(board);
    match moves.len() {
        0 => Step::DeadEnd,
        1 => Step::Single(moves[0]),
        _ => Step::Multi(moves),
    }
}

/// One exploration unit of the search tree.
///
/// A worker owns its board outright; the only state shared with other
/// workers is the observability counters. Its result travels back to the
/// spawner over a dedicated one-shot channel.
pub struct Worker {
    id: u64,
    stats: Arc<SharedStats>,
    config: SearchConfig,
}

impl Worker {
    /// Create the root worker. Registers with the shared counters, so the
    /// root always carries id 0 and counts toward the spawn total.
    pub fn root(stats: Arc<SharedStats>, config: SearchConfig) -> Self {
        let id = stats.register_worker();
        Self { id, stats, config }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Announce the start of the search on behalf of this worker.
    pub fn announce(&self, board: &Board) {
        println!(
            "Worker {}: Solving the knight's tour problem for a {}x{} board",
            self.id,
            board.cols(),
            board.rows()
        );
    }

    /// Explore the subtree rooted at `board` to exhaustion and return the
    /// maximum move count reached on any path beneath it.
    ///
    /// Forced moves (exactly one candidate) are taken in place; a stretch
    /// of forced moves never spawns anything. Fan-out only happens when
    /// the position genuinely branches.
    pub fn explore(&self, mut board: Board) -> Result<u32, SearchError> {
        loop {
            match classify(&board) {
                Step::DeadEnd => {
                    println!(
                        "Worker {}: Dead end after move #{}",
                        self.id,
                        board.move_count()
                    );
                    if self.config.display_board {
                        self.display(&board);
                    }
                    self.stats.record_dead_end();
                    self.stats.try_update_best(board.move_count());
                    return Ok(board.move_count());
                }
                Step::Single(to) => {
                    board.step(to);
                }
                Step::Multi(moves) => {
                    println!(
                        "Worker {}: {} moves possible after move #{}",
                        self.id,
                        moves.len(),
                        board.move_count()
                    );
                    if self.config.display_board {
                        self.display(&board);
                    }
                    return if self.config.sequential {
                        self.explore_in_place(&board, &moves)
                    } else {
                        self.fan_out(&board, &moves)
                    };
                }
            }
        }
    }

    /// MULTI state: one board clone, one channel, and one thread per move,
    /// then a join barrier over exactly the spawned set.
    ///
    /// A spawn failure stops further fan-out; whatever was already spawned
    /// is still reaped before the error propagates, so no thread is left
    /// orphaned. A child that dies without reporting, or panics, is fatal
    /// as well: a missing branch would corrupt the aggregation.
    fn fan_out(&self, board: &Board, moves: &[Position]) -> Result<u32, SearchError> {
        let mut pending = Vec::with_capacity(moves.len());
        let mut spawn_error = None;

        for &to in moves {
            let mut child_board = board.clone();
            child_board.step(to);

            let child = Worker {
                id: self.stats.register_worker(),
                stats: Arc::clone(&self.stats),
                config: self.config,
            };
            let (tx, rx) = result_channel();

            let spawned = thread::Builder::new()
                .name(format!("ktour-worker-{}", child.id))
                .spawn(move || tx.send(child.explore(child_board)));
            match spawned {
                Ok(handle) => pending.push((handle, rx)),
                Err(err) => {
                    spawn_error = Some(SearchError::Spawn(err));
                    break;
                }
            }
        }

        let collected = fan_in(pending);
        match spawn_error {
            // The spawn failure happened first; it wins over anything
            // the drained children reported.
            Some(err) => Err(err),
            None => Ok(aggregate(&collected?)),
        }
    }

    /// Sequential variant of the MULTI state: explore each branch to
    /// exhaustion in the current thread, in offset-table order.
    fn explore_in_place(&self, board: &Board, moves: &[Position]) -> Result<u32, SearchError> {
        let mut results = Vec::with_capacity(moves.len());
        for &to in moves {
            let mut child_board = board.clone();
            child_board.step(to);
            results.push(self.explore(child_board)?);
        }
        Ok(aggregate(&results))
    }

    fn display(&self, board: &Board) {
        for line in board.to_string().lines() {
            println!("Worker {}:   {}", self.id, line);
        }
    }
}

/// Fan-in half of the protocol: collect exactly one report per spawned
/// child, then reap its thread.
///
/// Every child is drained and joined even after a failure, so no thread
/// outlives its fan-out point. A failure anywhere wins over any score:
/// a child that panicked, or died without reporting, can never feed the
/// aggregation as a number.
fn fan_in(
    pending: Vec<(thread::JoinHandle<()>, ResultReceiver)>,
) -> Result<Vec<u32>, SearchError> {
    let mut results = Vec::with_capacity(pending.len());
    let mut failure = None;
    for (handle, rx) in pending {
        let report = rx.recv();
        if handle.join().is_err() {
            failure.get_or_insert(SearchError::WorkerPanic);
            continue;
        }
        match report {
            Ok(visited) => results.push(visited),
            Err(err) => {
                failure.get_or_insert(err);
            }
        }
    }
    match failure {
        Some(err) => Err(err),
        None => Ok(results),
    }
}
