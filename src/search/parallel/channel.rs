//! One-shot result channels and shared observability counters.

use crate::search::error::SearchError;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// Message a worker sends back to its spawner: either the subtree's best
/// move count or the fatal error that aborted the branch.
pub type WorkerReport = Result<u32, SearchError>;

/// Sending half of a one-shot result channel. Consumed by `send`.
pub struct ResultSender(Sender<WorkerReport>);

/// Receiving half of a one-shot result channel. Consumed by `recv`.
pub struct ResultReceiver(Receiver<WorkerReport>);

/// Allocate an independent one-shot channel for a single spawned worker.
///
/// Each child at a fan-out point gets its own pair. Endpoints are consumed
/// on use and closed on drop, so a channel can never be reused by a later
/// child or cross-wired between siblings.
pub fn result_channel() -> (ResultSender, ResultReceiver) {
    let (tx, rx) = bounded(1);
    (ResultSender(tx), ResultReceiver(rx))
}

impl ResultSender {
    /// Deliver the report and close the sending end.
    ///
    /// Delivery only fails when the spawner is already gone, which happens
    /// after the spawner hit a fatal error of its own; the report is
    /// dropped in that case.
    pub fn send(self, report: WorkerReport) {
        let _ = self.0.send(report);
    }
}

impl ResultReceiver {
    /// Block until the worker's report arrives, then close the channel.
    ///
    /// A disconnect without a report means the child died before writing.
    /// That is a protocol violation, never a score.
    pub fn recv(self) -> WorkerReport {
        match self.0.recv() {
            Ok(report) => report,
            Err(_) => Err(SearchError::ChildLost),
        }
    }
}

/// Counters shared across all workers, for end-of-run reporting only.
///
/// The authoritative per-subtree result always flows through the channel
/// path; nothing here feeds the aggregation.
#[derive(Debug, Default)]
pub struct SharedStats {
    workers_spawned: AtomicU64,
    dead_ends: AtomicU64,
    best_seen: AtomicU32,
}

impl SharedStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new worker and hand out its id. The root registers
    /// first and always gets id 0.
    pub fn register_worker(&self) -> u64 {
        self.workers_spawned.fetch_add(1, Ordering::SeqCst)
    }

    /// Record a dead end somewhere in the tree.
    pub fn record_dead_end(&self) {
        self.dead_ends.fetch_add(1, Ordering::SeqCst);
    }

    /// Raise the best tour seen so far. Returns true if `visited` was an
    /// improvement.
    pub fn try_update_best(&self, visited: u32) -> bool {
        let mut current = self.best_seen.load(Ordering::SeqCst);
        loop {
            if visited <= current {
                return false;
            }
            match self.best_seen.compare_exchange_weak(
                current,
                visited,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return true,
                Err(c) => current = c,
            }
        }
    }

    /// Total workers registered so far, the root included.
    pub fn workers_spawned(&self) -> u64 {
        self.workers_spawned.load(Ordering::SeqCst)
    }

    /// Dead ends recorded so far.
    pub fn dead_ends(&self) -> u64 {
        self.dead_ends.load(Ordering::SeqCst)
    }

    /// Best move count recorded so far (0 before any dead end).
    pub fn best_seen(&self) -> u32 {
        self.best_seen.load(Ordering::SeqCst)
    }
}
