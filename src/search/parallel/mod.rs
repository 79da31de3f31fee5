//! Infrastructure for the fan-out/fan-in worker protocol.
//!
//! Every worker that finds more than one legal move is a fan-out point:
//! it spawns one thread per move, each with its own board clone and its
//! own dedicated one-shot result channel, then blocks on a join barrier
//! over exactly the set it spawned before aggregating.
//!
//! # Architecture
//!
//! - A **one-shot channel** per spawned child carries the subtree result
//!   (or a fatal error) back to the spawner. Endpoints are consumed on
//!   use, so a channel can never be reused or cross-wired.
//! - **Shared counters** track workers spawned, dead ends, and the best
//!   tour seen so far. These are observability only; the value that
//!   decides the final answer always travels through the channels.

pub mod channel;

pub use channel::{result_channel, ResultReceiver, ResultSender, SharedStats, WorkerReport};
