//! Fatal error taxonomy for the search tree.

use std::error::Error;
use std::fmt;
use std::io;

/// A fatal failure inside the search tree.
///
/// Every variant aborts the whole search. A branch that goes missing would
/// silently corrupt the max-aggregation with no way to detect the gap, so
/// a failure is never downgraded to a zero score and no partial result is
/// reported.
#[derive(Debug)]
pub enum SearchError {
    /// Spawning a worker thread failed (resource exhaustion).
    Spawn(io::Error),
    /// A child worker terminated without reporting a result.
    ChildLost,
    /// A child worker panicked before reporting.
    WorkerPanic,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Spawn(err) => write!(f, "failed to spawn worker: {err}"),
            SearchError::ChildLost => write!(f, "worker terminated without reporting a result"),
            SearchError::WorkerPanic => write!(f, "worker panicked"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SearchError::Spawn(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SearchError {
    fn from(err: io::Error) -> Self {
        SearchError::Spawn(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let spawn = SearchError::Spawn(io::Error::new(io::ErrorKind::Other, "out of threads"));
        assert!(spawn.to_string().contains("failed to spawn worker"));
        assert!(SearchError::ChildLost.to_string().contains("without reporting"));
        assert!(SearchError::WorkerPanic.to_string().contains("panicked"));
    }

    #[test]
    fn test_spawn_keeps_source() {
        let err = SearchError::from(io::Error::new(io::ErrorKind::Other, "EAGAIN"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
