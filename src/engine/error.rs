//! Error type for external-engine queries.

use std::fmt;

/// Error type for move-engine failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Requested depth outside the accepted range
    InvalidDepth { depth: u32 },
    /// The engine did not answer within the configured deadline
    Timeout { waited_ms: u64 },
    /// Spawning or talking to the engine process failed
    Io { message: String },
    /// The engine replied with something other than a best move
    Protocol { message: String },
    /// The gateway worker has shut down
    Closed,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidDepth { depth } => {
                write!(f, "depth {depth} outside accepted range 1-20")
            }
            EngineError::Timeout { waited_ms } => {
                write!(f, "engine did not answer within {waited_ms}ms")
            }
            EngineError::Io { message } => write!(f, "engine I/O failed: {message}"),
            EngineError::Protocol { message } => {
                write!(f, "unexpected engine reply: {message}")
            }
            EngineError::Closed => write!(f, "engine gateway is shut down"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io {
            message: err.to_string(),
        }
    }
}

impl EngineError {
    /// Transport faults are worth another attempt; a timeout is not (the
    /// worker is still draining the abandoned query) and bad input never is.
    #[must_use]
    pub(crate) const fn is_retryable(&self) -> bool {
        matches!(self, EngineError::Io { .. } | EngineError::Protocol { .. })
    }
}
