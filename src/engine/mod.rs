//! External move-engine gateway.
//!
//! The rules core never searches for moves itself; when the next mover is a
//! computer opponent it asks an external engine "best move for this
//! position at this depth" through the [`MoveEngine`] contract. The
//! [`EngineGateway`] implementation bounds that call with a worker thread,
//! a hard timeout, bounded retries, and a time-expiring result cache. It
//! never mutates game state.

mod cache;
mod config;
mod error;
mod gateway;
mod uci;

pub use config::{EngineConfig, DEFAULT_DEPTH, MAX_DEPTH, MIN_DEPTH};
pub use error::EngineError;
pub use gateway::EngineGateway;

/// The consumed move-search contract.
///
/// `fen` is the six-field position notation; the reply is a 4-5 character
/// coordinate move. Implementations fail with [`EngineError`], never with a
/// silent empty answer.
pub trait MoveEngine {
    fn best_move(&self, fen: &str, depth: u32) -> Result<String, EngineError>;
}
