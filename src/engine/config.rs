//! Gateway configuration.

use std::time::Duration;

/// Smallest depth the gateway will forward to the engine.
pub const MIN_DEPTH: u32 = 1;

/// Largest depth the gateway will forward to the engine.
pub const MAX_DEPTH: u32 = 20;

/// Depth used when a caller does not care.
pub const DEFAULT_DEPTH: u32 = 10;

/// Configuration for the external-engine gateway.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Engine executable to spawn.
    pub executable: String,
    /// Hard per-query deadline; the caller gets a timeout error after this.
    pub timeout: Duration,
    /// Extra attempts after a retryable transport failure.
    pub retries: u32,
    /// Pause between retry attempts.
    pub retry_backoff: Duration,
    /// How long a cached best move stays valid.
    pub cache_ttl: Duration,
    /// Maximum number of cached (position, depth) entries.
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            executable: "stockfish".to_string(),
            timeout: Duration::from_secs(6),
            retries: 2,
            retry_backoff: Duration::from_millis(500),
            cache_ttl: Duration::from_secs(600),
            cache_capacity: 1_000,
        }
    }
}
