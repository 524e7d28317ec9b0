//! The gateway to the external move engine.
//!
//! Queries run on a dedicated worker thread that owns the transport; the
//! caller blocks on a reply channel with a hard deadline. A caller that
//! gives up does not interrupt the transport — the worker finishes the
//! query in its own time and still records the answer in the cache, so the
//! effort pays off on the next lookup.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, warn};

use super::cache::MoveCache;
use super::config::{EngineConfig, MAX_DEPTH, MIN_DEPTH};
use super::error::EngineError;
use super::uci::{EngineBackend, UciBackend};
use super::MoveEngine;

struct Query {
    fen: String,
    depth: u32,
    reply: mpsc::Sender<Result<String, EngineError>>,
}

/// External-engine gateway with timeout, bounded retry, and result caching.
pub struct EngineGateway {
    config: EngineConfig,
    cache: Arc<MoveCache>,
    queries: mpsc::Sender<Query>,
    worker: Option<JoinHandle<()>>,
}

impl EngineGateway {
    /// Spawn the configured engine executable and the worker that drives it.
    pub fn spawn(config: EngineConfig) -> Result<Self, EngineError> {
        let backend = UciBackend::spawn(&config.executable)?;
        Ok(Self::with_backend(config, Box::new(backend)))
    }

    /// Build a gateway over an arbitrary transport.
    pub(crate) fn with_backend(config: EngineConfig, mut backend: Box<dyn EngineBackend>) -> Self {
        let cache = Arc::new(MoveCache::new(config.cache_ttl, config.cache_capacity));
        let (tx, rx) = mpsc::channel::<Query>();

        let worker_cache = Arc::clone(&cache);
        let worker = thread::Builder::new()
            .name("engine-gateway".to_string())
            .spawn(move || {
                while let Ok(query) = rx.recv() {
                    let result = backend.query(&query.fen, query.depth);
                    if let Ok(best_move) = &result {
                        // Recorded even when the caller already timed out.
                        worker_cache.insert(&query.fen, query.depth, best_move);
                    }
                    // The caller may have hung up; nothing to do then.
                    let _ = query.reply.send(result);
                }
            })
            .expect("failed to spawn engine gateway worker");

        EngineGateway {
            config,
            cache,
            queries: tx,
            worker: Some(worker),
        }
    }

    fn dispatch(&self, fen: &str, depth: u32) -> Result<String, EngineError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.queries
            .send(Query {
                fen: fen.to_string(),
                depth,
                reply: reply_tx,
            })
            .map_err(|_| EngineError::Closed)?;

        match reply_rx.recv_timeout(self.config.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(EngineError::Timeout {
                waited_ms: self.config.timeout.as_millis() as u64,
            }),
            Err(RecvTimeoutError::Disconnected) => Err(EngineError::Closed),
        }
    }
}

impl MoveEngine for EngineGateway {
    fn best_move(&self, fen: &str, depth: u32) -> Result<String, EngineError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
            return Err(EngineError::InvalidDepth { depth });
        }

        if let Some(hit) = self.cache.get(fen, depth) {
            debug!("cache hit for depth {depth} query");
            return Ok(hit);
        }

        let mut attempt = 0;
        loop {
            match self.dispatch(fen, depth) {
                Ok(best_move) => return Ok(best_move),
                Err(err) if err.is_retryable() && attempt < self.config.retries => {
                    attempt += 1;
                    warn!(
                        "engine query failed ({err}), retry {attempt}/{}",
                        self.config.retries
                    );
                    thread::sleep(self.config.retry_backoff);
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Drop for EngineGateway {
    fn drop(&mut self) {
        // Hanging up the query channel lets the worker drain and exit.
        let (closed_tx, _) = mpsc::channel();
        drop(std::mem::replace(&mut self.queries, closed_tx));
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
