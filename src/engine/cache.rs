//! Bounded, time-expiring best-move cache.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Cache of engine replies keyed by (position notation, depth).
///
/// Entries expire after the configured TTL; when the cache is full the
/// oldest entry makes room. Shared between the gateway front and its worker
/// thread, so a query that outlives its caller still lands here for the
/// next lookup.
#[derive(Debug)]
pub(crate) struct MoveCache {
    entries: Mutex<HashMap<(String, u32), CachedMove>>,
    ttl: Duration,
    capacity: usize,
}

#[derive(Debug, Clone)]
struct CachedMove {
    best_move: String,
    stored_at: Instant,
}

impl MoveCache {
    pub(crate) fn new(ttl: Duration, capacity: usize) -> Self {
        MoveCache {
            entries: Mutex::new(HashMap::new()),
            ttl,
            capacity,
        }
    }

    /// Fetch a live entry, dropping it if it has expired.
    pub(crate) fn get(&self, fen: &str, depth: u32) -> Option<String> {
        let key = (fen.to_string(), depth);
        let mut entries = self.entries.lock();
        match entries.get(&key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                Some(entry.best_move.clone())
            }
            Some(_) => {
                entries.remove(&key);
                None
            }
            None => None,
        }
    }

    pub(crate) fn insert(&self, fen: &str, depth: u32, best_move: &str) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.lock();
        if entries.len() >= self.capacity {
            entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        }
        if entries.len() >= self.capacity {
            // Still full of live entries; the oldest one gives way.
            if let Some(oldest) = entries
                .iter()
                .min_by_key(|(_, entry)| entry.stored_at)
                .map(|(key, _)| key.clone())
            {
                entries.remove(&oldest);
            }
        }
        entries.insert(
            (fen.to_string(), depth),
            CachedMove {
                best_move: best_move.to_string(),
                stored_at: Instant::now(),
            },
        );
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_hit_within_ttl() {
        let cache = MoveCache::new(Duration::from_secs(60), 10);
        cache.insert("fen-a", 10, "e2e4");
        assert_eq!(cache.get("fen-a", 10), Some("e2e4".to_string()));
    }

    #[test]
    fn test_miss_on_different_depth() {
        let cache = MoveCache::new(Duration::from_secs(60), 10);
        cache.insert("fen-a", 10, "e2e4");
        assert_eq!(cache.get("fen-a", 12), None);
    }

    #[test]
    fn test_expired_entry_is_dropped() {
        let cache = MoveCache::new(Duration::from_millis(20), 10);
        cache.insert("fen-a", 10, "e2e4");
        thread::sleep(Duration::from_millis(40));
        assert_eq!(cache.get("fen-a", 10), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let cache = MoveCache::new(Duration::from_secs(60), 2);
        cache.insert("fen-a", 10, "e2e4");
        thread::sleep(Duration::from_millis(5));
        cache.insert("fen-b", 10, "d2d4");
        thread::sleep(Duration::from_millis(5));
        cache.insert("fen-c", 10, "c2c4");
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("fen-a", 10), None);
        assert_eq!(cache.get("fen-c", 10), Some("c2c4".to_string()));
    }

    #[test]
    fn test_zero_capacity_never_stores() {
        let cache = MoveCache::new(Duration::from_secs(60), 0);
        cache.insert("fen-a", 10, "e2e4");
        assert_eq!(cache.get("fen-a", 10), None);
    }
}
