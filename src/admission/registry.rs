//! Thread-safe registry of per-client token buckets.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;

use crate::admission::bucket::TokenBucket;

/// State tracked for one client identity.
#[derive(Debug)]
struct ClientEntry {
    bucket: TokenBucket,
    last_seen: Instant,
}

/// Maps client identities to token buckets, with idle-entry eviction.
///
/// A single exclusive mutex guards the whole map. Lookups mutate
/// `last_seen`, so reads and writes are both exclusive; critical sections
/// are O(1) except during [`sweep`](ClientRegistry::sweep).
#[derive(Debug)]
pub struct ClientRegistry {
    clients: Mutex<HashMap<String, ClientEntry>>,
    rate: f64,
    burst: u32,
}

impl ClientRegistry {
    /// Create an empty registry seeding new buckets with `rate` and `burst`.
    pub fn new(rate: f64, burst: u32) -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
            rate,
            burst,
        }
    }

    /// Look up or lazily create the entry for `identity`, refresh its
    /// `last_seen`, and consume one token, all under one lock acquisition.
    ///
    /// Two concurrent requests from the same identity never observe the
    /// same pre-decrement token count.
    pub fn check_and_consume(&self, identity: &str) -> bool {
        let now = Instant::now();
        let mut clients = self.clients.lock().expect("client registry mutex poisoned");

        let entry = clients
            .entry(identity.to_string())
            .or_insert_with(|| ClientEntry {
                bucket: TokenBucket::new(self.rate, self.burst),
                last_seen: now,
            });
        entry.last_seen = now;
        entry.bucket.allow()
    }

    /// Remove every entry not seen within `idle_timeout`. Returns how many
    /// entries were evicted. Holds the lock for the whole scan; entry count
    /// is bounded by recently-seen unique clients.
    pub fn sweep(&self, idle_timeout: Duration) -> usize {
        let now = Instant::now();
        let mut clients = self.clients.lock().expect("client registry mutex poisoned");

        let before = clients.len();
        clients.retain(|_, entry| now.duration_since(entry.last_seen) <= idle_timeout);
        before - clients.len()
    }

    /// Number of tracked client identities.
    pub fn len(&self) -> usize {
        self.clients.lock().expect("client registry mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
