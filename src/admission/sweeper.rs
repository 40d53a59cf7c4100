//! Background eviction of idle registry entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;

use crate::admission::registry::ClientRegistry;
use crate::observability::metrics;

/// Long-lived task that periodically sweeps idle clients out of the
/// registry, bounding its memory to recently-seen identities.
///
/// The idle timeout must be strictly greater than the sweep interval so a
/// client active at least once per cycle is never evicted mid-session;
/// config validation enforces this.
#[derive(Debug)]
pub struct EvictionSweeper {
    registry: Arc<ClientRegistry>,
    interval: Duration,
    idle_timeout: Duration,
}

impl EvictionSweeper {
    pub fn new(registry: Arc<ClientRegistry>, interval: Duration, idle_timeout: Duration) -> Self {
        Self {
            registry,
            interval,
            idle_timeout,
        }
    }

    /// Run until the shutdown signal fires. Never observable to clients;
    /// the registry lock is only taken for the duration of each sweep.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first interval tick completes immediately; consume it so the
        // first sweep happens one full interval after spawn.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let evicted = self.registry.sweep(self.idle_timeout);
                    if evicted > 0 {
                        tracing::debug!(evicted, "evicted idle clients");
                        metrics::record_clients_evicted(evicted);
                    }
                }
                _ = shutdown.recv() => {
                    tracing::debug!("eviction sweeper stopping");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;

    #[tokio::test(start_paused = true)]
    async fn sweeps_idle_entries_and_stops_on_shutdown() {
        let registry = Arc::new(ClientRegistry::new(2.0, 5));
        registry.check_and_consume("10.0.0.1");

        let shutdown = Shutdown::new();
        let sweeper = EvictionSweeper::new(
            registry.clone(),
            Duration::from_secs(60),
            Duration::from_secs(180),
        );
        let handle = tokio::spawn(sweeper.run(shutdown.subscribe()));

        // Sweeps at 60/120/180 leave the entry in place (not yet idle long
        // enough); the 240s sweep evicts it.
        tokio::time::sleep(Duration::from_secs(250)).await;
        assert!(registry.is_empty());

        shutdown.trigger();
        handle.await.expect("sweeper task panicked");
    }

    #[tokio::test(start_paused = true)]
    async fn active_client_is_never_evicted() {
        let registry = Arc::new(ClientRegistry::new(2.0, 5));

        let shutdown = Shutdown::new();
        let sweeper = EvictionSweeper::new(
            registry.clone(),
            Duration::from_secs(60),
            Duration::from_secs(180),
        );
        let handle = tokio::spawn(sweeper.run(shutdown.subscribe()));

        // One request every sweep cycle keeps the entry alive across many
        // sweeps.
        for _ in 0..10 {
            registry.check_and_consume("10.0.0.2");
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
        assert_eq!(registry.len(), 1);

        shutdown.trigger();
        handle.await.expect("sweeper task panicked");
    }
}
