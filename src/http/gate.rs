//! Gate assembly: shared state, middleware stack, background sweeper.

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, Router};
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use crate::admission::{self, ClientRegistry, EvictionSweeper};
use crate::config::GateConfig;
use crate::http::{cors, errors, recover};
use crate::lifecycle::Shutdown;

/// State shared by the gate's middleware and handlers.
#[derive(Debug, Clone)]
pub struct GateState {
    pub config: Arc<GateConfig>,
    pub registry: Arc<ClientRegistry>,
}

/// The request-processing gate. Owns the client registry and knows how to
/// wrap an application router with the full middleware chain.
///
/// The gate is a library layer: it has no listener of its own. The host
/// application serves the wrapped router with
/// `into_make_service_with_connect_info::<SocketAddr>()` so the admission
/// layer can see peer addresses.
#[derive(Debug)]
pub struct Gate {
    state: GateState,
}

impl Gate {
    pub fn new(config: GateConfig) -> Self {
        let registry = Arc::new(ClientRegistry::new(config.limiter.rps, config.limiter.burst));
        Self {
            state: GateState {
                config: Arc::new(config),
                registry,
            },
        }
    }

    /// Shared state, for mounting stateful handlers on the inner router.
    pub fn state(&self) -> GateState {
        self.state.clone()
    }

    /// The client registry, exposed so tests can observe admission state.
    pub fn registry(&self) -> Arc<ClientRegistry> {
        self.state.registry.clone()
    }

    /// Wrap `router` with the gate's chain. Innermost to outermost:
    /// admission, CORS, panic recovery, request tracing; unmatched routes
    /// fall back to the 404 envelope.
    pub fn apply(&self, router: Router) -> Router {
        router
            .fallback(errors::not_found)
            .layer(middleware::from_fn_with_state(
                self.state.clone(),
                admission::middleware::enforce,
            ))
            .layer(middleware::from_fn_with_state(self.state.clone(), cors::apply_cors))
            .layer(middleware::from_fn(recover::recover_panics))
            .layer(TraceLayer::new_for_http())
    }

    /// Start the eviction sweeper, cancelled cooperatively through
    /// `shutdown`. Sweep cadence and idle threshold come from the limiter
    /// config; validation guarantees the threshold exceeds the interval.
    pub fn spawn_sweeper(&self, shutdown: &Shutdown) -> JoinHandle<()> {
        let sweeper = EvictionSweeper::new(
            self.state.registry.clone(),
            Duration::from_secs(self.state.config.limiter.sweep_interval_secs),
            Duration::from_secs(self.state.config.limiter.idle_timeout_secs),
        );
        tokio::spawn(sweeper.run(shutdown.subscribe()))
    }
}
