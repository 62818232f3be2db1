use std::sync::Arc;
use std::time::Duration;

use notes_catalog::config::Config;
use notes_catalog::Catalog;
use tokio::sync::RwLock;
use tracing::warn;

use crate::newsletter::Subscription;

/// Shared handler state.  The catalog is immutable after startup; the only
/// mutable piece is the in-memory newsletter subscription list.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub subscriptions: Arc<RwLock<Vec<Subscription>>>,
    /// Simulated latency for the newsletter confirm call.
    pub confirm_delay: Duration,
}

impl AppState {
    pub fn new(catalog: Catalog, confirm_delay: Duration) -> Self {
        Self {
            catalog: Arc::new(catalog),
            subscriptions: Arc::new(RwLock::new(Vec::new())),
            confirm_delay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            load_catalog(config),
            Duration::from_millis(config.newsletter.confirm_delay_ms),
        )
    }
}

/// Load the user catalog file if configured and present, otherwise fall
/// back to the builtin dataset.
fn load_catalog(config: &Config) -> Catalog {
    let path = &config.catalog.episodes_toml;
    if path.exists() {
        match Catalog::load_from_toml(path) {
            Ok(catalog) => return catalog,
            Err(e) => {
                warn!("failed to load {:?}: {}, using builtin catalog", path, e);
            }
        }
    }
    Catalog::builtin()
}
