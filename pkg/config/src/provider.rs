use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

/// Raw key/value data of a single config record.
pub type BareConfig = HashMap<String, String>;

/// Access to watched config records by name.
///
/// Implementations may return stale data together with an error when the
/// latest read failed. Callers decide whether the stale data is usable.
pub trait BareConfigProvider: Send + Sync {
    fn get_bare_config(&self, name: &str) -> (BareConfig, Option<anyhow::Error>);
}

/// Latest observed state of one config record.
#[derive(Debug, Clone, Default)]
pub struct RecordState {
    pub data: BareConfig,
    /// Error from the most recent refresh, if it failed.
    pub error: Option<String>,
}

/// All records keyed by name.
pub type Records = HashMap<String, RecordState>;

/// In-memory config records fed by an external watcher.
///
/// The watcher side calls [`publish`](Self::publish) or
/// [`publish_error`](Self::publish_error) whenever it observes a change;
/// readers always see the latest snapshot. A failed refresh keeps the
/// last-known data and pairs it with the error.
#[derive(Clone)]
pub struct SnapshotStore {
    tx: Arc<watch::Sender<Records>>,
    rx: watch::Receiver<Records>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(Records::new());
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    /// Replace the data of record `name` and clear any previous error.
    pub fn publish(&self, name: &str, data: BareConfig) {
        info!("Config record {} updated ({} keys)", name, data.len());
        self.tx.send_modify(|records| {
            records.insert(
                name.to_string(),
                RecordState { data, error: None },
            );
        });
    }

    /// Record a failed refresh of `name`. Existing data is kept.
    pub fn publish_error(&self, name: &str, error: impl std::fmt::Display) {
        warn!("Config record {} refresh failed: {}", name, error);
        let message = error.to_string();
        self.tx.send_modify(|records| {
            records.entry(name.to_string()).or_default().error = Some(message);
        });
    }

    /// Drop record `name` entirely.
    pub fn remove(&self, name: &str) {
        self.tx.send_modify(|records| {
            records.remove(name);
        });
    }

    /// Subscribe to be notified whenever any record changes.
    pub fn subscribe(&self) -> watch::Receiver<Records> {
        self.rx.clone()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BareConfigProvider for SnapshotStore {
    fn get_bare_config(&self, name: &str) -> (BareConfig, Option<anyhow::Error>) {
        let records = self.rx.borrow();
        match records.get(name) {
            Some(state) => (
                state.data.clone(),
                state.error.as_ref().map(|e| anyhow::anyhow!("{}", e)),
            ),
            None => (
                BareConfig::new(),
                Some(anyhow::anyhow!("config record '{}' not found", name)),
            ),
        }
    }
}
