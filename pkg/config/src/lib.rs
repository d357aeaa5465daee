pub mod controller;
pub mod file;
pub mod provider;

pub use controller::{ConfigMapControllerConfigProvider, ControllerConfig, ControllerConfigProvider};
pub use provider::{BareConfigProvider, SnapshotStore};
