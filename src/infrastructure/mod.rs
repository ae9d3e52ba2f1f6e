//! Infrastructure layer with configuration, snapshot and platform adapters.

/// Application configuration.
pub mod config;
/// JSON channel snapshots.
pub mod snapshot;
/// System browser launcher.
pub mod url_opener;

pub use config::{AppConfig, CliArgs, Command, LogLevel, OutputFormat, StateConfig, StorageManager};
pub use snapshot::{SnapshotDefaults, SnapshotError, SnapshotPresenter};
pub use url_opener::{OpenError, UrlOpener};
