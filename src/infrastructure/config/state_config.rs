use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Session state configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Last snapshot file used.
    #[serde(default)]
    pub last_snapshot: Option<PathBuf>,
}
