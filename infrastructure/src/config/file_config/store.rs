//! Agreement store configuration from TOML (`[store]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where agreements are read from.
///
/// ```toml
/// [store]
/// path = "agreements.json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// JSON file holding an array of agreements
    pub path: Option<PathBuf>,
}
