//! Configuration file loading for covenant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `COVENANT_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./covenant.toml` or `./.covenant.toml`
//! 4. Global: `$XDG_CONFIG_HOME/covenant/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_BASE_URL, DEFAULT_BIND, FileAnswerConfig, FileBackendConfig, FileConfig,
    FileContextConfig, FileServerConfig, FileStoreConfig,
};
pub use loader::{ConfigError, ConfigLoader};
