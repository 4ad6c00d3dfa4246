//! Configuration for petbase
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a petbase store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for persisted collection documents (file backend).
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── pets.json
    ///     ├── petsAdocao.json
    ///     ├── clientes.json
    ///     ├── petshops.json
    ///     └── veterinarios.json
    pub data_dir: PathBuf,

    /// Pretty-print persisted JSON documents.
    ///
    /// Compact by default; pretty output is useful when inspecting the
    /// data directory by hand.
    pub pretty: bool,

    /// fsync each document after writing it.
    ///
    /// The original mobile host flushed on its own schedule; tests and
    /// anything that must survive abrupt process death should turn this on.
    pub sync_writes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./petbase_data"),
            pretty: false,
            sync_writes: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all collection documents)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Pretty-print persisted JSON
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// fsync after every document write
    pub fn sync_writes(mut self, sync: bool) -> Self {
        self.config.sync_writes = sync;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
