// Application state module
// Immutable per-process state shared with every request

use std::path::PathBuf;

use super::types::Config;
use crate::http::{HeaderSet, MimeTable};

/// Application state, built once at startup and shared through `Arc`
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    /// Headers injected into every response
    pub headers: HeaderSet,
    pub mime: MimeTable,
    /// Directory request paths resolve against
    pub root: PathBuf,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            headers: HeaderSet::isolation(),
            mime: MimeTable::web(),
            root: config.root_dir(),
        }
    }

    /// State serving `root` with otherwise default configuration
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut config = Config::default();
        config.server.root = root.display().to_string();
        Self::new(&config)
    }

    /// Per-request logging, warnings and errors are unaffected
    pub const fn access_log(&self) -> bool {
        self.config.logging.access_log
    }
}
