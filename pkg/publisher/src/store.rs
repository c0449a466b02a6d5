use anyhow::Result;
use pkg_types::config::{WorkerConfigFile, save_config_file};
use pkg_types::map::MapId;
use std::path::PathBuf;
use tracing::debug;

/// Durable home of the active map identifier.
pub trait MapIdStore {
    /// The identifier persisted by an earlier create, if any.
    fn load(&self) -> Option<MapId>;

    /// Persist a freshly created identifier.
    fn save(&mut self, id: &MapId) -> Result<()>;
}

/// Keeps the identifier under `map-id` in the worker's YAML config file.
pub struct ConfigFileStore {
    path: PathBuf,
    config: WorkerConfigFile,
}

impl ConfigFileStore {
    /// `config` is the file's current content; saving rewrites the whole file.
    pub fn new(path: impl Into<PathBuf>, config: WorkerConfigFile) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }
}

impl MapIdStore for ConfigFileStore {
    fn load(&self) -> Option<MapId> {
        self.config
            .map_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .map(MapId::new)
    }

    fn save(&mut self, id: &MapId) -> Result<()> {
        debug!("Writing new map_id to {}: {}", self.path.display(), id);
        self.config.map_id = Some(id.to_string());
        save_config_file(&self.path, &self.config)
    }
}
