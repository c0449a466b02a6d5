use serde::{Deserialize, Serialize};
use std::path::Path;

/// Map worker configuration file (YAML).
///
/// This is also the store for the active map identifier: after a successful
/// create the whole file is rewritten with `map-id` set.
///
/// Example `config.yaml`:
/// ```yaml
/// auth-env: DATAWRAPPER_API_TOKEN
/// map-id: aB3xY
/// csv-path: data/county_cases.csv
/// html-output: html/map.html
/// log-dir: logs
/// log-level: debug
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkerConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_base: Option<String>,
    /// Name of the environment variable holding the bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_env: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(
    path: impl AsRef<Path>,
) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path.as_ref()) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    // An empty file deserializes to a YAML null, not an empty mapping.
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Rewrite a YAML config file in full.
pub fn save_config_file<T: Serialize>(path: impl AsRef<Path>, config: &T) -> anyhow::Result<()> {
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path.as_ref(), content).map_err(|e| {
        anyhow::anyhow!(
            "Failed to write config file {}: {}",
            path.as_ref().display(),
            e
        )
    })
}
