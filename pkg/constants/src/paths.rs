//! Filesystem path constants.

/// Default config file path, relative to the working directory.
pub const DEFAULT_CONFIG: &str = "config.yaml";

/// Default CSV input produced by the data pipeline.
pub const DEFAULT_CSV_PATH: &str = "data/county_cases.csv";

/// Default location of the embed snippet written on create.
pub const DEFAULT_HTML_OUTPUT: &str = "html/map.html";

/// File name of the log inside the configured log directory.
pub const LOG_FILE_NAME: &str = "map_worker.log";

/// Log level used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
