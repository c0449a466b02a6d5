//! Remote charting API constants.

/// Base URL for the versioned chart endpoints (`/v3/charts/...`).
pub const DEFAULT_API_BASE: &str = "https://api.datawrapper.de";

/// Base URL for the publish endpoint, which lives on the legacy unversioned path.
pub const DEFAULT_PUBLISH_BASE: &str = "https://api.datawrapper.de";

/// Environment variable read for the bearer token when the config names none.
pub const DEFAULT_AUTH_ENV: &str = "DATAWRAPPER_API_TOKEN";

/// Content type for JSON requests.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Content type for the chart data upload.
pub const CONTENT_TYPE_CSV: &str = "text/csv";
