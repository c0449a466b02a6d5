//! Choropleth map settings sent on creation and configuration.

// ─── Chart ────────────────────────────────────────────────────────────────

/// Title given to a newly created chart.
pub const CHART_TITLE: &str = "Irish Covid19 Cases";

/// Chart type identifier for a choropleth map.
pub const CHART_TYPE: &str = "d3-maps-choropleth";

// ─── Data columns ─────────────────────────────────────────────────────────

/// Column holding the county name (region key and label).
pub const COLUMN_COUNTY: &str = "county";

/// Column holding the case count (shaded value).
pub const COLUMN_CASES: &str = "cases";

// ─── Tooltip ──────────────────────────────────────────────────────────────

/// Tooltip body template; `{{ cases }}` is filled in by the service.
pub const TOOLTIP_BODY: &str = "{{ cases }} cases.";

/// Tooltip title template.
pub const TOOLTIP_TITLE: &str = "{{ county }}";

// ─── Basemap ──────────────────────────────────────────────────────────────

/// Non-administrative Ireland county boundaries.
pub const BASEMAP: &str = "ireland-counties-notadmin";

/// Basemap attribute matched against the `county` column.
pub const MAP_KEY_ATTR: &str = "FIRST_CO_E";

pub const MAP_KEY_FORMAT: &str = "0";

/// Legend position (bottom right).
pub const MAP_KEY_POSITION: &str = "br";

/// Zoom level at which county labels appear.
pub const MAP_LABEL_ZOOM: &str = "1";

// ─── Attribution ──────────────────────────────────────────────────────────

pub const SOURCE_NAME: &str = "Irish Department of Health";

pub const SOURCE_URL: &str = "https://www.gov.ie/en/campaigns/c36c85-covid-19-coronavirus/";

/// Number format for values; `-` leaves counts unformatted.
pub const NUMBER_FORMAT: &str = "-";

// ─── Embedding ────────────────────────────────────────────────────────────

pub const EMBED_WIDTH: u32 = 600;

pub const EMBED_HEIGHT: u32 = 600;

/// Prefix of the notes annotation written before every publish.
pub const LAST_UPDATE_PREFIX: &str = "Last update:";

/// `strftime` format of the last-update timestamp.
/// The hour is 24-hour and followed by the AM/PM marker.
pub const LAST_UPDATE_FORMAT: &str = "%m/%d/%Y, %H:%M:%S %p";

/// Key of the responsive iframe snippet among the publish embed codes.
pub const EMBED_METHOD_RESPONSIVE: &str = "embed-method-responsive";
