//! Request payloads for chart creation and metadata patches.
//!
//! Field names follow the charting service's JSON, which mixes plain and
//! kebab-case keys.

use pkg_constants::map;
use serde::{Deserialize, Serialize};

// --- Chart creation ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateChartRequest {
    pub title: String,
    #[serde(rename = "type")]
    pub chart_type: String,
}

impl CreateChartRequest {
    /// The county choropleth created by the `create` workflow.
    pub fn choropleth() -> Self {
        Self {
            title: map::CHART_TITLE.to_string(),
            chart_type: map::CHART_TYPE.to_string(),
        }
    }
}

/// Creation response; only the identifier is read.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedChart {
    #[serde(default)]
    pub id: Option<String>,
}

// --- Metadata patch envelope ---

/// Every metadata patch is sent as `{"metadata": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataPatch<T> {
    pub metadata: T,
}

impl<T> MetadataPatch<T> {
    pub fn new(metadata: T) -> Self {
        Self { metadata }
    }
}

// --- Full map metadata ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMetadata {
    pub axes: Axes,
    pub tooltip: Tooltip,
    pub visualize: Visualize,
    pub describe: Describe,
    pub publish: EmbedSize,
}

impl MapMetadata {
    /// Metadata for the county case choropleth, built fresh for every configure call.
    pub fn choropleth() -> Self {
        Self {
            axes: Axes {
                keys: map::COLUMN_COUNTY.to_string(),
                labels: map::COLUMN_COUNTY.to_string(),
                values: map::COLUMN_CASES.to_string(),
            },
            tooltip: Tooltip::county_cases(),
            visualize: Visualize {
                basemap: map::BASEMAP.to_string(),
                map_key_attr: map::MAP_KEY_ATTR.to_string(),
                map_key_format: map::MAP_KEY_FORMAT.to_string(),
                map_key_position: map::MAP_KEY_POSITION.to_string(),
                zoomable: true,
                map_label_label: map::COLUMN_COUNTY.to_string(),
                map_label_zoom: map::MAP_LABEL_ZOOM.to_string(),
                min_label_zoom: map::MAP_LABEL_ZOOM.to_string(),
            },
            describe: Describe {
                source_name: map::SOURCE_NAME.to_string(),
                source_url: map::SOURCE_URL.to_string(),
                number_format: map::NUMBER_FORMAT.to_string(),
            },
            publish: EmbedSize {
                embed_width: map::EMBED_WIDTH,
                embed_height: map::EMBED_HEIGHT,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub keys: String,
    pub labels: String,
    pub values: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub body: String,
    pub title: String,
    pub fields: TooltipFields,
}

impl Tooltip {
    /// Hover text: county name as title, `<n> cases.` as body.
    pub fn county_cases() -> Self {
        Self {
            body: map::TOOLTIP_BODY.to_string(),
            title: map::TOOLTIP_TITLE.to_string(),
            fields: TooltipFields {
                cases: map::COLUMN_CASES.to_string(),
                county: map::COLUMN_COUNTY.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipFields {
    pub cases: String,
    pub county: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Visualize {
    pub basemap: String,
    pub map_key_attr: String,
    pub map_key_format: String,
    pub map_key_position: String,
    pub zoomable: bool,
    pub map_label_label: String,
    pub map_label_zoom: String,
    pub min_label_zoom: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Describe {
    pub source_name: String,
    pub source_url: String,
    pub number_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EmbedSize {
    pub embed_width: u32,
    pub embed_height: u32,
}

// --- Narrow patches ---

/// Tooltip-only patch, nested under `visualize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipMetadata {
    pub visualize: TooltipVisualize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipVisualize {
    pub tooltip: Tooltip,
}

impl TooltipMetadata {
    pub fn county_cases() -> Self {
        Self {
            visualize: TooltipVisualize {
                tooltip: Tooltip::county_cases(),
            },
        }
    }
}

/// Notes annotation patch, used for the last-update stamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotateMetadata {
    pub annotate: Annotate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotate {
    pub notes: String,
}

impl AnnotateMetadata {
    /// `Last update:<timestamp>`, no space after the colon.
    pub fn last_update(timestamp: &str) -> Self {
        Self {
            annotate: Annotate {
                notes: format!("{}{}", map::LAST_UPDATE_PREFIX, timestamp),
            },
        }
    }
}

// --- Patch selector ---

/// One of the metadata patches the publisher sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataUpdate {
    Full(MapMetadata),
    Tooltip(TooltipMetadata),
    Annotate(AnnotateMetadata),
}

impl MetadataUpdate {
    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            MetadataUpdate::Full(_) => "full",
            MetadataUpdate::Tooltip(_) => "tooltip",
            MetadataUpdate::Annotate(_) => "annotate",
        }
    }

    /// The request body: the update wrapped in the `metadata` envelope.
    pub fn to_patch(&self) -> MetadataPatch<&Self> {
        MetadataPatch::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_shape() {
        let body = serde_json::to_value(CreateChartRequest::choropleth()).unwrap();
        assert_eq!(
            body,
            json!({"title": "Irish Covid19 Cases", "type": "d3-maps-choropleth"})
        );
    }

    #[test]
    fn full_metadata_shape() {
        let body = serde_json::to_value(MetadataPatch::new(MapMetadata::choropleth())).unwrap();
        let expected = json!({
            "metadata": {
                "axes": {"keys": "county", "labels": "county", "values": "cases"},
                "tooltip": {
                    "body": "{{ cases }} cases.",
                    "title": "{{ county }}",
                    "fields": {"cases": "cases", "county": "county"}
                },
                "visualize": {
                    "basemap": "ireland-counties-notadmin",
                    "map-key-attr": "FIRST_CO_E",
                    "map-key-format": "0",
                    "map-key-position": "br",
                    "zoomable": true,
                    "map-label-label": "county",
                    "map-label-zoom": "1",
                    "min-label-zoom": "1"
                },
                "describe": {
                    "source-name": "Irish Department of Health",
                    "source-url": "https://www.gov.ie/en/campaigns/c36c85-covid-19-coronavirus/",
                    "number-format": "-"
                },
                "publish": {"embed-width": 600, "embed-height": 600}
            }
        });
        assert_eq!(body, expected);
    }

    #[test]
    fn tooltip_patch_matches_full_tooltip() {
        let update = MetadataUpdate::Tooltip(TooltipMetadata::county_cases());
        let body = serde_json::to_value(update.to_patch()).unwrap();
        let full = serde_json::to_value(Tooltip::county_cases()).unwrap();
        assert_eq!(body["metadata"]["visualize"]["tooltip"], full);
    }

    #[test]
    fn last_update_note() {
        let update = MetadataUpdate::Annotate(AnnotateMetadata::last_update(
            "03/21/2020, 18:39:33 PM",
        ));
        let body = serde_json::to_value(update.to_patch()).unwrap();
        assert_eq!(
            body,
            json!({"metadata": {"annotate": {"notes": "Last update:03/21/2020, 18:39:33 PM"}}})
        );
    }
}
