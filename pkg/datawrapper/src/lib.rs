//! Client for the remote charting service.
//!
//! [`ChartApi`] is the seam the publisher drives; [`HttpChartApi`] is the
//! blocking HTTPS implementation. Calls are never retried and carry no
//! timeout, so a hung request hangs the caller.

pub mod client;
pub mod error;

pub use client::HttpChartApi;
pub use error::ApiError;

use pkg_types::map::MapId;
use pkg_types::metadata::{CreateChartRequest, MetadataUpdate};
use pkg_types::publish::PublishResult;

/// The chart operations a map workflow needs.
pub trait ChartApi {
    /// Create a chart and return its identifier.
    fn create_chart(&self, request: &CreateChartRequest) -> Result<MapId, ApiError>;

    /// Merge a metadata patch into the chart.
    fn patch_metadata(&self, id: &MapId, update: &MetadataUpdate) -> Result<(), ApiError>;

    /// Replace the chart's entire dataset with `body` (CSV text).
    fn put_data(&self, id: &MapId, body: String) -> Result<(), ApiError>;

    /// Publish the chart's current state.
    fn publish(&self, id: &MapId) -> Result<PublishResult, ApiError>;
}
