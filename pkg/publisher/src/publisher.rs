use anyhow::{Context, Result, anyhow};
use pkg_constants::map::EMBED_METHOD_RESPONSIVE;
use pkg_datawrapper::{ApiError, ChartApi};
use pkg_types::map::MapId;
use pkg_types::metadata::{
    AnnotateMetadata, CreateChartRequest, MapMetadata, MetadataUpdate, TooltipMetadata,
};
use pkg_types::publish::PublishResult;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

use crate::artifact::write_embed_artifact;
use crate::stage::{RunReport, Stage, StageOutcome};
use crate::store::MapIdStore;
use crate::timestamp::now_local;
use crate::transcode::{read_case_records, transcode};

/// Which workflow to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Create a new map, configure it, push data, publish, write the embed snippet.
    Create,
    /// Push data to the existing map and republish.
    Update,
}

impl RunMode {
    /// Parse the command-line run type. Anything but `create`/`update` is `None`.
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "create" => Some(RunMode::Create),
            "update" => Some(RunMode::Update),
            _ => None,
        }
    }
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunMode::Create => write!(f, "create"),
            RunMode::Update => write!(f, "update"),
        }
    }
}

/// Inputs of a publisher, resolved by the caller.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Identifier of the map to update. `None` until a create has succeeded.
    pub map_id: Option<MapId>,
    /// Case file produced by the data pipeline.
    pub csv_path: PathBuf,
    /// Where the create workflow writes the embed snippet.
    pub html_output: PathBuf,
}

/// Drives one map through the charting service.
pub struct MapPublisher<A, S> {
    api: A,
    store: S,
    map_id: Option<MapId>,
    csv_path: PathBuf,
    html_output: PathBuf,
}

impl<A: ChartApi, S: MapIdStore> MapPublisher<A, S> {
    pub fn new(api: A, store: S, config: PublisherConfig) -> Self {
        Self {
            api,
            store,
            map_id: config.map_id,
            csv_path: config.csv_path,
            html_output: config.html_output,
        }
    }

    pub fn map_id(&self) -> Option<&MapId> {
        self.map_id.as_ref()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ─── Stages ────────────────────────────────────────────────────────

    /// Create a new choropleth and persist its identifier at once.
    ///
    /// On failure the current identifier (possibly none) is left untouched.
    pub fn create(&mut self) -> Result<MapId> {
        let id = self
            .api
            .create_chart(&CreateChartRequest::choropleth())
            .context("Map create failed")?;
        info!("Created new choropleth with map_id: {}", id);

        self.map_id = Some(id.clone());
        self.store
            .save(&id)
            .with_context(|| format!("Created map {} but could not persist its id", id))?;
        Ok(id)
    }

    /// Replace the map's metadata with the full choropleth settings.
    pub fn configure(&self) -> Result<()> {
        let id = self.require_map_id()?;
        self.api
            .patch_metadata(id, &MetadataUpdate::Full(MapMetadata::choropleth()))
            .context("Map configuration setting failed")?;
        debug!("Updated map settings for map_id: {}", id);
        Ok(())
    }

    /// Re-assert the county/cases hover tooltip.
    pub fn set_tooltip(&self) -> Result<()> {
        let id = self.require_map_id()?;
        self.api
            .patch_metadata(id, &MetadataUpdate::Tooltip(TooltipMetadata::county_cases()))
            .context("Tooltip add failed")?;
        debug!("Added tooltip hover settings for map_id: {}", id);
        Ok(())
    }

    /// Upload the case file as the chart's entire dataset.
    pub fn push_data(&self) -> Result<()> {
        let id = self.require_map_id()?;
        let records = read_case_records(&self.csv_path)?;
        let body = transcode(&records);
        debug!(
            "Uploading {} rows ({} bytes) from {}",
            records.len(),
            body.len(),
            self.csv_path.display()
        );
        self.api
            .put_data(id, body)
            .context("Update of map data failed")?;
        debug!("Map data updated from csv for map_id: {}", id);
        Ok(())
    }

    /// Set the map notes to `Last update:<now>`.
    pub fn stamp_timestamp(&self) -> Result<()> {
        let id = self.require_map_id()?;
        let now = now_local();
        self.api
            .patch_metadata(id, &MetadataUpdate::Annotate(AnnotateMetadata::last_update(&now)))
            .context("Set timestamp failed")?;
        debug!("Set last update timestamp {} for map_id: {}", now, id);
        Ok(())
    }

    /// Stamp the timestamp, then publish. Both outcomes go into `report`.
    pub fn publish(&self, report: &mut RunReport) -> Option<PublishResult> {
        let stamped = self.stamp_timestamp();
        self.record(report, Stage::Timestamp, stamped);

        let published = self.publish_chart();
        self.record(report, Stage::Publish, published)
    }

    fn publish_chart(&self) -> Result<PublishResult> {
        let id = self.require_map_id()?;
        let result = self.api.publish(id).context("Map publishing failed")?;
        debug!("Map published for map_id: {}", id);
        Ok(result)
    }

    /// Write the responsive embed snippet from a publish result.
    pub fn write_embed_artifact(&self, published: Option<&PublishResult>) -> Result<()> {
        let published =
            published.ok_or_else(|| anyhow!("no embed snippet: publish did not succeed"))?;
        let snippet = published
            .responsive_embed()
            .ok_or_else(|| ApiError::MissingField {
                what: format!("publish response for map_id {}", self.map_id_display()),
                field: EMBED_METHOD_RESPONSIVE,
            })?;
        debug!(
            "Writing html iframe to {} for map_id: {}",
            self.html_output.display(),
            self.map_id_display()
        );
        write_embed_artifact(snippet, &self.html_output)
    }

    // ─── Workflows ─────────────────────────────────────────────────────

    pub fn run(&mut self, mode: RunMode) -> RunReport {
        match mode {
            RunMode::Create => {
                info!("Initiating map creation process");
                self.run_create()
            }
            RunMode::Update => {
                info!("Initiating map data update process");
                self.run_update()
            }
        }
    }

    /// create → configure → tooltip → push data → timestamp → publish → write artifact.
    pub fn run_create(&mut self) -> RunReport {
        let mut report = RunReport::new();

        let created = self.create();
        self.record(&mut report, Stage::Create, created);

        let configured = self.configure();
        self.record(&mut report, Stage::Configure, configured);

        let tooltip = self.set_tooltip();
        self.record(&mut report, Stage::Tooltip, tooltip);

        let pushed = self.push_data();
        self.record(&mut report, Stage::PushData, pushed);

        let published = self.publish(&mut report);

        let written = self.write_embed_artifact(published.as_ref());
        self.record(&mut report, Stage::WriteArtifact, written);

        self.summarize(&report);
        report
    }

    /// push data → timestamp → publish, against the stored identifier.
    pub fn run_update(&mut self) -> RunReport {
        let mut report = RunReport::new();

        let pushed = self.push_data();
        self.record(&mut report, Stage::PushData, pushed);

        self.publish(&mut report);

        self.summarize(&report);
        report
    }

    // ─── Helpers ───────────────────────────────────────────────────────

    fn require_map_id(&self) -> Result<&MapId> {
        self.map_id
            .as_ref()
            .ok_or_else(|| anyhow!("no map identifier configured; run `create` first"))
    }

    fn map_id_display(&self) -> &str {
        self.map_id.as_ref().map(MapId::as_str).unwrap_or("<none>")
    }

    /// Log and store a stage result, handing back its value on success.
    fn record<T>(&self, report: &mut RunReport, stage: Stage, result: Result<T>) -> Option<T> {
        let (result, value) = match result {
            Ok(value) => {
                info!("Stage {} done for map_id: {}", stage, self.map_id_display());
                (Ok(()), Some(value))
            }
            Err(e) => {
                match e.downcast_ref::<ApiError>().and_then(ApiError::status) {
                    Some(status) => error!(
                        "Stage {} failed for map_id: {} (HTTP {}): error was: {:#}",
                        stage,
                        self.map_id_display(),
                        status,
                        e
                    ),
                    None => error!(
                        "Stage {} failed for map_id: {}: error was: {:#}",
                        stage,
                        self.map_id_display(),
                        e
                    ),
                }
                (Err(e), None)
            }
        };
        report.push(StageOutcome {
            stage,
            map_id: self.map_id.clone(),
            result,
        });
        value
    }

    fn summarize(&self, report: &RunReport) {
        let failed = report.failures().count();
        if failed == 0 {
            info!(
                "All {} stages succeeded for map_id: {}",
                report.outcomes().len(),
                self.map_id_display()
            );
        } else {
            warn!(
                "{} of {} stages failed for map_id: {}",
                failed,
                report.outcomes().len(),
                self.map_id_display()
            );
        }
    }
}

/// Run the workflow named by `mode`, building the publisher only when the
/// mode is recognised. Unknown modes log a warning and do nothing.
pub fn dispatch<A, S, F>(mode: &str, build: F) -> Result<Option<RunReport>>
where
    A: ChartApi,
    S: MapIdStore,
    F: FnOnce() -> Result<MapPublisher<A, S>>,
{
    let Some(mode) = RunMode::from_arg(mode) else {
        warn!("Unrecognised run type {:?}; expected `create` or `update`", mode);
        return Ok(None);
    };
    let mut publisher = build()?;
    Ok(Some(publisher.run(mode)))
}
