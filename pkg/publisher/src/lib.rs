//! Map lifecycle: create or reuse a chart, push case data, publish.
//!
//! Every step of a run is attempted in a fixed order whatever happened to
//! the step before it. Each step's result is recorded in a [`RunReport`]
//! and failures are logged, never propagated.

pub mod artifact;
pub mod publisher;
pub mod stage;
pub mod store;
pub mod timestamp;
pub mod transcode;

#[cfg(test)]
mod testing;

pub use publisher::{MapPublisher, PublisherConfig, RunMode, dispatch};
pub use stage::{RunReport, Stage, StageOutcome};
pub use store::{ConfigFileStore, MapIdStore};
