//! Centralized constants for the map worker.
//!
//! All fixed values sent to the charting service or used as defaults live here.
//! Change a value in one place and it applies everywhere.

pub mod api;
pub mod map;
pub mod paths;
