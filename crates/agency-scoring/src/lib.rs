//! Risk and performance scoring for agency dashboards.
//!
//! The [`scoring`] module is the pure core: it takes already-loaded task,
//! submission, project, and lead snapshots and returns weighted scores with
//! per-factor explanations. The remaining modules hold the config, tracing and
//! error plumbing used by the service binary.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
