//! # Engine Module
//!
//! The stateful logic layer: centroid construction, residue correspondence,
//! deviation aggregation, and the bounded-concurrency frame-metric harness.
//!
//! ## Architecture
//!
//! - **Centroid Builders** ([`centroids`]) - Occupancy-weighted reference
//!   centroids and per-model ensemble centroids
//! - **Correspondence** ([`correspondence`]) - The index-shift state machine
//!   mapping ensemble positions to reference residue keys
//! - **Deviation** ([`deviation`]) - Per-residue RMSR in both output shapes
//! - **Fluctuation** ([`fluctuation`]) - Intra-ensemble per-residue RMSF and
//!   pairwise profile similarity
//! - **Harness** ([`harness`]) - Fault-isolating parallel execution of
//!   expensive external per-frame metrics
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - The fatal error class
//!
//! Failures local to one unit of work (one residue, one frame, one
//! predictor) are absorbed at that unit's boundary and logged; only
//! resource-acquisition failures propagate as [`error::EngineError`].

pub mod centroids;
pub mod correspondence;
pub mod deviation;
pub mod error;
pub mod fluctuation;
pub mod harness;
pub mod progress;
