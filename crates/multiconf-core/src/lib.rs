//! # Multiconf Core Library
//!
//! A library for comparing computationally predicted protein conformational
//! ensembles against a single deposited multiconformer reference structure,
//! at the per-residue level and at scale across many predictors.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the read-only structural data
//!   models (`Structure`, `Model`, `Chain`, `Residue`, `Atom`) that an
//!   external parser populates, geometry utilities, the amino-acid name
//!   vocabulary, and the tabular output writers.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer implements the
//!   science: occupancy-weighted centroid construction, the residue
//!   correspondence state machine that survives index drift between
//!   numbering schemes, deviation aggregation, intra-ensemble fluctuation
//!   statistics, and the bounded-concurrency harness for expensive
//!   per-frame metric computations.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute complete comparison
//!   runs across many predictors, absorbing per-unit failures so one bad
//!   ensemble or frame never aborts a batch.

pub mod core;
pub mod engine;
pub mod workflows;
