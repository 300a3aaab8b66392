//! # Workflows Module
//!
//! Top-level entry points that tie the `engine` and `core` layers together
//! into complete comparison runs across many predictors.
//!
//! ## Architecture
//!
//! - **RMSR Workflow** ([`rmsr`]) - Per-residue deviation of predicted
//!   ensembles from a multiconformer reference, in ensemble-aggregate and
//!   per-model output shapes.
//! - **Fluctuation Workflow** ([`fluctuation`]) - Intra-ensemble per-residue
//!   RMSF and pairwise similarity of RMSF profiles across predictors.
//! - **Frame Metrics Workflow** ([`frame_metrics`]) - Batched execution of
//!   expensive external per-frame metrics (density-fit scoring, free-R
//!   refinement) across predictors.
//!
//! Workflows absorb per-predictor failures: a missing ensemble, an
//! unresolvable model, or a failing frame is logged and skipped, and the run
//! always terminates with whatever subset of the output could be computed.

pub mod fluctuation;
pub mod frame_metrics;
pub mod rmsr;

use crate::core::models::structure::Structure;

/// One predictor's ensemble as handed to a workflow. `structure` is `None`
/// when the ensemble file was absent or unloadable.
#[derive(Debug, Clone)]
pub struct EnsembleInput {
    pub predictor: String,
    pub structure: Option<Structure>,
}

impl EnsembleInput {
    pub fn new(predictor: &str, structure: Structure) -> Self {
        Self {
            predictor: predictor.to_string(),
            structure: Some(structure),
        }
    }

    /// An entry whose structure file could not be loaded.
    pub fn missing(predictor: &str) -> Self {
        Self {
            predictor: predictor.to_string(),
            structure: None,
        }
    }
}
