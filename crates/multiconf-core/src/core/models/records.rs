use serde::Serialize;

/// One per-residue deviation row, the unit of the RMSR output tables.
///
/// `model` is `None` for the ensemble-aggregate shape (RMS across all
/// models) and `Some(m)` for the per-model shape, where models are numbered
/// from 1 in output. `residue` is the reference sequential index after
/// shift resolution, so rows from different predictors line up on the same
/// reference residue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviationRecord {
    pub predictor: String,
    pub model: Option<usize>,
    pub residue: usize,
    pub residue_name: String,
    pub value: f64,
}

/// One successfully computed frame-metric row.
///
/// The payload is whatever the external calculator emitted (typically a
/// JSON document), carried as an opaque string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRecord {
    pub predictor: String,
    pub frame: usize,
    pub payload: String,
}

/// One pairwise similarity row between two RMSF profiles. The elements are
/// predictor tags, or "deposited" for a caller-supplied reference profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityRecord {
    pub first: String,
    pub second: String,
    pub value: f64,
}
