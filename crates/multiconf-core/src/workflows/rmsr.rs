use super::EnsembleInput;
use crate::core::models::structure::Structure;
use crate::core::models::records::DeviationRecord;
use crate::engine::centroids::{ensemble_centroids, reference_centroids};
use crate::engine::deviation::{aggregate_rmsr, per_model_rmsr};
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Failure of an external alignment tool.
#[derive(Debug, Error)]
#[error("alignment failed: {0}")]
pub struct AlignmentError(pub String);

/// Rigid-body superposition of a mobile ensemble onto the reference,
/// provided by an external collaborator. Best-effort: a failing aligner
/// degrades gracefully to the unaligned ensemble.
pub trait Aligner {
    fn align(&self, reference: &Structure, mobile: &Structure)
    -> Result<Structure, AlignmentError>;
}

/// Ensemble-aggregate RMSR across all predictors. Missing or chain-free
/// ensembles are skipped with a warning.
#[instrument(skip_all, name = "rmsr_aggregate_workflow")]
pub fn aggregate(reference: &Structure, ensembles: &[EnsembleInput]) -> Vec<DeviationRecord> {
    let reference_map = reference_centroids(reference);
    info!(
        reference = %reference.id,
        centroids = reference_map.len(),
        "Collected multiconformer residue centroids"
    );

    let mut records = Vec::new();
    for input in ensembles {
        let Some(structure) = &input.structure else {
            warn!(predictor = %input.predictor, "Ensemble not found, skipping");
            continue;
        };
        let centroids = ensemble_centroids(structure);
        records.extend(aggregate_rmsr(&input.predictor, &centroids, &reference_map));
    }
    info!(rows = records.len(), "Aggregate RMSR run complete");
    records
}

/// Per-model RMSR across all predictors. With an `aligner`, each ensemble
/// is superposed onto the reference first; alignment failure falls back to
/// the unaligned ensemble with a warning.
#[instrument(skip_all, name = "rmsr_per_model_workflow")]
pub fn per_model(
    reference: &Structure,
    ensembles: &[EnsembleInput],
    aligner: Option<&dyn Aligner>,
) -> Vec<DeviationRecord> {
    let reference_map = reference_centroids(reference);
    info!(
        reference = %reference.id,
        centroids = reference_map.len(),
        "Collected multiconformer residue centroids"
    );

    let mut records = Vec::new();
    for input in ensembles {
        let Some(structure) = &input.structure else {
            warn!(predictor = %input.predictor, "Ensemble not found, skipping");
            continue;
        };

        let aligned = match aligner {
            Some(aligner) => match aligner.align(reference, structure) {
                Ok(aligned) => Some(aligned),
                Err(error) => {
                    warn!(
                        predictor = %input.predictor,
                        %error,
                        "Falling back to the unaligned ensemble"
                    );
                    None
                }
            },
            None => None,
        };
        let structure = aligned.as_ref().unwrap_or(structure);

        let centroids = ensemble_centroids(structure);
        records.extend(per_model_rmsr(&input.predictor, &centroids, &reference_map));
    }
    info!(rows = records.len(), "Per-model RMSR run complete");
    records
}
