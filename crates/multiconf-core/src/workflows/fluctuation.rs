use super::EnsembleInput;
use crate::core::models::records::{DeviationRecord, SimilarityRecord};
use crate::engine::centroids::ensemble_centroids;
use crate::engine::fluctuation;
use tracing::{info, instrument, warn};

/// Per-residue RMSF for every predictor's ensemble. Purely intra-ensemble;
/// no reference structure is involved.
#[instrument(skip_all, name = "rmsf_workflow")]
pub fn rmsf(ensembles: &[EnsembleInput]) -> Vec<DeviationRecord> {
    let mut records = Vec::new();
    for input in ensembles {
        let Some(structure) = &input.structure else {
            warn!(predictor = %input.predictor, "Ensemble not found, skipping");
            continue;
        };
        let centroids = ensemble_centroids(structure);
        records.extend(fluctuation::rmsf(&input.predictor, &centroids));
    }
    info!(rows = records.len(), "RMSF run complete");
    records
}

/// Pairwise cosine similarity between RMSF profiles, one profile per
/// predictor found in `records` (first-seen order), optionally preceded by
/// a caller-supplied deposited-structure profile.
#[instrument(skip_all, name = "rmsf_similarity_workflow")]
pub fn similarity(
    deposited: Option<(&str, &[f64])>,
    records: &[DeviationRecord],
) -> Vec<SimilarityRecord> {
    let mut profiles: Vec<(String, Vec<f64>)> = Vec::new();
    if let Some((tag, values)) = deposited {
        profiles.push((tag.to_string(), values.to_vec()));
    }
    for record in records {
        match profiles.iter_mut().find(|(tag, _)| *tag == record.predictor) {
            Some((_, values)) => values.push(record.value),
            None => profiles.push((record.predictor.clone(), vec![record.value])),
        }
    }

    let similarities = fluctuation::cosine_pairs(&profiles);
    info!(
        profiles = profiles.len(),
        pairs = similarities.len(),
        "RMSF similarity run complete"
    );
    similarities
}
