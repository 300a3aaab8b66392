use super::centroids::{CentroidMap, EnsembleCentroids};
use super::correspondence::{find_base_offset, resolve_positions};
use crate::core::models::records::DeviationRecord;
use crate::core::utils::geometry;
use tracing::warn;

/// Ensemble-aggregate RMSR: one record per resolved residue, the RMS of
/// that residue's per-model deviations from the reference centroid.
/// Correspondence is resolved once for the whole ensemble, over model-0
/// names, with a position counted as present when any model occupies it.
pub fn aggregate_rmsr(
    predictor: &str,
    ensemble: &EnsembleCentroids,
    reference: &CentroidMap,
) -> Vec<DeviationRecord> {
    let names = &ensemble.residue_names;
    let occupied: Vec<bool> = (0..names.len())
        .map(|p| ensemble.any_model_occupies(p))
        .collect();

    let base = find_base_offset(names, reference);
    let resolved = resolve_positions(names, &occupied, base, reference);
    if resolved.unresolved > 0 {
        warn!(
            predictor,
            unresolved = resolved.unresolved,
            "Positions without reference correspondence were skipped"
        );
    }

    let mut records = Vec::new();
    for position in 0..names.len() {
        let Some(key) = resolved.get(position) else {
            continue;
        };
        let Some(reference_centroid) = reference.get(key) else {
            // The resolver only hands out keys present in the map, but a
            // missing lookup is a skip, not a panic.
            warn!(predictor, %key, "Resolved key missing from reference map");
            continue;
        };

        let deviations: Vec<f64> = ensemble
            .models
            .iter()
            .filter_map(|model| model.get(position).copied().flatten())
            .map(|centroid| geometry::distance(&centroid, reference_centroid))
            .collect();

        if let Some(rmsr) = geometry::root_mean_square(&deviations) {
            records.push(DeviationRecord {
                predictor: predictor.to_string(),
                model: None,
                residue: key.index,
                residue_name: key.name.clone(),
                value: rmsr,
            });
        }
    }
    records
}

/// Per-model RMSR: one record per model per resolved position, the scalar
/// distance to the reference centroid (a single model has one sample, so
/// no RMS). The base offset is shared; the shift scan re-runs per model.
pub fn per_model_rmsr(
    predictor: &str,
    ensemble: &EnsembleCentroids,
    reference: &CentroidMap,
) -> Vec<DeviationRecord> {
    let names = &ensemble.residue_names;
    let base = find_base_offset(names, reference);

    let mut records = Vec::new();
    for (model_index, model) in ensemble.models.iter().enumerate() {
        let occupied: Vec<bool> = (0..names.len())
            .map(|p| model.get(p).copied().flatten().is_some())
            .collect();

        let resolved = resolve_positions(names, &occupied, base, reference);
        if resolved.unresolved > 0 {
            warn!(
                predictor,
                model = model_index + 1,
                unresolved = resolved.unresolved,
                "Positions without reference correspondence were skipped"
            );
        }

        for position in 0..names.len() {
            let (Some(key), Some(centroid)) = (
                resolved.get(position),
                model.get(position).copied().flatten(),
            ) else {
                continue;
            };
            let Some(reference_centroid) = reference.get(key) else {
                continue;
            };
            records.push(DeviationRecord {
                predictor: predictor.to_string(),
                model: Some(model_index + 1),
                residue: key.index,
                residue_name: key.name.clone(),
                value: geometry::distance(&centroid, reference_centroid),
            });
        }
    }
    records
}
