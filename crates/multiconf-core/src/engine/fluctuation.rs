use super::centroids::EnsembleCentroids;
use crate::core::models::records::{DeviationRecord, SimilarityRecord};
use crate::core::utils::geometry;
use nalgebra::{Point3, Vector3};

/// Per-residue RMSF: fluctuation of each residue's per-model centroids
/// about their mean. Intra-ensemble only; no reference correspondence, the
/// residue index is the ensemble document-order position.
pub fn rmsf(predictor: &str, ensemble: &EnsembleCentroids) -> Vec<DeviationRecord> {
    let mut records = Vec::new();
    for (position, name) in ensemble.residue_names.iter().enumerate() {
        let centroids: Vec<Point3<f64>> = ensemble
            .models
            .iter()
            .filter_map(|model| model.get(position).copied().flatten())
            .collect();
        let Some(mean) = mean_point(&centroids) else {
            continue;
        };

        let deviations: Vec<f64> = centroids
            .iter()
            .map(|c| geometry::distance(c, &mean))
            .collect();
        if let Some(value) = geometry::root_mean_square(&deviations) {
            records.push(DeviationRecord {
                predictor: predictor.to_string(),
                model: None,
                residue: position,
                residue_name: name.clone(),
                value,
            });
        }
    }
    records
}

fn mean_point(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum / points.len() as f64))
}

/// Pairwise cosine similarity over named RMSF profiles, one row per
/// unordered pair in input order.
pub fn cosine_pairs(profiles: &[(String, Vec<f64>)]) -> Vec<SimilarityRecord> {
    let mut records = Vec::new();
    for (i, (first, a)) in profiles.iter().enumerate() {
        for (second, b) in &profiles[i + 1..] {
            records.push(SimilarityRecord {
                first: first.clone(),
                second: second.clone(),
                value: geometry::cosine_similarity(a, b),
            });
        }
    }
    records
}
