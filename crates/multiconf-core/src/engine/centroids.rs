use crate::core::models::residue::{Residue, ResidueKey};
use crate::core::models::structure::Structure;
use crate::core::utils::{geometry, identifiers};
use nalgebra::{Point3, Vector3};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Occupancy-weighted centroids of a reference structure, keyed by
/// sequential index and residue name.
pub type CentroidMap = HashMap<ResidueKey, Point3<f64>>;

/// Per-model, per-position centroids of a predicted ensemble.
/// `residue_names` comes from model 0; `None` marks a residue with no
/// usable atoms.
#[derive(Debug, Clone, Default)]
pub struct EnsembleCentroids {
    pub residue_names: Vec<String>,
    pub models: Vec<Vec<Option<Point3<f64>>>>,
}

impl EnsembleCentroids {
    pub fn any_model_occupies(&self, position: usize) -> bool {
        self.models
            .iter()
            .any(|m| m.get(position).copied().flatten().is_some())
    }
}

// Heavy-atom coordinates of one altloc conformer and the occupancy
// recorded when the group was first seen.
struct AltlocGroup {
    coords: Vec<Point3<f64>>,
    occupancy: f64,
}

/// Occupancy-weighted centroid of a multiconformer residue: heavy atoms
/// with nonzero occupancy grouped by altloc code (blank normalized to
/// `'A'`), group centroids combined by occupancy-weighted average. `None`
/// when no usable atom exists.
fn multiconformer_centroid(residue: &Residue) -> Option<Point3<f64>> {
    let mut groups: HashMap<char, AltlocGroup> = HashMap::new();

    for atom in residue.atoms() {
        let occupancy = match atom.occupancy {
            Some(occ) if occ > 0.0 => occ,
            _ => continue,
        };
        if atom.element.is_hydrogen() {
            continue;
        }
        let altloc = atom.altloc.unwrap_or('A');
        groups
            .entry(altloc)
            .or_insert_with(|| AltlocGroup {
                coords: Vec::new(),
                occupancy,
            })
            .coords
            .push(atom.position);
    }

    if groups.is_empty() {
        return None;
    }

    let mut weighted_sum = Vector3::zeros();
    let mut total_weight = 0.0;
    for group in groups.values() {
        if let Some(center) = geometry::centroid(&group.coords) {
            weighted_sum += group.occupancy * center.coords;
            total_weight += group.occupancy;
        }
    }

    if total_weight == 0.0 {
        return None;
    }
    Some(Point3::from(weighted_sum / total_weight))
}

// Ensemble frames carry no occupancy or altloc information.
fn frame_centroid(residue: &Residue) -> Option<Point3<f64>> {
    let coords: Vec<Point3<f64>> = residue
        .atoms()
        .iter()
        .filter(|a| !a.element.is_hydrogen())
        .map(|a| a.position)
        .collect();
    geometry::centroid(&coords)
}

/// Builds the reference centroid map from the first chain of the first
/// model. A chain-free structure yields an empty map with a warning.
pub fn reference_centroids(structure: &Structure) -> CentroidMap {
    let mut centroids = CentroidMap::new();

    let Some(chain) = structure.first_model().and_then(|m| m.first_chain()) else {
        warn!(
            structure = %structure.id,
            "No chains found in reference structure, skipping"
        );
        return centroids;
    };

    let sequence: String = chain
        .residues()
        .iter()
        .map(|r| identifiers::one_letter_code(&r.name).unwrap_or('X'))
        .collect();
    debug!(chain = %chain.id, %sequence, "Reference chain sequence");

    for (index, residue) in chain.residues().iter().enumerate() {
        if !identifiers::is_standard_residue(&residue.name) {
            debug!(index, residue = %residue.name, "Non-standard residue name in reference");
        }
        if let Some(centroid) = multiconformer_centroid(residue) {
            centroids.insert(ResidueKey::new(index, &residue.name), centroid);
        }
    }
    centroids
}

/// Extracts per-model, per-position centroids from an ensemble. Positions
/// advance over residues with no usable atoms.
pub fn ensemble_centroids(structure: &Structure) -> EnsembleCentroids {
    let Some(first_chain) = structure.first_model().and_then(|m| m.first_chain()) else {
        warn!(
            structure = %structure.id,
            "No chains found in ensemble structure, skipping"
        );
        return EnsembleCentroids::default();
    };

    let residue_names: Vec<String> = first_chain
        .residues()
        .iter()
        .map(|r| r.name.clone())
        .collect();

    let mut models = Vec::with_capacity(structure.models().len());
    for model in structure.models() {
        let Some(chain) = model.first_chain() else {
            models.push(Vec::new());
            continue;
        };
        let per_position: Vec<Option<Point3<f64>>> =
            chain.residues().iter().map(frame_centroid).collect();
        models.push(per_position);
    }

    EnsembleCentroids {
        residue_names,
        models,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::{Atom, Element};
    use crate::core::models::structure::{Chain, Model};

    const TOL: f64 = 1e-9;

    fn atom_at(x: f64, occupancy: Option<f64>, altloc: Option<char>) -> Atom {
        let mut atom = Atom::new("CA", Element::Carbon, Point3::new(x, 0.0, 0.0));
        atom.occupancy = occupancy;
        atom.altloc = altloc;
        atom
    }

    fn single_chain_structure(id: &str, residues: Vec<Residue>) -> Structure {
        let mut chain = Chain::new('A');
        for residue in residues {
            chain.add_residue(residue);
        }
        let mut model = Model::new();
        model.add_chain(chain);
        Structure::with_models(id, vec![model])
    }

    #[test]
    fn weighted_centroid_combines_altloc_groups_by_occupancy() {
        // Group A at x=0 with occupancy 0.3, group B at x=10 with 0.7.
        let residue = Residue::with_atoms(
            "SER",
            vec![
                atom_at(0.0, Some(0.3), Some('A')),
                atom_at(10.0, Some(0.7), Some('B')),
            ],
        );
        let centroid = multiconformer_centroid(&residue).unwrap();
        assert!((centroid.x - 7.0).abs() < TOL);
    }

    #[test]
    fn weighted_centroid_lies_between_group_centroids() {
        let residue = Residue::with_atoms(
            "SER",
            vec![
                atom_at(1.0, Some(0.45), Some('A')),
                atom_at(3.0, Some(0.45), Some('A')),
                atom_at(8.0, Some(0.55), Some('B')),
            ],
        );
        let centroid = multiconformer_centroid(&residue).unwrap();
        // Group centroids are x=2 and x=8; the weighted mean must stay in
        // their convex hull.
        assert!(centroid.x > 2.0 - TOL && centroid.x < 8.0 + TOL);
        assert!((centroid.x - (0.45 * 2.0 + 0.55 * 8.0)).abs() < TOL);
    }

    #[test]
    fn blank_altloc_merges_into_group_a() {
        let residue = Residue::with_atoms(
            "ALA",
            vec![
                atom_at(0.0, Some(0.5), None),
                atom_at(2.0, Some(0.5), Some('A')),
            ],
        );
        // One group of two atoms, not two groups of one.
        let centroid = multiconformer_centroid(&residue).unwrap();
        assert!((centroid.x - 1.0).abs() < TOL);
    }

    #[test]
    fn zero_and_missing_occupancy_atoms_are_excluded() {
        let residue = Residue::with_atoms(
            "ALA",
            vec![
                atom_at(100.0, Some(0.0), Some('A')),
                atom_at(50.0, None, Some('B')),
                atom_at(4.0, Some(1.0), Some('C')),
            ],
        );
        let centroid = multiconformer_centroid(&residue).unwrap();
        assert!((centroid.x - 4.0).abs() < TOL);
    }

    #[test]
    fn residue_with_no_usable_atoms_yields_no_centroid() {
        let residue = Residue::with_atoms("ALA", vec![atom_at(1.0, Some(0.0), None)]);
        assert!(multiconformer_centroid(&residue).is_none());
    }

    #[test]
    fn hydrogens_are_excluded_from_both_centroid_kinds() {
        let mut hydrogen = Atom::new("H", Element::Hydrogen, Point3::new(1000.0, 0.0, 0.0));
        hydrogen.occupancy = Some(1.0);
        let residue = Residue::with_atoms("GLY", vec![hydrogen, atom_at(2.0, Some(1.0), None)]);

        let weighted = multiconformer_centroid(&residue).unwrap();
        assert!((weighted.x - 2.0).abs() < TOL);
        let unweighted = frame_centroid(&residue).unwrap();
        assert!((unweighted.x - 2.0).abs() < TOL);
    }

    #[test]
    fn reference_map_keys_use_sequential_document_order() {
        let structure = single_chain_structure(
            "1abc",
            vec![
                Residue::with_atoms("MET", vec![atom_at(0.0, Some(1.0), None)]),
                Residue::with_atoms("LYS", vec![atom_at(1.0, Some(1.0), None)]),
            ],
        );
        let map = reference_centroids(&structure);
        assert_eq!(map.len(), 2);
        assert!(map.contains_key(&ResidueKey::new(0, "MET")));
        assert!(map.contains_key(&ResidueKey::new(1, "LYS")));
    }

    #[test]
    fn unusable_residue_still_advances_the_sequential_index() {
        let structure = single_chain_structure(
            "1abc",
            vec![
                Residue::with_atoms("MET", vec![atom_at(0.0, Some(1.0), None)]),
                Residue::with_atoms("LYS", vec![atom_at(1.0, Some(0.0), None)]),
                Residue::with_atoms("ALA", vec![atom_at(2.0, Some(1.0), None)]),
            ],
        );
        let map = reference_centroids(&structure);
        assert_eq!(map.len(), 2);
        assert!(!map.contains_key(&ResidueKey::new(1, "LYS")));
        assert!(map.contains_key(&ResidueKey::new(2, "ALA")));
    }

    #[test]
    fn empty_reference_structure_yields_empty_map() {
        let structure = Structure::new("empty");
        assert!(reference_centroids(&structure).is_empty());

        let chain_free = Structure::with_models("bare", vec![Model::new()]);
        assert!(reference_centroids(&chain_free).is_empty());
    }

    #[test]
    fn ensemble_extraction_keeps_positions_aligned_across_models() {
        let make_model = |offset: f64| {
            let mut chain = Chain::new('A');
            chain.add_residue(Residue::with_atoms(
                "MET",
                vec![Atom::new("CA", Element::Carbon, Point3::new(offset, 0.0, 0.0))],
            ));
            chain.add_residue(Residue::new("LYS")); // no atoms
            chain.add_residue(Residue::with_atoms(
                "GLY",
                vec![Atom::new(
                    "CA",
                    Element::Carbon,
                    Point3::new(offset + 2.0, 0.0, 0.0),
                )],
            ));
            let mut model = Model::new();
            model.add_chain(chain);
            model
        };
        let structure =
            Structure::with_models("ens", vec![make_model(0.0), make_model(10.0)]);

        let extracted = ensemble_centroids(&structure);
        assert_eq!(extracted.residue_names, vec!["MET", "LYS", "GLY"]);
        assert_eq!(extracted.models.len(), 2);
        for model in &extracted.models {
            assert!(model[0].is_some());
            assert!(model[1].is_none());
            assert!(model[2].is_some());
        }
        assert!(extracted.any_model_occupies(0));
        assert!(!extracted.any_model_occupies(1));
    }

    #[test]
    fn empty_ensemble_yields_empty_extraction() {
        let extracted = ensemble_centroids(&Structure::new("none"));
        assert!(extracted.residue_names.is_empty());
        assert!(extracted.models.is_empty());
    }
}
