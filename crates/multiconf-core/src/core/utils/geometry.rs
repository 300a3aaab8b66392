use nalgebra::{Point3, Vector3};

/// Unweighted centroid of a point set, `None` for an empty set.
pub fn centroid(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum / points.len() as f64))
}

/// Euclidean distance between two points.
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}

/// Root mean square of a sample set, `None` for an empty set.
pub fn root_mean_square(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mean_sq = values.iter().map(|v| v * v).sum::<f64>() / values.len() as f64;
    Some(mean_sq.sqrt())
}

/// Cosine similarity of two equal-dimension vectors; `0.0` when either
/// magnitude is zero. Dimensions beyond the shorter vector are ignored.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b = b.iter().map(|y| y * y).sum::<f64>().sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a * mag_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn centroid_of_empty_set_is_none() {
        assert!(centroid(&[]).is_none());
    }

    #[test]
    fn centroid_of_single_point_is_the_point() {
        let p = Point3::new(1.0, -2.0, 3.5);
        assert_eq!(centroid(&[p]), Some(p));
    }

    #[test]
    fn centroid_averages_coordinates() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 4.0, 6.0),
            Point3::new(4.0, 2.0, 0.0),
        ];
        let c = centroid(&points).unwrap();
        assert!((c - Point3::new(2.0, 2.0, 2.0)).norm() < TOL);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 0.0);
        assert!((distance(&a, &b) - 5.0).abs() < TOL);
    }

    #[test]
    fn root_mean_square_of_empty_set_is_none() {
        assert!(root_mean_square(&[]).is_none());
    }

    #[test]
    fn root_mean_square_matches_hand_computation() {
        // sqrt((9 + 16) / 2) = sqrt(12.5)
        let rms = root_mean_square(&[3.0, 4.0]).unwrap();
        assert!((rms - 12.5f64.sqrt()).abs() < TOL);
    }

    #[test]
    fn root_mean_square_of_constant_samples_is_the_constant() {
        let rms = root_mean_square(&[2.5, 2.5, 2.5]).unwrap();
        assert!((rms - 2.5).abs() < TOL);
    }

    #[test]
    fn cosine_similarity_of_parallel_vectors_is_one() {
        let sim = cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert!((sim - 1.0).abs() < TOL);
    }

    #[test]
    fn cosine_similarity_of_orthogonal_vectors_is_zero() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
        assert!(sim.abs() < TOL);
    }

    #[test]
    fn cosine_similarity_of_zero_magnitude_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }
}
