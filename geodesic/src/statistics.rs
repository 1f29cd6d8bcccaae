//! Distance and vertex statistics over decomposed path collections.

use geodesic_types::{Ellipsoid, MultiPath};
use serde::{Deserialize, Serialize};

use crate::vincenty;

/// Aggregated numbers describing a path collection.
///
/// Statistics have no identity of their own; they are recomputed from the
/// current raw and decomposed paths whenever either changes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Statistics {
    /// Sum of all segment distances over all paths, in meters.
    pub total_distance: f64,
    /// Distance of each path in meters, in path order.
    pub distance_array: Vec<f64>,
    /// Number of raw input vertices, before decomposition.
    pub points: usize,
    /// Number of output vertices, after decomposition.
    pub vertices: usize,
}

impl Statistics {
    /// Computes statistics for a raw path collection and its decomposition.
    ///
    /// Distances are summed over consecutive vertex pairs of the decomposed
    /// paths. The inverse solver reduces longitude differences into a half
    /// turn before use, so longitudes shifted for antimeridian display do
    /// not change the distances.
    pub fn compute(ellipsoid: &Ellipsoid, raw: &MultiPath, decomposed: &MultiPath) -> Self {
        let distance_array: Vec<f64> = decomposed
            .iter()
            .map(|path| {
                path.iter_segments()
                    .map(|(start, end)| vincenty::inverse(ellipsoid, &start, &end).distance)
                    .sum()
            })
            .collect();

        Self {
            total_distance: distance_array.iter().sum(),
            distance_array,
            points: raw.total_points(),
            vertices: decomposed.total_points(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use geodesic_types::{latlon, Path};

    use super::*;
    use crate::decompose::decompose;
    use crate::options::GeodesicOptions;

    const WGS84: Ellipsoid = Ellipsoid::WGS84;

    fn compute(raw: MultiPath, options: GeodesicOptions) -> Statistics {
        let decomposed = decompose(&WGS84, &raw, &options);
        Statistics::compute(&WGS84, &raw, &decomposed)
    }

    #[test]
    fn single_path_without_interpolation() {
        let raw: MultiPath = vec![Path::new(vec![
            latlon!(52.5, 13.35),    // Berlin
            latlon!(47.56, -122.33), // Seattle
            latlon!(-33.94, 18.39),  // Capetown
        ])]
        .into();

        let statistics = compute(raw, GeodesicOptions::new(true, 0));
        assert_eq!(statistics.points, 3);
        assert_eq!(statistics.vertices, 3);
        assert_eq!(statistics.distance_array.len(), 1);
        assert_abs_diff_eq!(statistics.total_distance, 24_569_051.081, epsilon = 0.01);
    }

    #[test]
    fn two_paths_with_interpolation() {
        let raw: MultiPath = vec![
            Path::new(vec![latlon!(52.5, 13.35), latlon!(33.82, -118.38)]), // Berlin - Los Angeles
            Path::new(vec![latlon!(-33.44, -70.71), latlon!(-33.94, 18.39)]), // Santiago - Capetown
        ]
        .into();

        let statistics = compute(raw, GeodesicOptions::new(true, 1));
        assert_eq!(statistics.points, 4);
        assert_eq!(statistics.vertices, 10);
        assert_eq!(statistics.distance_array.len(), 2);
        assert_abs_diff_eq!(statistics.total_distance, 17_319_123.024, epsilon = 0.01);
    }

    #[test]
    fn decomposition_only_adds_vertices() {
        let raw: MultiPath = vec![
            Path::new(vec![latlon!(0.0, 0.0), latlon!(10.0, 10.0), latlon!(20.0, 0.0)]),
            Path::new(vec![latlon!(45.0, 170.0), latlon!(45.0, -170.0)]),
            Path::new(vec![latlon!(1.0, 1.0)]),
        ]
        .into();

        for steps in [0, 1, 3, 5] {
            let statistics = compute(raw.clone(), GeodesicOptions::new(true, steps));
            assert!(statistics.points <= statistics.vertices);
        }
    }

    #[test]
    fn wrapping_does_not_change_distances() {
        let raw: MultiPath =
            vec![Path::new(vec![latlon!(45.0, 170.0), latlon!(45.0, -170.0)])].into();

        let wrapped = compute(raw.clone(), GeodesicOptions::new(true, 2));
        let unwrapped = compute(raw, GeodesicOptions::new(false, 2));
        assert_abs_diff_eq!(
            wrapped.total_distance,
            unwrapped.total_distance,
            epsilon = 1e-6
        );
    }

    #[test]
    fn empty_collection() {
        let statistics = compute(MultiPath::default(), GeodesicOptions::default());
        assert_eq!(statistics, Statistics::default());
    }
}
