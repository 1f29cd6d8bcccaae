//! Decomposition of raw paths into interpolated vertex sequences.
//!
//! Every input segment is solved once with the inverse problem, and interior
//! vertices are then placed with direct-problem calls at equal fractions of
//! the segment distance along the initial bearing. Sampling along the
//! initial bearing is the contract here: the direct and inverse solvers are
//! mutually consistent on the same ellipsoid, so the sampled vertices lie on
//! the connecting geodesic to numerical tolerance.

use geodesic_types::{wrap_longitude, Ellipsoid, MultiPath, Path};

use crate::options::GeodesicOptions;
use crate::vincenty;

/// Decomposes a single path according to the given options.
///
/// Input vertices are passed through verbatim and in order; interpolation
/// only inserts vertices between them. Paths with fewer than two points have
/// no segments and decompose to themselves. Repeated input vertices are kept
/// (a zero-length segment contributes its endpoints like any other).
pub fn decompose_path(ellipsoid: &Ellipsoid, path: &Path, options: &GeodesicOptions) -> Path {
    if path.len() < 2 {
        return path.clone();
    }

    let parts = options.segment_parts();
    let mut points = Vec::with_capacity((path.len() - 1) * parts as usize + 1);
    points.push(path[0]);

    for (start, end) in path.iter_segments() {
        if parts > 1 {
            let solved = vincenty::inverse(ellipsoid, &start, &end);
            for part in 1..parts {
                let fraction = f64::from(part) / f64::from(parts);
                let sample = vincenty::direct(
                    ellipsoid,
                    &start,
                    solved.initial_bearing,
                    solved.distance * fraction,
                );
                points.push(sample.destination);
            }
        }
        points.push(end);
    }

    let mut decomposed = Path::new(points);
    if options.wrap {
        wrap_path(&mut decomposed);
    }

    decomposed
}

/// Decomposes every path of the collection, keeping the path order.
pub fn decompose(
    ellipsoid: &Ellipsoid,
    multipath: &MultiPath,
    options: &GeodesicOptions,
) -> MultiPath {
    multipath
        .iter()
        .map(|path| decompose_path(ellipsoid, path, options))
        .collect()
}

/// Shifts longitudes by full turns so that consecutive vertices never differ
/// by more than 180° of longitude.
///
/// The first vertex keeps its longitude; every following vertex is moved to
/// the representation closest to its predecessor. Latitudes and distances
/// are unaffected, only the display longitude changes.
fn wrap_path(path: &mut Path) {
    for index in 1..path.len() {
        let previous = path[index - 1].lng();
        let delta = path[index].lng() - previous;
        if delta.abs() > 180.0 {
            // Closed-form reduction; repeated ±360 steps would not
            // terminate for longitudes large enough that subtracting 360
            // is a no-op in f64 arithmetic. Vertices already within a half
            // turn pass through untouched.
            let lng = previous + wrap_longitude(delta);
            path[index] = path[index].with_lng(lng);
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use geodesic_types::latlon;

    use super::*;

    const WGS84: Ellipsoid = Ellipsoid::WGS84;

    #[test]
    fn zero_steps_returns_endpoints_verbatim() {
        let path = Path::new(vec![
            latlon!(52.5, 13.35),
            latlon!(47.56, -122.33),
            latlon!(-33.94, 18.39),
        ]);

        let decomposed = decompose_path(&WGS84, &path, &GeodesicOptions::new(true, 0));
        assert_eq!(decomposed, path);
    }

    #[test]
    fn short_paths_decompose_to_themselves() {
        let options = GeodesicOptions::default();
        assert_eq!(decompose_path(&WGS84, &Path::default(), &options).len(), 0);

        let single = Path::new(vec![latlon!(1.0, 2.0)]);
        assert_eq!(decompose_path(&WGS84, &single, &options), single);
    }

    #[test]
    fn vertex_count_per_depth() {
        let path = Path::new(vec![latlon!(52.5, 13.35), latlon!(33.82, -118.38)]);

        // one segment split into 2^(steps + 1) parts
        assert_eq!(
            decompose_path(&WGS84, &path, &GeodesicOptions::new(true, 1)).len(),
            5
        );
        assert_eq!(
            decompose_path(&WGS84, &path, &GeodesicOptions::new(true, 3)).len(),
            17
        );
    }

    #[test]
    fn excessive_depth_is_capped() {
        let path = Path::new(vec![latlon!(52.5, 13.35), latlon!(33.82, -118.38)]);

        let decomposed = decompose_path(&WGS84, &path, &GeodesicOptions::new(true, 31));
        assert_eq!(decomposed.len(), 513);
        assert_eq!(
            decomposed,
            decompose_path(
                &WGS84,
                &path,
                &GeodesicOptions::new(true, GeodesicOptions::MAX_STEPS)
            )
        );
    }

    #[test]
    fn interior_vertices_lie_on_the_geodesic() {
        let start = latlon!(52.5, 13.35);
        let end = latlon!(-33.94, 18.39);
        let path = Path::new(vec![start, end]);

        let decomposed = decompose_path(&WGS84, &path, &GeodesicOptions::new(true, 2));
        assert_eq!(decomposed.len(), 9);
        assert_eq!(decomposed[0], start);
        assert_eq!(decomposed[8], end);

        // sub-segment distances must sum back to the full distance
        let total = vincenty::inverse(&WGS84, &start, &end).distance;
        let summed: f64 = decomposed
            .iter_segments()
            .map(|(a, b)| vincenty::inverse(&WGS84, &a, &b).distance)
            .sum();
        assert_abs_diff_eq!(summed, total, epsilon = 1e-2);
    }

    #[test]
    fn wrapping_keeps_longitude_deltas_small() {
        let path = Path::new(vec![latlon!(45.0, 170.0), latlon!(45.0, -170.0)]);
        let decomposed = decompose_path(&WGS84, &path, &GeodesicOptions::new(true, 2));

        for (a, b) in decomposed.iter_segments() {
            assert!((a.lng() - b.lng()).abs() <= 180.0);
        }

        // the eastern endpoint is projected past the antimeridian
        let last = decomposed[decomposed.len() - 1];
        assert_abs_diff_eq!(last.lng(), 190.0, epsilon = 1e-12);
    }

    #[test]
    fn wrapping_disabled_passes_longitudes_through() {
        let path = Path::new(vec![latlon!(45.0, 170.0), latlon!(45.0, -170.0)]);
        let decomposed = decompose_path(&WGS84, &path, &GeodesicOptions::new(false, 0));

        assert_eq!(decomposed[0].lng(), 170.0);
        assert_eq!(decomposed[1].lng(), -170.0);
    }

    #[test]
    fn wrapping_handles_westward_crossings() {
        let path = Path::new(vec![latlon!(0.0, -179.0), latlon!(0.0, 179.0)]);
        let decomposed = decompose_path(&WGS84, &path, &GeodesicOptions::new(true, 0));

        assert_eq!(decomposed[0].lng(), -179.0);
        assert_abs_diff_eq!(decomposed[1].lng(), -181.0, epsilon = 1e-12);
    }

    #[test]
    fn wrapping_handles_extreme_longitudes() {
        // Longitudes this large cannot be reduced by repeated ±360 steps in
        // f64 arithmetic; wrapping must still terminate and keep the delta
        // within a half turn.
        let path = Path::new(vec![latlon!(0.0, 0.0), latlon!(0.0, 1e30)]);
        let decomposed = decompose_path(&WGS84, &path, &GeodesicOptions::new(true, 0));

        assert_eq!(decomposed.len(), 2);
        assert!((decomposed[1].lng() - decomposed[0].lng()).abs() <= 180.0);
    }

    #[test]
    fn decompose_keeps_path_order() {
        let multipath: MultiPath = vec![
            Path::new(vec![latlon!(52.5, 13.35), latlon!(33.82, -118.38)]),
            Path::new(vec![latlon!(-33.44, -70.71), latlon!(-33.94, 18.39)]),
        ]
        .into();

        let decomposed = decompose(&WGS84, &multipath, &GeodesicOptions::new(true, 1));
        assert_eq!(decomposed.len(), 2);
        assert_eq!(decomposed[0][0], latlon!(52.5, 13.35));
        assert_eq!(decomposed[1][0], latlon!(-33.44, -70.71));
    }
}
