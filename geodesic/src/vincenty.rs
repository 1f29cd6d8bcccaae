//! Vincenty's solutions of the direct and inverse geodesic problems.
//!
//! Both solvers work on an arbitrary [`Ellipsoid`] and are pure functions:
//! identical inputs always give identical outputs, and nothing outside the
//! returned values is touched (except for log records on the slow
//! non-convergence recovery paths).
//!
//! The inverse solver iterates on the difference of longitudes on the
//! auxiliary sphere and can fail to converge for near-antipodal points. That
//! case is recovered internally (see [`inverse`]) and never surfaces to the
//! caller.

use geodesic_types::{wrap_longitude, Ellipsoid, GeoPoint};
use thiserror::Error;

/// Iteration cutoff for the λ update of the inverse problem, in radians.
const CONVERGENCE_TOLERANCE: f64 = 1e-12;

/// Iteration cap; Vincenty's inverse formula either converges in a handful
/// of iterations or, for near-antipodal pairs, not at all.
const MAX_ITERATIONS: u32 = 100;

/// Solution of the inverse geodesic problem.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InverseResult {
    /// Geodesic distance between the points in meters.
    pub distance: f64,
    /// Bearing at the start point, degrees clockwise from north, `[0, 360)`.
    pub initial_bearing: f64,
    /// Bearing at the end point, degrees clockwise from north, `[0, 360)`.
    pub final_bearing: f64,
}

/// Solution of the direct geodesic problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectResult {
    /// The point reached by travelling the requested distance along the
    /// geodesic. Its longitude is reduced into `(-180, 180]`.
    pub destination: GeoPoint,
    /// Bearing at the destination, degrees clockwise from north, `[0, 360)`.
    pub final_bearing: f64,
}

#[derive(Debug, Error)]
#[error("inverse geodesic solution did not converge after {iterations} iterations")]
struct NonConvergence {
    best: InverseResult,
    iterations: u32,
}

/// Computes distance and bearings between two points on the ellipsoid.
///
/// Coincident points give an all-zero result by convention (the bearing
/// between a point and itself is undefined).
///
/// For near-antipodal pairs the iteration may not converge; the solver then
/// retries with the destination longitude nudged 0.01° toward zero, and if
/// that fails as well, returns the best value the iteration reached. Neither
/// recovery panics or returns an error.
pub fn inverse(ellipsoid: &Ellipsoid, p1: &GeoPoint, p2: &GeoPoint) -> InverseResult {
    match inverse_iteration(ellipsoid, p1, p2) {
        Ok(result) => result,
        Err(failure) => {
            log::debug!("{failure}; retrying with a nudged destination");
            let nudged = GeoPoint::latlon(p2.lat(), p2.lng() - 0.01 * p2.lng().signum());
            match inverse_iteration(ellipsoid, p1, &nudged) {
                Ok(result) => result,
                Err(failure) => {
                    log::warn!("{failure} for a near-antipodal pair; using best-effort value");
                    failure.best
                }
            }
        }
    }
}

fn inverse_iteration(
    ellipsoid: &Ellipsoid,
    p1: &GeoPoint,
    p2: &GeoPoint,
) -> Result<InverseResult, NonConvergence> {
    let a = ellipsoid.semimajor();
    let b = ellipsoid.semiminor();
    let f = ellipsoid.flattening();

    let l = wrap_longitude(p2.lng() - p1.lng()).to_radians();
    let u1 = ((1.0 - f) * clamp_latitude(p1.lat()).to_radians().tan()).atan();
    let u2 = ((1.0 - f) * clamp_latitude(p2.lat()).to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut iterations = 0;
    loop {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // coincident points
            return Ok(InverseResult::default());
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        let cos_2sigma_m = if cos_sq_alpha == 0.0 {
            // both points on the equator
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        };

        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let next_lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        let converged = (next_lambda - lambda).abs() < CONVERGENCE_TOLERANCE;
        lambda = next_lambda;
        iterations += 1;

        if converged || iterations >= MAX_ITERATIONS {
            let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
            let cap_a =
                1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
            let cap_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
            let delta_sigma = cap_b
                * sin_sigma
                * (cos_2sigma_m
                    + cap_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - cap_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

            let result = InverseResult {
                distance: b * cap_a * (sigma - delta_sigma),
                initial_bearing: normalize_bearing(
                    (cos_u2 * sin_lambda)
                        .atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda)
                        .to_degrees(),
                ),
                final_bearing: normalize_bearing(
                    (cos_u1 * sin_lambda)
                        .atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda)
                        .to_degrees(),
                ),
            };

            return if converged {
                Ok(result)
            } else {
                Err(NonConvergence {
                    best: result,
                    iterations,
                })
            };
        }
    }
}

/// Computes the destination of travelling `distance` meters from `origin`
/// along the geodesic with the given initial bearing (degrees clockwise from
/// north).
///
/// The σ iteration of the direct formula converges quadratically, so the
/// iteration cap is a formality; reaching it just means the last value is
/// used.
pub fn direct(
    ellipsoid: &Ellipsoid,
    origin: &GeoPoint,
    bearing: f64,
    distance: f64,
) -> DirectResult {
    let a = ellipsoid.semimajor();
    let b = ellipsoid.semiminor();
    let f = ellipsoid.flattening();

    let alpha1 = bearing.to_radians();
    let (sin_alpha1, cos_alpha1) = alpha1.sin_cos();

    let tan_u1 = (1.0 - f) * clamp_latitude(origin.lat()).to_radians().tan();
    let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
    let sin_u1 = tan_u1 * cos_u1;

    let sigma1 = tan_u1.atan2(cos_alpha1);
    let sin_alpha = cos_u1 * sin_alpha1;
    let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let cap_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let cap_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let base_sigma = distance / (b * cap_a);
    let mut sigma = base_sigma;
    for _ in 0..MAX_ITERATIONS {
        let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
        let (sin_sigma, cos_sigma) = sigma.sin_cos();
        let delta_sigma = cap_b
            * sin_sigma
            * (cos_2sigma_m
                + cap_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                        - cap_b / 6.0
                            * cos_2sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

        let next_sigma = base_sigma + delta_sigma;
        let converged = (next_sigma - sigma).abs() < CONVERGENCE_TOLERANCE;
        sigma = next_sigma;
        if converged {
            break;
        }
    }

    let (sin_sigma, cos_sigma) = sigma.sin_cos();
    let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();

    let tmp = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
    let lat2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
        .atan2((1.0 - f) * (sin_alpha * sin_alpha + tmp * tmp).sqrt());
    let lambda =
        (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
    let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
    let l = lambda
        - (1.0 - c)
            * f
            * sin_alpha
            * (sigma
                + c * sin_sigma
                    * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

    DirectResult {
        destination: GeoPoint::latlon(
            lat2.to_degrees(),
            wrap_longitude(origin.lng() + l.to_degrees()),
        ),
        final_bearing: normalize_bearing(sin_alpha.atan2(-tmp).to_degrees()),
    }
}

/// Reduces a bearing in degrees into `[0, 360)`.
pub fn normalize_bearing(bearing: f64) -> f64 {
    bearing.rem_euclid(360.0)
}

fn clamp_latitude(lat: f64) -> f64 {
    lat.clamp(-90.0, 90.0)
}
