/// Reference ellipsoid the geodesic calculations are performed on.
///
/// Stored as the semi-major axis (in meters) and the inverse flattening, the
/// form the defining parameters are usually published in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    semimajor: f64,
    inv_flattening: f64,
}

impl Ellipsoid {
    /// The WGS84 reference ellipsoid.
    pub const WGS84: Self = Ellipsoid {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Creates an ellipsoid from its semi-major axis (meters) and inverse
    /// flattening.
    pub fn new(semimajor: f64, inv_flattening: f64) -> Self {
        Self {
            semimajor,
            inv_flattening,
        }
    }

    /// Semi-major (equatorial) axis in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening `1/f`.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Flattening `f`.
    pub fn flattening(&self) -> f64 {
        1.0 / self.inv_flattening
    }

    /// Semi-minor (polar) axis in meters.
    pub fn semiminor(&self) -> f64 {
        self.semimajor * (1.0 - self.flattening())
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn wgs84_derived_values() {
        let ellipsoid = Ellipsoid::default();
        assert_eq!(ellipsoid.semimajor(), 6_378_137.0);
        assert_relative_eq!(ellipsoid.semiminor(), 6_356_752.314245, epsilon = 1e-6);
        assert_relative_eq!(ellipsoid.flattening(), 0.0033528106647474805);
    }
}
