use serde::{Deserialize, Serialize};

use crate::error::GeodesicTypesError;

/// 2d point on the surface of the Earth, in degrees.
///
/// Latitude must be in `[-90, 90]`. Longitude is accepted in any range; use
/// [`GeoPoint::wrapped`] to reduce it into `(-180, 180]` when a canonical
/// value is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Creates a new point from latitude and longitude values (in degrees).
    pub fn latlon(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Same as [`GeoPoint::latlon`], but validates the input.
    ///
    /// Returns an error if either value is not finite or the latitude is
    /// outside of `[-90, 90]`.
    pub fn try_latlon(lat: f64, lng: f64) -> Result<Self, GeodesicTypesError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeodesicTypesError::Conversion(format!(
                "coordinate values must be finite, got ({lat}, {lng})"
            )));
        }

        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeodesicTypesError::Conversion(format!(
                "latitude must be in [-90, 90], got {lat}"
            )));
        }

        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Latitude in radians.
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians.
    pub fn lng_rad(&self) -> f64 {
        self.lng.to_radians()
    }

    /// Returns the point with the longitude reduced into `(-180, 180]`.
    pub fn wrapped(&self) -> Self {
        Self {
            lat: self.lat,
            lng: wrap_longitude(self.lng),
        }
    }

    /// Returns the point with the longitude replaced by the given value.
    ///
    /// The latitude is kept as is. This is used to shift display longitudes
    /// by full turns without touching the point's position on the ellipsoid.
    pub fn with_lng(&self, lng: f64) -> Self {
        Self { lat: self.lat, lng }
    }
}

/// Reduces a longitude value in degrees into `(-180, 180]`.
pub fn wrap_longitude(lng: f64) -> f64 {
    let reduced = lng.rem_euclid(360.0);
    if reduced > 180.0 {
        reduced - 360.0
    } else {
        reduced
    }
}

/// Creates a new [`GeoPoint`] from latitude and longitude values (in degrees).
///
/// ```
/// use geodesic_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lng:expr) => {
        $crate::GeoPoint::latlon($lat, $lng)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_range_is_validated() {
        assert!(GeoPoint::try_latlon(90.0, 0.0).is_ok());
        assert!(GeoPoint::try_latlon(-90.0, 720.0).is_ok());
        assert!(GeoPoint::try_latlon(90.1, 0.0).is_err());
        assert!(GeoPoint::try_latlon(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::try_latlon(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn longitude_wrapping() {
        assert_eq!(wrap_longitude(0.0), 0.0);
        assert_eq!(wrap_longitude(179.0), 179.0);
        assert_eq!(wrap_longitude(180.0), 180.0);
        assert_eq!(wrap_longitude(-180.0), 180.0);
        assert_eq!(wrap_longitude(181.0), -179.0);
        assert_eq!(wrap_longitude(360.0), 0.0);
        assert_eq!(wrap_longitude(540.0), 180.0);
        assert_eq!(wrap_longitude(-190.0), 170.0);
    }

    #[test]
    fn wrapped_keeps_latitude() {
        let point = latlon!(45.0, 190.0).wrapped();
        assert_eq!(point.lat(), 45.0);
        assert_eq!(point.lng(), -170.0);
    }
}
