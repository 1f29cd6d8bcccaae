use serde::{Deserialize, Serialize};

use crate::point::GeoPoint;

/// Axis-aligned bounding box in geographic coordinates.
///
/// The box is computed with plain min/max over latitude and longitude values
/// as they are stored, so longitudes shifted past the antimeridian for
/// display purposes extend the box past ±180°.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GeoBounds {
    lat_min: f64,
    lng_min: f64,
    lat_max: f64,
    lng_max: f64,
}

impl GeoBounds {
    /// Creates a degenerate box covering a single point.
    pub fn from_point(point: &GeoPoint) -> Self {
        Self {
            lat_min: point.lat(),
            lng_min: point.lng(),
            lat_max: point.lat(),
            lng_max: point.lng(),
        }
    }

    /// Creates the smallest box covering all the given points, or `None` if
    /// the iterator is empty.
    pub fn from_points<'a>(points: impl Iterator<Item = &'a GeoPoint>) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for point in points {
            match &mut bounds {
                Some(bounds) => bounds.extend(point),
                None => bounds = Some(Self::from_point(point)),
            }
        }

        bounds
    }

    /// Grows the box to cover the given point.
    pub fn extend(&mut self, point: &GeoPoint) {
        if point.lat() < self.lat_min {
            self.lat_min = point.lat();
        }
        if point.lat() > self.lat_max {
            self.lat_max = point.lat();
        }
        if point.lng() < self.lng_min {
            self.lng_min = point.lng();
        }
        if point.lng() > self.lng_max {
            self.lng_max = point.lng();
        }
    }

    /// Smallest latitude of the box.
    pub fn lat_min(&self) -> f64 {
        self.lat_min
    }

    /// Largest latitude of the box.
    pub fn lat_max(&self) -> f64 {
        self.lat_max
    }

    /// Smallest longitude of the box.
    pub fn lng_min(&self) -> f64 {
        self.lng_min
    }

    /// Largest longitude of the box.
    pub fn lng_max(&self) -> f64 {
        self.lng_max
    }

    /// Center of the box in coordinate space.
    ///
    /// This is the midpoint of the min/max values, not the geodesic centroid
    /// of the covered area.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::latlon(
            (self.lat_min + self.lat_max) / 2.0,
            (self.lng_min + self.lng_max) / 2.0,
        )
    }

    /// Whether the given point lies inside the box (borders included).
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.lat_min <= point.lat()
            && self.lat_max >= point.lat()
            && self.lng_min <= point.lng()
            && self.lng_max >= point.lng()
    }
}
