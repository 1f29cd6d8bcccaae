use serde::{Deserialize, Serialize};

use crate::point::GeoPoint;

/// Ordered sequence of geographic points forming one polyline or polygon
/// ring.
///
/// The order of the points is the traversal order and defines the direction
/// of the path, and with it the sign of the bearings along it. A path may be
/// empty or contain a single point; such paths have no segments.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Path {
    points: Vec<GeoPoint>,
}

impl std::ops::Deref for Path {
    type Target = Vec<GeoPoint>;

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl std::ops::DerefMut for Path {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.points
    }
}

impl Path {
    /// Creates a new path from the given points.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Consumes the path and returns its points.
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    /// Iterates over consecutive point pairs of the path.
    ///
    /// A path with fewer than 2 points yields nothing. Unlike polygon rings
    /// in some models, the last point is never connected back to the first
    /// one implicitly; closed rings must repeat their first point.
    pub fn iter_segments(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl From<Vec<GeoPoint>> for Path {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }
}

impl FromIterator<GeoPoint> for Path {
    fn from_iter<T: IntoIterator<Item = GeoPoint>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Ordered collection of [`Path`]s.
///
/// This is the unit the path engine operates on. The order of the paths
/// mirrors the order of the input they were created from.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct MultiPath {
    paths: Vec<Path>,
}

impl std::ops::Deref for MultiPath {
    type Target = Vec<Path>;

    fn deref(&self) -> &Self::Target {
        &self.paths
    }
}

impl std::ops::DerefMut for MultiPath {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.paths
    }
}

impl MultiPath {
    /// Creates a new collection from the given paths.
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    /// Consumes the collection and returns its paths.
    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }

    /// Total number of points over all paths.
    pub fn total_points(&self) -> usize {
        self.paths.iter().map(|path| path.len()).sum()
    }

    /// Iterates over the points of all paths in order.
    pub fn iter_points(&self) -> impl Iterator<Item = &GeoPoint> {
        self.paths.iter().flat_map(|path| path.iter())
    }
}

impl From<Vec<Path>> for MultiPath {
    fn from(paths: Vec<Path>) -> Self {
        Self { paths }
    }
}

impl From<Path> for MultiPath {
    fn from(path: Path) -> Self {
        Self { paths: vec![path] }
    }
}

impl From<Vec<GeoPoint>> for MultiPath {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self {
            paths: vec![points.into()],
        }
    }
}

impl From<Vec<Vec<GeoPoint>>> for MultiPath {
    fn from(paths: Vec<Vec<GeoPoint>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl FromIterator<Path> for MultiPath {
    fn from_iter<T: IntoIterator<Item = Path>>(iter: T) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}
