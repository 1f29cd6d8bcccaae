//! The path engine facade.

use geodesic_types::geojson::flatten;
use geodesic_types::{DiagnosticSink, Ellipsoid, GeoBounds, GeoPoint, LogSink, MultiPath};
use geojson::GeoJson;

use crate::decompose::decompose;
use crate::options::GeodesicOptions;
use crate::statistics::Statistics;
use crate::vincenty;

/// Owner of the current path state and the single entry point for
/// consumers.
///
/// The engine holds the raw input paths, their decomposition under the
/// current [`GeodesicOptions`] and the derived [`Statistics`]. Every setter
/// re-decomposes and recomputes the statistics, so the exposed snapshots are
/// always consistent with each other.
///
/// The engine is a plain value without interior mutability; sharing one
/// instance between threads requires external synchronization like any other
/// `&mut` access.
#[derive(Debug, Clone, Default)]
pub struct GeodesicPaths {
    ellipsoid: Ellipsoid,
    options: GeodesicOptions,
    raw: MultiPath,
    decomposed: MultiPath,
    statistics: Statistics,
}

impl GeodesicPaths {
    /// Creates an empty engine on the WGS84 ellipsoid.
    pub fn new(options: GeodesicOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Creates an empty engine on a custom ellipsoid.
    pub fn with_ellipsoid(ellipsoid: Ellipsoid, options: GeodesicOptions) -> Self {
        Self {
            ellipsoid,
            options,
            ..Default::default()
        }
    }

    /// Current options.
    pub fn options(&self) -> GeodesicOptions {
        self.options
    }

    /// Replaces the options and re-decomposes the current paths.
    pub fn set_options(&mut self, options: GeodesicOptions) {
        if self.options != options {
            self.options = options;
            self.recompute();
        }
    }

    /// Replaces the raw paths and recomputes decomposition and statistics.
    ///
    /// Accepts anything convertible into a [`MultiPath`]: a flat vertex
    /// list (treated as a single path), a list of vertex lists, or a ready
    /// `MultiPath`. Given the same input and options the result is the same;
    /// setting identical input twice is a no-op in effect.
    pub fn set_paths(&mut self, paths: impl Into<MultiPath>) {
        self.raw = paths.into();
        self.recompute();
    }

    /// Flattens a GeoJSON document and loads the resulting paths.
    ///
    /// Notices about skipped nodes (unsupported geometry types, malformed
    /// coordinates) are reported through the `log` crate at `warn` level.
    /// Use [`GeodesicPaths::set_paths_from_geojson_with`] to capture them
    /// instead.
    pub fn set_paths_from_geojson(&mut self, document: &GeoJson) {
        self.set_paths_from_geojson_with(document, &mut LogSink);
    }

    /// Same as [`GeodesicPaths::set_paths_from_geojson`], but reports
    /// notices through the given sink.
    pub fn set_paths_from_geojson_with(
        &mut self,
        document: &GeoJson,
        sink: &mut dyn DiagnosticSink,
    ) {
        self.set_paths(flatten(document, sink));
    }

    /// Geodesic distance between two points in meters.
    ///
    /// This is a stateless query; it does not depend on the loaded paths.
    pub fn distance(&self, p1: &GeoPoint, p2: &GeoPoint) -> f64 {
        vincenty::inverse(&self.ellipsoid, p1, p2).distance
    }

    /// The current decomposed paths.
    pub fn paths(&self) -> &MultiPath {
        &self.decomposed
    }

    /// The raw input paths as they were set.
    pub fn raw_paths(&self) -> &MultiPath {
        &self.raw
    }

    /// Statistics over the current paths.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Bounding box over all decomposed vertices, or `None` if no paths are
    /// loaded.
    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_points(self.decomposed.iter_points())
    }

    /// Center of the bounding box in coordinate space.
    pub fn center(&self) -> Option<GeoPoint> {
        self.bounds().map(|bounds| bounds.center())
    }

    fn recompute(&mut self) {
        self.decomposed = decompose(&self.ellipsoid, &self.raw, &self.options);
        self.statistics = Statistics::compute(&self.ellipsoid, &self.raw, &self.decomposed);
    }
}
