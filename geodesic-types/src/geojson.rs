//! Flattening of GeoJSON (RFC 7946) documents into [`MultiPath`] form.
//!
//! Only geometries with line semantics contribute paths: `LineString`,
//! `MultiLineString`, `Polygon` and `MultiPolygon` (polygons contribute one
//! path per ring, exterior ring first). `Feature` and `FeatureCollection`
//! nodes are traversed recursively.
//!
//! Nodes that cannot be represented as paths never fail the document. A
//! `Point` or `GeometryCollection` contributes nothing and emits a notice
//! through the given [`DiagnosticSink`]; a `MultiPoint` is skipped silently.
//! Malformed coordinates (positions with fewer than 2 values, latitudes
//! outside `[-90, 90]`) drop the containing node the same way.

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, LineStringType, PolygonType, Value};

use crate::diagnostics::DiagnosticSink;
use crate::error::GeodesicTypesError;
use crate::path::{MultiPath, Path};
use crate::point::GeoPoint;

/// Flattens a GeoJSON document into an ordered list of paths.
///
/// Notices about skipped nodes are reported through `sink`; see the module
/// documentation for which nodes are skipped.
pub fn flatten(document: &GeoJson, sink: &mut dyn DiagnosticSink) -> MultiPath {
    match document {
        GeoJson::Geometry(geometry) => flatten_geometry(geometry, sink),
        GeoJson::Feature(feature) => flatten_feature(feature, sink),
        GeoJson::FeatureCollection(collection) => flatten_feature_collection(collection, sink),
    }
}

fn flatten_geometry(geometry: &Geometry, sink: &mut dyn DiagnosticSink) -> MultiPath {
    match &geometry.value {
        Value::LineString(line) => convert_line(line).into_iter().collect(),
        Value::MultiLineString(lines) => lines.iter().filter_map(convert_line).collect(),
        Value::Polygon(polygon) => convert_polygon(polygon),
        Value::MultiPolygon(polygons) => polygons
            .iter()
            .flat_map(|polygon| convert_polygon(polygon).into_paths())
            .collect(),
        // A single position is not a path; skipped silently to mirror the
        // treatment of points nested in supported geometries.
        Value::MultiPoint(_) => MultiPath::default(),
        Value::Point(_) => {
            sink.notice(r#"Type "Point" not supported"#);
            MultiPath::default()
        }
        Value::GeometryCollection(_) => {
            // Deliberate limitation: nested collections are not descended
            // into, even though their children may be flattenable.
            sink.notice(r#"Type "GeometryCollection" not supported"#);
            MultiPath::default()
        }
    }
}

fn flatten_feature(feature: &Feature, sink: &mut dyn DiagnosticSink) -> MultiPath {
    match &feature.geometry {
        Some(geometry) => flatten_geometry(geometry, sink),
        None => MultiPath::default(),
    }
}

fn flatten_feature_collection(
    collection: &FeatureCollection,
    sink: &mut dyn DiagnosticSink,
) -> MultiPath {
    let mut paths = Vec::new();
    for feature in &collection.features {
        paths.append(&mut flatten_feature(feature, sink).into_paths());
    }

    MultiPath::new(paths)
}

fn convert_line(line: &LineStringType) -> Option<Path> {
    if line.is_empty() {
        return None;
    }

    line.iter()
        .map(|position| convert_position(position).ok())
        .collect::<Option<Path>>()
}

fn convert_polygon(polygon: &PolygonType) -> MultiPath {
    // Exterior ring first, then holes in input order. Rings are used as-is,
    // including the closing point if the input repeats it.
    polygon.iter().filter_map(convert_line).collect()
}

fn convert_position(position: &[f64]) -> Result<GeoPoint, GeodesicTypesError> {
    // GeoJSON positions are [longitude, latitude, ...]; extra dimensions are
    // ignored.
    match position {
        [lng, lat, ..] => GeoPoint::try_latlon(*lat, *lng),
        _ => Err(GeodesicTypesError::Conversion(
            "position must contain at least 2 values".to_string(),
        )),
    }
}
