//! Geographic value types for geodesic path computation.
//!
//! This crate holds the data model shared by the `geodesic` engine and its
//! consumers:
//!
//! * [`GeoPoint`] - a latitude/longitude pair in degrees (see also the
//!   [`latlon!`] macro),
//! * [`Path`] and [`MultiPath`] - ordered point sequences and ordered
//!   collections of them,
//! * [`GeoBounds`] - a min/max bounding box over geographic coordinates,
//! * [`Ellipsoid`] - reference ellipsoid parameters with a WGS84 constant,
//! * [`flatten`](crate::geojson::flatten) - conversion of GeoJSON documents into
//!   [`MultiPath`] form, reporting skipped nodes through a
//!   [`DiagnosticSink`].
//!
//! All types are plain values without any back-references to rendering or
//! engine objects.

pub mod diagnostics;
pub mod error;
pub mod geojson;

mod bounds;
mod ellipsoid;
mod path;
mod point;

pub use bounds::GeoBounds;
pub use diagnostics::{DiagnosticSink, LogSink};
pub use ellipsoid::Ellipsoid;
pub use error::GeodesicTypesError;
pub use path::{MultiPath, Path};
pub use point::{wrap_longitude, GeoPoint};
