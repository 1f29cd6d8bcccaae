//! Ellipsoidal geodesic paths between geographic coordinates.
//!
//! This crate computes geometrically correct paths on the WGS84 ellipsoid
//! (or any other reference ellipsoid) instead of naively interpolating in
//! latitude/longitude space. It solves the classic geodesic problems with
//! Vincenty's formulae, decomposes polylines into densely sampled vertex
//! sequences that renderers can draw directly, handles paths crossing the
//! antimeridian, ingests GeoJSON documents and aggregates distance
//! statistics.
//!
//! # Quick start
//!
//! ```
//! use geodesic::types::latlon;
//! use geodesic::{GeodesicOptions, GeodesicPaths};
//!
//! let mut engine = GeodesicPaths::new(GeodesicOptions::default());
//! engine.set_paths(vec![latlon!(52.5, 13.35), latlon!(-33.94, 18.39)]);
//!
//! // Berlin to Capetown is roughly 9 344 km
//! let statistics = engine.statistics();
//! assert!(statistics.total_distance > 9_000_000.0);
//! assert!(statistics.points <= statistics.vertices);
//! ```
//!
//! The [`GeodesicPaths`] facade owns the current paths and keeps their
//! decomposition and statistics in sync. Callers that only need the raw
//! math can use the [`vincenty`] solvers directly; callers that need the
//! decomposition without the facade can use [`decompose`].
//!
//! Rendering is out of scope: the engine hands out read-only [`MultiPath`]
//! snapshots and bounding boxes, and whatever draws them owns all
//! presentation concerns.
//!
//! [`MultiPath`]: geodesic_types::MultiPath

pub mod decompose;
pub mod engine;
pub mod options;
pub mod statistics;
pub mod vincenty;

pub use engine::GeodesicPaths;
/// Re-export of the value types crate.
pub use geodesic_types as types;
pub use options::GeodesicOptions;
pub use statistics::Statistics;
