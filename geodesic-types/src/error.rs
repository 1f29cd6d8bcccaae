//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum GeodesicTypesError {
    /// A coordinate or geometry could not be converted into the crate's
    /// value types.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}
