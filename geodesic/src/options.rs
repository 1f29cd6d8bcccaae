use serde::{Deserialize, Serialize};

/// Options controlling how paths are decomposed into renderable vertex
/// sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeodesicOptions {
    /// Whether segments crossing the antimeridian are wrapped.
    ///
    /// When enabled (the default), output longitudes are shifted by full
    /// turns so that no two consecutive vertices are more than 180° of
    /// longitude apart, which lets a renderer draw the short way around.
    /// When disabled, longitudes are passed through untouched; this is an
    /// opt-out for callers that handle display wrapping themselves.
    pub wrap: bool,
    /// Subdivision depth per input segment.
    ///
    /// `0` disables interpolation and emits segment endpoints only. A value
    /// `n >= 1` splits every segment into `2^(n + 1)` equal-length parts,
    /// i.e. each increment of `steps` doubles the vertex resolution. Values
    /// above [`GeodesicOptions::MAX_STEPS`] are treated as `MAX_STEPS`.
    pub steps: u32,
}

impl Default for GeodesicOptions {
    fn default() -> Self {
        Self {
            wrap: true,
            steps: 3,
        }
    }
}

impl GeodesicOptions {
    /// Largest effective subdivision depth.
    ///
    /// 512 parts per segment is already far denser than any renderer
    /// needs, and an uncapped depth would turn a configuration value into
    /// an allocation of gigabytes.
    pub const MAX_STEPS: u32 = 8;

    /// Creates options with the given wrapping policy and subdivision depth.
    pub fn new(wrap: bool, steps: u32) -> Self {
        Self { wrap, steps }
    }

    /// Number of equal-length parts each segment is divided into.
    pub fn segment_parts(&self) -> u32 {
        if self.steps == 0 {
            1
        } else {
            1 << (self.steps.min(Self::MAX_STEPS) + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = GeodesicOptions::default();
        assert!(options.wrap);
        assert_eq!(options.steps, 3);
    }

    #[test]
    fn segment_parts_per_depth() {
        assert_eq!(GeodesicOptions::new(true, 0).segment_parts(), 1);
        assert_eq!(GeodesicOptions::new(true, 1).segment_parts(), 4);
        assert_eq!(GeodesicOptions::new(true, 3).segment_parts(), 16);
    }

    #[test]
    fn depth_is_capped() {
        let capped = GeodesicOptions::new(true, GeodesicOptions::MAX_STEPS).segment_parts();
        assert_eq!(capped, 512);
        assert_eq!(GeodesicOptions::new(true, 9).segment_parts(), capped);
        assert_eq!(GeodesicOptions::new(true, 31).segment_parts(), capped);
        assert_eq!(GeodesicOptions::new(true, u32::MAX).segment_parts(), capped);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let options: GeodesicOptions =
            serde_json::from_value(serde_json::json!({ "steps": 0 })).expect("valid options");
        assert!(options.wrap);
        assert_eq!(options.steps, 0);
    }
}
