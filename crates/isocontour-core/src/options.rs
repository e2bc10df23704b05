//! Configuration options for filled contour extraction.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options for filled iso-contour extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilledContourOptions {
    /// Lower bound of the color domain; computed from the attribute when unset.
    pub min: Option<f32>,

    /// Upper bound of the color domain; computed from the attribute when unset.
    pub max: Option<f32>,

    /// Name of the color map used to build the lookup table.
    pub lut: String,

    /// Number of buckets in the lookup table.
    pub nb_colors: usize,

    /// Color used when the lookup table yields none.
    pub default_color: Vec3,
}

impl Default for FilledContourOptions {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            lut: "rainbow".to_string(),
            nb_colors: 128,
            default_color: Vec3::ZERO,
        }
    }
}

impl FilledContourOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the options to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the lower bound.
    pub fn with_min(mut self, min: f32) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the upper bound.
    pub fn with_max(mut self, max: f32) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets both bounds.
    pub fn with_range(self, min: f32, max: f32) -> Self {
        self.with_min(min).with_max(max)
    }

    /// Sets the color map name.
    pub fn with_lut(mut self, lut: impl Into<String>) -> Self {
        self.lut = lut.into();
        self
    }

    /// Sets the lookup table size.
    pub fn with_nb_colors(mut self, nb_colors: usize) -> Self {
        self.nb_colors = nb_colors;
        self
    }

    /// Sets the fallback color.
    pub fn with_default_color(mut self, color: Vec3) -> Self {
        self.default_color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = FilledContourOptions::default();
        assert_eq!(options.min, None);
        assert_eq!(options.max, None);
        assert_eq!(options.lut, "rainbow");
        assert_eq!(options.nb_colors, 128);
    }

    #[test]
    fn test_options_builder() {
        let options = FilledContourOptions::new()
            .with_range(-1.0, 1.0)
            .with_lut("viridis")
            .with_nb_colors(16);
        assert_eq!(options.min, Some(-1.0));
        assert_eq!(options.max, Some(1.0));
        assert_eq!(options.lut, "viridis");
        assert_eq!(options.nb_colors, 16);
    }

    #[test]
    fn test_options_partial_json() {
        let options = FilledContourOptions::from_json(r#"{ "max": 4.0, "lut": "coolwarm" }"#).unwrap();
        assert_eq!(options.min, None);
        assert_eq!(options.max, Some(4.0));
        assert_eq!(options.lut, "coolwarm");
        assert_eq!(options.nb_colors, 128);
    }

    #[test]
    fn test_options_json_roundtrip() {
        let options = FilledContourOptions::new().with_min(0.5);
        let json = options.to_json().unwrap();
        assert_eq!(FilledContourOptions::from_json(&json).unwrap(), options);
    }

    #[test]
    fn test_options_bad_json() {
        assert!(FilledContourOptions::from_json("{ not json").is_err());
    }
}
