//! Color map system.
//!
//! Provides continuous [`ColorMap`]s, a [`ColorMapRegistry`] of built-in maps,
//! and the quantized [`Lut`] used to color contour bands. All colors are
//! linear RGB floats in `[0, 1]`.

use std::collections::HashMap;

use glam::Vec3;

use crate::error::{ContourError, Result};

/// A piecewise-linear color ramp over `[0, 1]`.
#[derive(Debug, Clone)]
pub struct ColorMap {
    pub name: String,
    /// Stops spaced evenly from 0 to 1.
    pub colors: Vec<Vec3>,
}

impl ColorMap {
    pub fn new(name: impl Into<String>, colors: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Interpolates between the two stops around `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f32) -> Vec3 {
        match self.colors.as_slice() {
            [] => Vec3::ZERO,
            [only] => *only,
            stops => {
                let last = stops.len() - 1;
                let x = t.clamp(0.0, 1.0) * last as f32;
                let i = (x.floor() as usize).min(last - 1);
                stops[i].lerp(stops[i + 1], x - i as f32)
            }
        }
    }
}

/// Built-in palettes as `(name, evenly spaced RGB stops)`.
const PALETTES: &[(&str, &[[f32; 3]])] = &[
    (
        "viridis",
        &[
            [0.267, 0.004, 0.329],
            [0.282, 0.140, 0.457],
            [0.253, 0.265, 0.529],
            [0.206, 0.371, 0.553],
            [0.163, 0.471, 0.558],
            [0.127, 0.566, 0.550],
            [0.134, 0.658, 0.517],
            [0.266, 0.749, 0.440],
            [0.477, 0.821, 0.318],
            [0.741, 0.873, 0.150],
            [0.993, 0.906, 0.144],
        ],
    ),
    (
        "blues",
        &[
            [0.969, 0.984, 1.000],
            [0.871, 0.922, 0.969],
            [0.776, 0.859, 0.937],
            [0.620, 0.792, 0.882],
            [0.419, 0.682, 0.839],
            [0.259, 0.573, 0.776],
            [0.129, 0.443, 0.710],
            [0.031, 0.318, 0.612],
            [0.031, 0.188, 0.420],
        ],
    ),
    (
        "reds",
        &[
            [1.000, 0.961, 0.941],
            [0.996, 0.878, 0.824],
            [0.988, 0.733, 0.631],
            [0.988, 0.573, 0.447],
            [0.984, 0.416, 0.290],
            [0.937, 0.231, 0.173],
            [0.796, 0.094, 0.114],
            [0.647, 0.059, 0.082],
            [0.404, 0.000, 0.051],
        ],
    ),
    (
        "coolwarm",
        &[
            [0.230, 0.299, 0.754],
            [0.552, 0.690, 0.996],
            [0.866, 0.866, 0.866],
            [0.956, 0.604, 0.486],
            [0.706, 0.016, 0.150],
        ],
    ),
    (
        "rainbow",
        &[
            [0.5, 0.0, 1.0],
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
        ],
    ),
    ("grayscale", &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]),
];

/// Color maps looked up by case-insensitive name.
#[derive(Default)]
pub struct ColorMapRegistry {
    color_maps: HashMap<String, ColorMap>,
}

impl ColorMapRegistry {
    /// Creates a registry holding the built-in palettes.
    pub fn new() -> Self {
        let mut registry = Self::default();
        for (name, stops) in PALETTES {
            let colors = stops.iter().copied().map(Vec3::from_array).collect();
            registry.register(ColorMap::new(*name, colors));
        }
        registry
    }

    /// Registers a color map, replacing any map with the same name.
    pub fn register(&mut self, color_map: ColorMap) {
        self.color_maps.insert(color_map.name.to_lowercase(), color_map);
    }

    /// Gets a color map by name.
    pub fn get(&self, name: &str) -> Option<&ColorMap> {
        self.color_maps.get(&name.to_lowercase())
    }

    /// Number of registered maps.
    pub fn len(&self) -> usize {
        self.color_maps.len()
    }

    /// Returns true if no map is registered.
    pub fn is_empty(&self) -> bool {
        self.color_maps.is_empty()
    }
}

/// A quantized lookup table built from a named color map.
///
/// The table holds `nb_colors` evenly spaced samples of the map. Input values
/// are normalized through the `[min, max]` domain (default `[0, 1]`) and
/// snapped to the nearest bucket.
#[derive(Debug, Clone)]
pub struct Lut {
    name: String,
    table: Vec<Vec3>,
    min: f32,
    max: f32,
}

impl Lut {
    /// Builds a table from one of the built-in color maps.
    pub fn new(name: &str, nb_colors: usize) -> Result<Self> {
        let registry = ColorMapRegistry::new();
        let map = registry
            .get(name)
            .ok_or_else(|| ContourError::ColorMapNotFound(name.to_string()))?;
        log::debug!("building {nb_colors}-color lookup table from '{}'", map.name);
        Ok(Self::from_color_map(map, nb_colors))
    }

    /// Builds a table by sampling `map` at `nb_colors` evenly spaced points.
    pub fn from_color_map(map: &ColorMap, nb_colors: usize) -> Self {
        let n = nb_colors.max(1);
        let table = if n == 1 {
            vec![map.sample(0.0)]
        } else {
            (0..n)
                .map(|i| map.sample(i as f32 / (n - 1) as f32))
                .collect()
        };

        Self {
            name: map.name.clone(),
            table,
            min: 0.0,
            max: 1.0,
        }
    }

    /// Name of the source color map.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of buckets in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the table holds no colors.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Sets the value mapped to the first bucket.
    pub fn set_min(&mut self, min: f32) {
        self.min = min;
    }

    /// Sets the value mapped to the last bucket.
    pub fn set_max(&mut self, max: f32) {
        self.max = max;
    }

    /// Gets the domain minimum.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Gets the domain maximum.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Looks up the color for `value`, clamping to the domain.
    ///
    /// Returns `None` for NaN input.
    pub fn color(&self, value: f32) -> Option<Vec3> {
        if value.is_nan() || self.table.is_empty() {
            return None;
        }

        let span = self.max - self.min;
        let alpha = if span.abs() < f32::EPSILON {
            0.0
        } else {
            ((value - self.min) / span).clamp(0.0, 1.0)
        };

        let last = self.table.len() - 1;
        let idx = ((alpha * last as f32).round() as usize).min(last);
        Some(self.table[idx])
    }
}

/// Maps a value to a color through `lut`, falling back to `default_color`.
pub fn from_value_to_color(value: f32, lut: Option<&Lut>, default_color: Vec3) -> Vec3 {
    lut.and_then(|lut| lut.color(value)).unwrap_or(default_color)
}

/// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb` into a `[0, 1]` color.
pub fn parse_hex_color(text: &str) -> Result<Vec3> {
    let invalid = || ContourError::InvalidColor(text.to_string());
    let hex = text.trim().trim_start_matches('#');

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channels: [u8; 3] = match hex.len() {
        6 => {
            let mut out = [0_u8; 3];
            for (i, channel) in out.iter_mut().enumerate() {
                *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
            }
            out
        }
        3 => {
            let mut out = [0_u8; 3];
            for (i, channel) in out.iter_mut().enumerate() {
                let v = u8::from_str_radix(&hex[i..=i], 16).map_err(|_| invalid())?;
                *channel = v * 17;
            }
            out
        }
        _ => return Err(invalid()),
    };

    Ok(Vec3::new(
        f32::from(channels[0]) / 255.0,
        f32::from(channels[1]) / 255.0,
        f32::from(channels[2]) / 255.0,
    ))
}
