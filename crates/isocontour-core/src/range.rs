//! Scalar range resolution.

use crate::error::{ContourError, Result};

/// Returns the minimum and maximum of `values`, ignoring NaN.
///
/// Returns `None` when the slice is empty or holds only NaN.
pub fn min_max(values: &[f32]) -> Option<(f32, f32)> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// The `[min, max]` domain used to normalize an attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarRange {
    min: f32,
    max: f32,
}

impl ScalarRange {
    /// Creates a range, rejecting empty or inverted bounds.
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if min.is_nan() || max.is_nan() || max <= min {
            return Err(ContourError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Resolves the effective range for `values`.
    ///
    /// Omitted bounds are taken from the data. Fails with
    /// [`ContourError::InvalidRange`] for a flat field or an empty attribute.
    pub fn resolve(values: &[f32], min: Option<f32>, max: Option<f32>) -> Result<Self> {
        let data = min_max(values);
        let lo = min.or(data.map(|(lo, _)| lo));
        let hi = max.or(data.map(|(_, hi)| hi));

        match (lo, hi) {
            (Some(lo), Some(hi)) => Self::new(lo, hi),
            _ => Err(ContourError::InvalidRange {
                min: lo.unwrap_or(f32::NAN),
                max: hi.unwrap_or(f32::NAN),
            }),
        }
    }

    /// Lower bound.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Maps `v` to `[0, 1]` across the range (unclamped).
    pub fn normalize(&self, v: f32) -> f32 {
        (v - self.min) / (self.max - self.min)
    }

    /// Whether `v` lies within the closed range.
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}
