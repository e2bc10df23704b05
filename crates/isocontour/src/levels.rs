//! Iso-value list generation.

/// Largest list [`iso_levels`] will generate.
pub const MAX_ISO_LEVELS: usize = 1 << 16;

/// Multiples of `interval` within `[min, max]`, ascending.
///
/// Returns an empty list for a non-positive interval, an empty range, or when
/// more than [`MAX_ISO_LEVELS`] values would be produced. Levels that round to
/// the same `f32` appear once.
pub fn iso_levels(min: f32, max: f32, interval: f32) -> Vec<f32> {
    if !min.is_finite() || !max.is_finite() || interval.is_nan() || interval <= 0.0 || max < min
    {
        return Vec::new();
    }

    let interval = f64::from(interval);
    let first = (f64::from(min) / interval).ceil();
    let last = (f64::from(max) / interval).floor();
    if !first.is_finite() || !last.is_finite() || last < first {
        return Vec::new();
    }

    let span = last - first;
    if span >= MAX_ISO_LEVELS as f64 {
        log::warn!(
            "interval {interval} over [{min}, {max}] exceeds {MAX_ISO_LEVELS} levels, none generated"
        );
        return Vec::new();
    }

    let mut levels: Vec<f32> = (0..=span as usize)
        .map(|k| ((first + k as f64) * interval) as f32)
        .filter(|v| *v >= min && *v <= max)
        .collect();
    levels.dedup();
    levels
}

/// `count` values evenly spaced strictly inside `(min, max)`.
///
/// The values split the range into `count + 1` bands of equal width.
pub fn iso_levels_count(min: f32, max: f32, count: usize) -> Vec<f32> {
    if min.is_nan() || max.is_nan() || max <= min {
        return Vec::new();
    }

    let step = (max - min) / (count + 1) as f32;
    (1..=count).map(|i| min + step * i as f32).collect()
}
