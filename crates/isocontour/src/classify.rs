//! Triangle classification.
//!
//! Reorders a triangle's corners by ascending scalar value and records whether
//! the reordering flipped the triangle's winding.

use glam::Vec3;

/// A triangle corner or an interpolated point on a triangle edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    pub position: Vec3,
    pub normal: Vec3,
}

impl Corner {
    /// Creates a corner from a position and a normal.
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }

    /// Blends position and normal: `w * self + (1 - w) * other`.
    #[must_use]
    pub fn blend(self, other: Self, w: f32) -> Self {
        Self {
            position: other.position.lerp(self.position, w),
            normal: other.normal.lerp(self.normal, w),
        }
    }
}

/// A triangle whose corners are sorted by ascending value.
#[derive(Debug, Clone, Copy)]
pub struct TriInfo {
    /// Corners ordered so `values[0] <= values[1] <= values[2]`.
    pub corners: [Corner; 3],
    /// Scalar value at each corner.
    pub values: [f32; 3],
    /// Set when the sorting permutation is odd.
    pub reversed: bool,
    /// Value that colors the band below the first crossing.
    ///
    /// Filled in by [`crate::segments::build_segments`].
    pub not_intersected_value: f32,
}

/// Sorts the corners of one triangle by value.
///
/// Ties keep their original order. Returns `None` for triangles that produce
/// no geometry: any NaN value, or all three values equal.
pub fn classify(corners: [Corner; 3], values: [f32; 3]) -> Option<TriInfo> {
    if values.iter().any(|v| v.is_nan()) {
        return None;
    }

    // Insertion sort on three elements; the swap count gives the parity
    let mut order = [0_usize, 1, 2];
    let mut swaps = 0;
    for i in 1..3 {
        let mut j = i;
        while j > 0 && values[order[j - 1]] > values[order[j]] {
            order.swap(j - 1, j);
            swaps += 1;
            j -= 1;
        }
    }

    let sorted = order.map(|i| values[i]);
    if sorted[0] == sorted[2] {
        return None;
    }

    Some(TriInfo {
        corners: order.map(|i| corners[i]),
        values: sorted,
        reversed: swaps % 2 == 1,
        not_intersected_value: sorted[0],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners() -> [Corner; 3] {
        [
            Corner::new(Vec3::new(0.0, 0.0, 0.0), Vec3::Z),
            Corner::new(Vec3::new(1.0, 0.0, 0.0), Vec3::Z),
            Corner::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Z),
        ]
    }

    fn positions(tri: &TriInfo) -> [Vec3; 3] {
        tri.corners.map(|c| c.position)
    }

    #[test]
    fn test_sorted_input_not_reversed() {
        let tri = classify(corners(), [0.0, 5.0, 10.0]).unwrap();
        assert_eq!(tri.values, [0.0, 5.0, 10.0]);
        assert!(!tri.reversed);
        assert_eq!(positions(&tri), corners().map(|c| c.position));
    }

    #[test]
    fn test_every_permutation_parity() {
        // (values, expected reversed)
        let cases = [
            ([1.0, 2.0, 3.0], false),
            ([1.0, 3.0, 2.0], true),
            ([2.0, 1.0, 3.0], true),
            ([3.0, 1.0, 2.0], false),
            ([2.0, 3.0, 1.0], false),
            ([3.0, 2.0, 1.0], true),
        ];
        for (values, reversed) in cases {
            let tri = classify(corners(), values).unwrap();
            assert_eq!(tri.values, [1.0, 2.0, 3.0], "values {values:?}");
            assert_eq!(tri.reversed, reversed, "values {values:?}");
        }
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let c = corners();
        let tri = classify(c, [2.0, 1.0, 2.0]).unwrap();
        assert_eq!(tri.values, [1.0, 2.0, 2.0]);
        assert_eq!(
            positions(&tri),
            [c[1].position, c[0].position, c[2].position]
        );
        assert!(tri.reversed);

        let tri = classify(c, [0.0, 0.0, 1.0]).unwrap();
        assert_eq!(positions(&tri), c.map(|c| c.position));
        assert!(!tri.reversed);
    }

    #[test]
    fn test_flat_and_nan_dropped() {
        assert!(classify(corners(), [4.0, 4.0, 4.0]).is_none());
        assert!(classify(corners(), [0.0, f32::NAN, 1.0]).is_none());
    }

    #[test]
    fn test_blend() {
        let a = Corner::new(Vec3::ZERO, Vec3::X);
        let b = Corner::new(Vec3::new(4.0, 0.0, 0.0), Vec3::Y);
        assert_eq!(a.blend(b, 1.0), a);
        assert_eq!(a.blend(b, 0.0), b);
        assert_eq!(a.blend(b, 0.75).position, Vec3::new(1.0, 0.0, 0.0));
    }
}
