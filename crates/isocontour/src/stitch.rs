//! Polygon stitching: splits a classified triangle into colored bands.
//!
//! Bands are built in the sorted corner order. When sorting flipped the
//! triangle's winding, every polygon is mirrored before it is emitted so the
//! output faces the same way as the input triangle.

use isocontour_core::ScalarRange;

use crate::classify::{Corner, TriInfo};
use crate::segments::IsoSegment;

/// Maximum number of corners of a band polygon.
pub const MAX_POLYGON_CORNERS: usize = 5;

/// Orientation of the sorted corners relative to the input triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Sorted order has the input winding.
    Preserved,
    /// Sorted order is mirrored relative to the input.
    Flipped,
}

impl Winding {
    /// Winding implied by a classified triangle's `reversed` flag.
    pub fn from_reversed(reversed: bool) -> Self {
        if reversed {
            Self::Flipped
        } else {
            Self::Preserved
        }
    }
}

/// One band of a triangle: a triangle, quad or pentagon with its
/// representative iso-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon {
    corners: [Corner; MAX_POLYGON_CORNERS],
    len: usize,
    /// The band's lower boundary value, used for coloring.
    pub iso: f32,
}

impl Polygon {
    fn new(corners: &[Corner], iso: f32) -> Self {
        debug_assert!((3..=MAX_POLYGON_CORNERS).contains(&corners.len()));
        let mut storage = [corners[0]; MAX_POLYGON_CORNERS];
        storage[..corners.len()].copy_from_slice(corners);
        Self {
            corners: storage,
            len: corners.len(),
            iso,
        }
    }

    /// Reverses the corner cycle, keeping the first corner in place.
    #[must_use]
    fn oriented(mut self, winding: Winding) -> Self {
        if winding == Winding::Flipped {
            self.corners[1..self.len].reverse();
        }
        self
    }

    /// The polygon's corners in emission order.
    pub fn corners(&self) -> &[Corner] {
        &self.corners[..self.len]
    }

    /// Number of triangles produced by fan triangulation.
    pub fn num_triangles(&self) -> usize {
        self.len - 2
    }
}

/// Splits `tri` along `segments` and emits every band inside `range`.
///
/// `segments` must come from [`crate::segments::build_segments`] for the same
/// triangle. Bands are emitted in ascending iso order and together cover the
/// triangle exactly; the middle corner appears in exactly one band. A band
/// whose iso-value lies outside `range` is dropped entirely.
pub fn stitch<F>(tri: &TriInfo, segments: &[IsoSegment], range: &ScalarRange, mut emit: F)
where
    F: FnMut(&Polygon),
{
    let [v1, v2, v3] = tri.values;

    // Corners are sorted, so these cover "all corners on the same side"
    if v3 < range.min() || v1 > range.max() {
        return;
    }

    let winding = Winding::from_reversed(tri.reversed);
    let mut push = |corners: &[Corner], iso: f32| {
        if range.contains(iso) {
            emit(&Polygon::new(corners, iso).oriented(winding));
        }
    };

    let [c1, c2, c3] = tri.corners;
    let lowest = tri.not_intersected_value;

    let Some(first) = segments.first() else {
        push(&[c1, c2, c3], lowest);
        return;
    };

    // Set once the middle corner has been emitted
    let mut bypass = false;

    if first.iso < v2 {
        push(&[c1, first.p1, first.p2], lowest);
    } else {
        bypass = true;
        push(&[c1, c2, first.p1, first.p2], lowest);
    }

    for pair in segments.windows(2) {
        let (seg, next) = (pair[0], pair[1]);
        if next.iso < v2 || bypass {
            push(&[seg.p1, next.p1, next.p2, seg.p2], seg.iso);
        } else {
            bypass = true;
            push(&[c2, next.p1, next.p2, seg.p2, seg.p1], seg.iso);
        }
    }

    let last = segments[segments.len() - 1];
    if bypass {
        push(&[last.p1, c3, last.p2], last.iso);
    } else {
        push(&[c2, c3, last.p2, last.p1], last.iso);
    }
}
