//! Segment building: where each iso-value crosses a classified triangle.

use crate::classify::{Corner, TriInfo};

/// The two points where one iso-value crosses a triangle.
///
/// `p2` always lies on the edge between the lowest and highest corner; `p1`
/// lies on the low-middle edge when `iso < values[1]` and on the
/// middle-high edge otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoSegment {
    pub p1: Corner,
    pub p2: Corner,
    pub iso: f32,
}

/// Weight of the first endpoint of an edge `(va, vb)` at the crossing `iso`.
#[inline]
fn iso_weight(va: f32, vb: f32, iso: f32) -> f32 {
    1.0 - (iso - va).abs() / (vb - va).abs()
}

/// Point on edge `a`-`b` where the field reaches `iso`.
#[inline]
fn crossing(a: Corner, va: f32, b: Corner, vb: f32, iso: f32) -> Corner {
    a.blend(b, iso_weight(va, vb, iso))
}

/// Fills `segments` with one segment per iso-value strictly inside the
/// triangle's value span, in ascending iso order.
///
/// `iso_values` must be sorted ascending; iteration stops at the first value
/// at or above the highest corner. Iso-values at or below the lowest corner
/// update `tri.not_intersected_value`, which starts at `vmin`.
pub fn build_segments(
    tri: &mut TriInfo,
    iso_values: &[f32],
    vmin: f32,
    segments: &mut Vec<IsoSegment>,
) {
    segments.clear();
    tri.not_intersected_value = vmin;

    let [c1, c2, c3] = tri.corners;
    let [v1, v2, v3] = tri.values;

    for &iso in iso_values {
        if iso >= v3 {
            break;
        }
        if iso > v1 {
            let (p1, p2) = if iso < v2 {
                (crossing(c1, v1, c2, v2, iso), crossing(c1, v1, c3, v3, iso))
            } else {
                (crossing(c2, v2, c3, v3, iso), crossing(c1, v1, c3, v3, iso))
            };
            segments.push(IsoSegment { p1, p2, iso });
        } else {
            tri.not_intersected_value = iso;
        }
    }
}
