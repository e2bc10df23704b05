//! Marching triangles: isoline extraction on an indexed triangle mesh.
//!
//! For one iso-value, every triangle whose corners straddle the value
//! contributes a segment joining two crossed edges. Segments sharing an edge
//! are chained into polylines.

use std::collections::HashMap;

use isocontour_core::{triangles, ContourError, Result};

/// A mesh edge as an ordered vertex pair `(low index, high index)`.
type Edge = (u32, u32);

#[inline]
fn edge(a: u32, b: u32) -> Edge {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Polylines for one iso-value.
///
/// The first vector holds, per polyline, the flat endpoint indices of each
/// crossed edge (`[a0, b0, a1, b1, ...]`). The second holds, per polyline, the
/// parallel fractions: crossing `k` lies at `p[a_k] + t_k * (p[b_k] - p[a_k])`.
pub type Isolines = (Vec<Vec<u32>>, Vec<Vec<f32>>);

/// Isoline extractor bound to one mesh connectivity.
#[derive(Debug, Clone, Default)]
pub struct MarchingTriangles {
    triangles: Vec<[u32; 3]>,
    range: [f32; 2],
    // One past the highest referenced vertex index
    vertex_count: usize,
}

impl MarchingTriangles {
    /// Creates an extractor with no triangles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the triangle connectivity and the attribute range.
    ///
    /// Iso-values outside `range` produce no polylines.
    pub fn setup(&mut self, indices: &[u32], range: [f32; 2]) {
        self.triangles = triangles(indices).collect();
        self.range = range;
        self.vertex_count = indices.iter().max().map_or(0, |&i| i as usize + 1);
    }

    /// Number of triangles registered by [`setup`](Self::setup).
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Extracts the polylines where `attribute` crosses `iso`.
    ///
    /// A vertex is above the line when its value is strictly greater than
    /// `iso`, so crossed edges always join distinct values and every fraction
    /// is finite and within `[0, 1]`. Triangles with a NaN corner are
    /// skipped. Closed loops repeat their first crossing at the end.
    ///
    /// Fails with [`ContourError::SizeMismatch`] when `attribute` does not
    /// cover every vertex referenced by the triangles.
    pub fn isolines(&self, attribute: &[f32], iso: f32) -> Result<Isolines> {
        if attribute.len() < self.vertex_count {
            return Err(ContourError::SizeMismatch {
                expected: self.vertex_count,
                actual: attribute.len(),
            });
        }
        if iso.is_nan() || iso < self.range[0] || iso > self.range[1] {
            return Ok((Vec::new(), Vec::new()));
        }

        let segments = self.segments(attribute, iso);
        let polylines = chain(&segments);

        let mut edge_lines = Vec::with_capacity(polylines.len());
        let mut fraction_lines = Vec::with_capacity(polylines.len());
        for polyline in polylines {
            let mut edges = Vec::with_capacity(polyline.len() * 2);
            let mut fractions = Vec::with_capacity(polyline.len());
            for (a, b) in polyline {
                let va = attribute[a as usize];
                let vb = attribute[b as usize];
                edges.push(a);
                edges.push(b);
                fractions.push((iso - va) / (vb - va));
            }
            edge_lines.push(edges);
            fraction_lines.push(fractions);
        }

        Ok((edge_lines, fraction_lines))
    }

    /// One segment (pair of crossed edges) per straddling triangle, in
    /// triangle order.
    fn segments(&self, attribute: &[f32], iso: f32) -> Vec<[Edge; 2]> {
        let mut segments = Vec::new();

        for &[a, b, c] in &self.triangles {
            let values = [a, b, c].map(|i| attribute[i as usize]);
            if values.iter().any(|v| v.is_nan()) {
                continue;
            }

            let above = values.map(|v| v > iso);
            let mut crossed = [(0, 0); 2];
            let mut count = 0;
            for (u, v, i, j) in [(a, b, 0, 1), (b, c, 1, 2), (c, a, 2, 0)] {
                if above[i] != above[j] {
                    crossed[count] = edge(u, v);
                    count += 1;
                }
            }

            // Zero or two edges change side in a triangle
            if count == 2 {
                segments.push(crossed);
            }
        }

        segments
    }
}

/// Chains segments that share an edge into polylines of edges.
///
/// Open polylines are walked from a boundary edge first so they come out
/// whole; the remaining segments form closed loops.
fn chain(segments: &[[Edge; 2]]) -> Vec<Vec<Edge>> {
    let mut incident: HashMap<Edge, Vec<usize>> = HashMap::new();
    for (i, seg) in segments.iter().enumerate() {
        for e in seg {
            incident.entry(*e).or_default().push(i);
        }
    }

    let mut visited = vec![false; segments.len()];
    let mut polylines = Vec::new();

    let is_boundary = |e: &Edge| incident.get(e).map_or(0, Vec::len) == 1;

    // Open polylines first, starting from an end
    for (i, seg) in segments.iter().enumerate() {
        if visited[i] {
            continue;
        }
        if let Some(start) = seg.iter().find(|e| is_boundary(e)) {
            polylines.push(walk(segments, &incident, &mut visited, i, *start));
        }
    }

    // Whatever is left is part of a closed loop
    for (i, seg) in segments.iter().enumerate() {
        if !visited[i] {
            polylines.push(walk(segments, &incident, &mut visited, i, seg[0]));
        }
    }

    polylines
}

fn walk(
    segments: &[[Edge; 2]],
    incident: &HashMap<Edge, Vec<usize>>,
    visited: &mut [bool],
    start: usize,
    start_edge: Edge,
) -> Vec<Edge> {
    let mut line = vec![start_edge];
    let mut current = start;
    let mut entry = start_edge;

    loop {
        visited[current] = true;
        let [e0, e1] = segments[current];
        let exit = if e0 == entry { e1 } else { e0 };
        line.push(exit);

        let next = incident
            .get(&exit)
            .and_then(|list| list.iter().copied().find(|&s| !visited[s]));
        match next {
            Some(s) => {
                current = s;
                entry = exit;
            }
            None => break,
        }
    }

    line
}
