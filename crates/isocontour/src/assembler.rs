//! Flat output buffers for filled contours.

use glam::Vec3;

use crate::classify::Corner;

/// Triangle soup produced by filled contour extraction.
///
/// Positions, colors and normals are aligned one-to-one; every three indices
/// form a triangle. Vertices are never shared between bands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilledContours {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub colors: Vec<Vec3>,
    pub normals: Vec<Vec3>,
}

impl FilledContours {
    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if no geometry was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Positions as `[x0, y0, z0, x1, ...]`.
    #[must_use]
    pub fn flat_positions(&self) -> Vec<f32> {
        flatten(&self.positions)
    }

    /// Colors as `[r0, g0, b0, r1, ...]`.
    #[must_use]
    pub fn flat_colors(&self) -> Vec<f32> {
        flatten(&self.colors)
    }

    /// Normals as `[x0, y0, z0, x1, ...]`.
    #[must_use]
    pub fn flat_normals(&self) -> Vec<f32> {
        flatten(&self.normals)
    }
}

/// Flattens vectors into consecutive `f32` triples.
pub(crate) fn flatten(values: &[Vec3]) -> Vec<f32> {
    values.iter().flat_map(|v| v.to_array()).collect()
}

/// Accumulates band polygons into [`FilledContours`].
#[derive(Debug, Default)]
pub struct MeshAssembler {
    mesh: FilledContours,
}

impl MeshAssembler {
    /// Creates an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all buffers, keeping their allocations.
    pub fn reset(&mut self) {
        self.mesh.positions.clear();
        self.mesh.indices.clear();
        self.mesh.colors.clear();
        self.mesh.normals.clear();
    }

    /// Appends a convex polygon with a single color.
    ///
    /// The polygon is fan-triangulated around its first corner:
    /// `(0, 1, 2)`, `(0, 2, 3)`, `(0, 3, 4)`, ...
    pub fn add_polygon(&mut self, corners: &[Corner], color: Vec3) {
        if corners.len() < 3 {
            return;
        }

        let base = self.mesh.positions.len() as u32;
        for corner in corners {
            self.mesh.positions.push(corner.position);
            self.mesh.normals.push(corner.normal);
            self.mesh.colors.push(color);
        }

        for i in 1..(corners.len() as u32 - 1) {
            self.mesh
                .indices
                .extend_from_slice(&[base, base + i, base + i + 1]);
        }
    }

    /// The geometry accumulated so far.
    pub fn mesh(&self) -> &FilledContours {
        &self.mesh
    }

    /// Moves the accumulated geometry out, leaving the assembler empty.
    pub fn take(&mut self) -> FilledContours {
        std::mem::take(&mut self.mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners(n: usize) -> Vec<Corner> {
        (0..n)
            .map(|i| Corner::new(Vec3::new(i as f32, 0.0, 0.0), Vec3::Z))
            .collect()
    }

    #[test]
    fn test_fan_triangulation() {
        let mut assembler = MeshAssembler::new();
        assembler.add_polygon(&corners(3), Vec3::ONE);
        assembler.add_polygon(&corners(5), Vec3::ZERO);

        let mesh = assembler.mesh();
        assert_eq!(mesh.num_vertices(), 8);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5, 3, 5, 6, 3, 6, 7]);
        assert_eq!(mesh.colors.len(), 8);
        assert_eq!(mesh.normals.len(), 8);
        assert_eq!(mesh.colors[2], Vec3::ONE);
        assert_eq!(mesh.colors[3], Vec3::ZERO);
    }

    #[test]
    fn test_degenerate_polygon_ignored() {
        let mut assembler = MeshAssembler::new();
        assembler.add_polygon(&corners(2), Vec3::ONE);
        assert!(assembler.mesh().is_empty());
        assert_eq!(assembler.mesh().num_vertices(), 0);
    }

    #[test]
    fn test_reset_and_take() {
        let mut assembler = MeshAssembler::new();
        assembler.add_polygon(&corners(4), Vec3::ONE);
        let mesh = assembler.take();
        assert_eq!(mesh.num_triangles(), 2);
        assert!(assembler.mesh().is_empty());

        assembler.add_polygon(&corners(3), Vec3::ONE);
        assembler.reset();
        assert_eq!(assembler.mesh(), &FilledContours::default());
    }

    #[test]
    fn test_flat_views() {
        let mut assembler = MeshAssembler::new();
        assembler.add_polygon(&corners(3), Vec3::new(0.1, 0.2, 0.3));
        let mesh = assembler.take();
        assert_eq!(mesh.flat_positions(), vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0]);
        assert_eq!(&mesh.flat_colors()[..3], &[0.1, 0.2, 0.3]);
        assert_eq!(mesh.flat_normals().len(), 9);
    }
}
