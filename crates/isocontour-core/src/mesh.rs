//! Triangle mesh input for contour extraction.
//!
//! Contouring reads meshes through the [`MeshSource`] trait so callers can
//! hand over their own geometry containers. [`TriMesh`] is the owned
//! implementation used by tests and simple callers.

use std::collections::HashMap;

use glam::{UVec3, Vec3};

use crate::error::{ContourError, Result};

/// Read access to an indexed triangle mesh.
pub trait MeshSource {
    /// Vertex positions, if present.
    fn positions(&self) -> Option<&[Vec3]>;

    /// Flat triangle indices (three per triangle), if present.
    fn indices(&self) -> Option<&[u32]>;

    /// Per-vertex normals, if present.
    fn normals(&self) -> Option<&[Vec3]> {
        None
    }

    /// A named per-vertex scalar attribute, if present.
    fn attribute(&self, _name: &str) -> Option<&[f32]> {
        None
    }
}

/// An owned triangle mesh with optional normals and named vertex attributes.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    normals: Option<Vec<Vec3>>,
    attributes: HashMap<String, Vec<f32>>,
}

impl TriMesh {
    /// Creates a mesh from positions and flat triangle indices.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            indices,
            normals: None,
            attributes: HashMap::new(),
        }
    }

    /// Creates a mesh from positions and triangle faces.
    pub fn from_faces(positions: Vec<Vec3>, faces: &[UVec3]) -> Self {
        let indices = faces.iter().flat_map(|f| [f.x, f.y, f.z]).collect();
        Self::new(positions, indices)
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of complete triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Sets per-vertex normals.
    pub fn set_normals(&mut self, normals: Vec<Vec3>) -> Result<()> {
        if normals.len() != self.positions.len() {
            return Err(ContourError::SizeMismatch {
                expected: self.positions.len(),
                actual: normals.len(),
            });
        }
        self.normals = Some(normals);
        Ok(())
    }

    /// Builder-style variant of [`Self::set_normals`].
    pub fn with_normals(mut self, normals: Vec<Vec3>) -> Result<Self> {
        self.set_normals(normals)?;
        Ok(self)
    }

    /// Adds a named per-vertex scalar attribute.
    pub fn add_attribute(&mut self, name: impl Into<String>, values: Vec<f32>) -> Result<()> {
        if values.len() != self.positions.len() {
            return Err(ContourError::SizeMismatch {
                expected: self.positions.len(),
                actual: values.len(),
            });
        }
        self.attributes.insert(name.into(), values);
        Ok(())
    }

    /// Computes and stores vertex normals if none are present.
    pub fn compute_vertex_normals(&mut self) -> Result<()> {
        if self.normals.is_none() {
            self.normals = Some(compute_vertex_normals(&self.positions, &self.indices)?);
        }
        Ok(())
    }
}

impl MeshSource for TriMesh {
    fn positions(&self) -> Option<&[Vec3]> {
        Some(&self.positions)
    }

    fn indices(&self) -> Option<&[u32]> {
        Some(&self.indices)
    }

    fn normals(&self) -> Option<&[Vec3]> {
        self.normals.as_deref()
    }

    fn attribute(&self, name: &str) -> Option<&[f32]> {
        self.attributes.get(name).map(Vec::as_slice)
    }
}

/// Iterates the complete triangles of a flat index buffer.
///
/// A trailing partial triple is ignored.
pub fn triangles(indices: &[u32]) -> impl Iterator<Item = [u32; 3]> + '_ {
    indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
}

/// Checks that every index refers to one of `vertex_count` vertices.
pub fn validate_indices(indices: &[u32], vertex_count: usize) -> Result<()> {
    match indices.iter().find(|&&i| i as usize >= vertex_count) {
        Some(&index) => Err(ContourError::IndexOutOfRange {
            index,
            vertex_count,
        }),
        None => Ok(()),
    }
}

/// Computes vertex normals as area-weighted average of incident face normals.
///
/// Vertices that belong to no triangle get a zero normal.
pub fn compute_vertex_normals(positions: &[Vec3], indices: &[u32]) -> Result<Vec<Vec3>> {
    validate_indices(indices, positions.len())?;

    let mut normals = vec![Vec3::ZERO; positions.len()];

    for [a, b, c] in triangles(indices) {
        let v0 = positions[a as usize];
        let v1 = positions[b as usize];
        let v2 = positions[c as usize];

        // The cross product length is twice the area, so this is already area weighted
        let weighted_normal = (v1 - v0).cross(v2 - v0);
        normals[a as usize] += weighted_normal;
        normals[b as usize] += weighted_normal;
        normals[c as usize] += weighted_normal;
    }

    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }

    Ok(normals)
}
