//! Core types for isocontour-rs.
//!
//! This crate provides the data model consumed by the contouring algorithms:
//! - [`MeshSource`] trait and the owned [`TriMesh`]
//! - Color maps and the quantized [`Lut`]
//! - [`ScalarRange`] resolution for attribute normalization
//! - [`FilledContourOptions`] configuration and the shared error type

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Bucket indices and vertex counts are far below f32 precision limits
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod color_maps;
pub mod error;
pub mod mesh;
pub mod options;
pub mod range;

pub use color_maps::{from_value_to_color, parse_hex_color, ColorMap, ColorMapRegistry, Lut};
pub use error::{ContourError, Result};
pub use mesh::{compute_vertex_normals, triangles, validate_indices, MeshSource, TriMesh};
pub use options::FilledContourOptions;
pub use range::{min_max, ScalarRange};

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3};
