//! Filled iso-contours and isolines for scalar fields on triangle meshes.
//!
//! Given per-vertex values and a list of iso-values, [`IsoContoursFilled`]
//! splits every triangle into bands between consecutive iso-values and
//! returns a colored triangle soup ready for rendering. [`IsoContourLines`]
//! instead returns the line segments where the field equals each iso-value.
//!
//! # Example
//!
//! ```
//! use isocontour::*;
//!
//! # fn main() -> Result<()> {
//! let mesh = TriMesh::new(
//!     vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)],
//!     vec![0, 1, 2],
//! );
//! let values = [0.0, 5.0, 10.0];
//!
//! let bands = create_iso_contours_filled(&mesh, &values, &[2.0, 7.0], &FilledContourOptions::default())?;
//! assert_eq!(bands.num_triangles(), 5);
//!
//! let lines = create_iso_contour_lines(&mesh, &values, &[2.0, 7.0], "#000000", None)?;
//! assert_eq!(lines.segment_counts, vec![1, 1]);
//! # Ok(())
//! # }
//! ```

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Vertex counts fit in u32 index buffers
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

pub mod assembler;
pub mod classify;
pub mod filled;
pub mod levels;
pub mod lines;
pub mod marching_triangles;
pub mod segments;
pub mod stitch;

pub use assembler::{FilledContours, MeshAssembler};
pub use classify::{classify, Corner, TriInfo};
pub use filled::{create_iso_contours_filled, IsoContoursFilled};
pub use levels::{iso_levels, iso_levels_count, MAX_ISO_LEVELS};
pub use lines::{create_iso_contour_lines, IsoContourLines, IsoLines};
pub use marching_triangles::{Isolines, MarchingTriangles};
pub use segments::{build_segments, IsoSegment};
pub use stitch::{stitch, Polygon, Winding, MAX_POLYGON_CORNERS};

pub use isocontour_core::{
    compute_vertex_normals, from_value_to_color, min_max, parse_hex_color, ColorMap,
    ColorMapRegistry, ContourError, FilledContourOptions, Lut, MeshSource, Result, ScalarRange,
    TriMesh,
};

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3};
