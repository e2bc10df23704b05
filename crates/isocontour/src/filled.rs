//! Filled iso-contour extraction.
//!
//! Splits every triangle of a mesh into bands bounded by consecutive
//! iso-values and colors each band with the lookup table value of its lower
//! boundary.

use std::borrow::Cow;

use glam::Vec3;
use isocontour_core::{
    compute_vertex_normals, from_value_to_color, triangles, validate_indices, ContourError,
    FilledContourOptions, Lut, MeshSource, Result, ScalarRange,
};

use crate::assembler::{FilledContours, MeshAssembler};
use crate::classify::{classify, Corner};
use crate::segments::{build_segments, IsoSegment};
use crate::stitch::stitch;

/// Reusable filled-contour extractor.
///
/// Holds the lookup table, the sorted iso-values, and scratch buffers that are
/// reset on every [`run`](Self::run). One instance must not be shared between
/// concurrent runs; create one per thread instead.
#[derive(Debug)]
pub struct IsoContoursFilled {
    lut: Lut,
    iso_values: Vec<f32>,
    default_color: Vec3,
    assembler: MeshAssembler,
    segments: Vec<IsoSegment>,
}

impl IsoContoursFilled {
    /// Creates an extractor for `iso_list` using the named color map.
    ///
    /// Iso-values are sorted ascending and NaN entries are discarded.
    /// Duplicates are kept and produce zero-width bands.
    pub fn new(lut: &str, nb_colors: usize, iso_list: &[f32]) -> Result<Self> {
        let mut lut = Lut::new(lut, nb_colors)?;
        lut.set_min(0.0);
        lut.set_max(1.0);

        let mut iso_values: Vec<f32> = iso_list
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .collect();
        iso_values.sort_by(f32::total_cmp);

        Ok(Self {
            lut,
            iso_values,
            default_color: Vec3::ZERO,
            assembler: MeshAssembler::new(),
            segments: Vec::new(),
        })
    }

    /// Creates an extractor from options. The range bounds in `options` are
    /// not stored; pass them to [`run`](Self::run).
    pub fn from_options(options: &FilledContourOptions, iso_list: &[f32]) -> Result<Self> {
        let mut extractor = Self::new(&options.lut, options.nb_colors, iso_list)?;
        extractor.default_color = options.default_color;
        Ok(extractor)
    }

    /// Sets the color used when the lookup table yields none.
    #[must_use]
    pub fn with_default_color(mut self, color: Vec3) -> Self {
        self.default_color = color;
        self
    }

    /// The sorted iso-values.
    pub fn iso_values(&self) -> &[f32] {
        &self.iso_values
    }

    /// The lookup table.
    pub fn lut(&self) -> &Lut {
        &self.lut
    }

    /// Extracts filled contours of `attribute` over `mesh`.
    ///
    /// Unset `min`/`max` are computed from the attribute. An empty iso-value
    /// list, or a range with `max <= min`, yields empty geometry. Normals are
    /// computed from the mesh when it has none.
    pub fn run<M>(
        &mut self,
        mesh: &M,
        attribute: &[f32],
        min: Option<f32>,
        max: Option<f32>,
    ) -> Result<FilledContours>
    where
        M: MeshSource + ?Sized,
    {
        self.assembler.reset();

        if self.iso_values.is_empty() {
            return Ok(FilledContours::default());
        }

        let positions = mesh
            .positions()
            .ok_or(ContourError::MissingMeshData("positions"))?;
        let indices = mesh
            .indices()
            .ok_or(ContourError::MissingMeshData("indices"))?;

        if attribute.len() != positions.len() {
            return Err(ContourError::SizeMismatch {
                expected: positions.len(),
                actual: attribute.len(),
            });
        }
        validate_indices(indices, positions.len())?;

        let range = match ScalarRange::resolve(attribute, min, max) {
            Ok(range) => range,
            Err(ContourError::InvalidRange { min, max }) => {
                log::warn!("degenerate scalar range [{min}, {max}], no contours generated");
                return Ok(FilledContours::default());
            }
            Err(err) => return Err(err),
        };

        let normals = match mesh.normals() {
            Some(normals) if normals.len() == positions.len() => Cow::Borrowed(normals),
            Some(normals) => {
                return Err(ContourError::SizeMismatch {
                    expected: positions.len(),
                    actual: normals.len(),
                })
            }
            None => {
                log::debug!("mesh has no normals, computing vertex normals");
                Cow::Owned(compute_vertex_normals(positions, indices)?)
            }
        };

        log::debug!(
            "filled contours: {} triangles, {} iso-values, range [{}, {}]",
            indices.len() / 3,
            self.iso_values.len(),
            range.min(),
            range.max()
        );

        let mut skipped = 0_usize;
        for tri_indices in triangles(indices) {
            let corners =
                tri_indices.map(|i| Corner::new(positions[i as usize], normals[i as usize]));
            let values = tri_indices.map(|i| attribute[i as usize]);

            let Some(mut tri) = classify(corners, values) else {
                skipped += 1;
                continue;
            };

            build_segments(&mut tri, &self.iso_values, range.min(), &mut self.segments);

            let lut = &self.lut;
            let default_color = self.default_color;
            let assembler = &mut self.assembler;
            stitch(&tri, &self.segments, &range, |polygon| {
                let value = range.normalize(polygon.iso);
                let color = from_value_to_color(value, Some(lut), default_color);
                assembler.add_polygon(polygon.corners(), color);
            });
        }

        let output = self.assembler.take();
        log::debug!(
            "filled contours: emitted {} vertices, {} triangles ({skipped} flat triangles skipped)",
            output.num_vertices(),
            output.num_triangles()
        );
        Ok(output)
    }

    /// Like [`run`](Self::run), reading the attribute from the mesh by name.
    pub fn run_named<M>(
        &mut self,
        mesh: &M,
        name: &str,
        min: Option<f32>,
        max: Option<f32>,
    ) -> Result<FilledContours>
    where
        M: MeshSource + ?Sized,
    {
        let attribute = mesh
            .attribute(name)
            .ok_or_else(|| ContourError::MissingAttribute(name.to_string()))?;
        self.run(mesh, attribute, min, max)
    }
}

/// Extracts filled iso-contours in one call.
///
/// Bounds left unset in `options` are computed from `attribute`. An empty
/// `iso_list` returns empty buffers.
pub fn create_iso_contours_filled<M>(
    mesh: &M,
    attribute: &[f32],
    iso_list: &[f32],
    options: &FilledContourOptions,
) -> Result<FilledContours>
where
    M: MeshSource + ?Sized,
{
    IsoContoursFilled::from_options(options, iso_list)?.run(
        mesh,
        attribute,
        options.min,
        options.max,
    )
}
