//! Isoline extraction: line segments where the field equals each iso-value.

use glam::Vec3;
use isocontour_core::{
    from_value_to_color, min_max, parse_hex_color, validate_indices, ContourError, Lut,
    MeshSource, Result,
};

use crate::assembler::flatten;
use crate::marching_triangles::MarchingTriangles;

/// Line segments for a list of iso-values.
///
/// `positions` holds two points per segment, grouped by iso-value in input
/// order. `colors` holds one color per iso-value and `segment_counts` the
/// number of segments each iso-value contributed, so segment `k` of iso-value
/// `i` is colored `colors[i]`. [`vertex_colors`](Self::vertex_colors) expands
/// this to one color per position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IsoLines {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
    pub segment_counts: Vec<usize>,
}

impl IsoLines {
    /// Total number of line segments.
    #[must_use]
    pub fn num_segments(&self) -> usize {
        self.positions.len() / 2
    }

    /// Returns true if no segment was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// One color per position, aligned with `positions`.
    #[must_use]
    pub fn vertex_colors(&self) -> Vec<Vec3> {
        self.colors
            .iter()
            .zip(&self.segment_counts)
            .flat_map(|(&color, &count)| std::iter::repeat(color).take(count * 2))
            .collect()
    }

    /// Positions as `[x0, y0, z0, x1, ...]`.
    #[must_use]
    pub fn flat_positions(&self) -> Vec<f32> {
        flatten(&self.positions)
    }
}

/// Reusable isoline extractor.
#[derive(Debug, Clone)]
pub struct IsoContourLines {
    iso_values: Vec<f32>,
    default_color: Vec3,
    lut: Option<Lut>,
}

impl IsoContourLines {
    /// Creates an extractor for `iso_list`.
    ///
    /// Lines are colored through the named color map when `lut` is given, and
    /// with `default_color` (a `#rrggbb` string) otherwise.
    pub fn new(iso_list: &[f32], default_color: &str, lut: Option<&str>) -> Result<Self> {
        let default_color = parse_hex_color(default_color)?;
        let lut = lut.map(|name| Lut::new(name, 128)).transpose()?;
        Ok(Self {
            iso_values: iso_list.to_vec(),
            default_color,
            lut,
        })
    }

    /// The iso-values in input order.
    pub fn iso_values(&self) -> &[f32] {
        &self.iso_values
    }

    /// Extracts isolines of `attribute` over `mesh`.
    pub fn run<M>(&mut self, mesh: &M, attribute: &[f32]) -> Result<IsoLines>
    where
        M: MeshSource + ?Sized,
    {
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

        let mut output = IsoLines::default();
        if self.iso_values.is_empty() {
            return Ok(output);
        }

        let Some((vmin, vmax)) = min_max(attribute) else {
            return Ok(output);
        };

        if let Some(lut) = self.lut.as_mut() {
            lut.set_min(vmin);
            lut.set_max(vmax);
        }

        let mut algo = MarchingTriangles::new();
        algo.setup(indices, [vmin, vmax]);

        for &iso in &self.iso_values {
            let (edge_lines, fraction_lines) = algo.isolines(attribute, iso)?;

            output
                .colors
                .push(from_value_to_color(iso, self.lut.as_ref(), self.default_color));

            let mut count = 0;
            for (edges, fractions) in edge_lines.iter().zip(&fraction_lines) {
                let points: Vec<Vec3> = edges
                    .chunks_exact(2)
                    .zip(fractions)
                    .map(|(pair, &t)| {
                        let p1 = positions[pair[0] as usize];
                        let p2 = positions[pair[1] as usize];
                        p1 + t * (p2 - p1)
                    })
                    .collect();

                for w in points.windows(2) {
                    output.positions.push(w[0]);
                    output.positions.push(w[1]);
                    count += 1;
                }
            }

            log::trace!("isoline {iso}: {} polylines, {count} segments", edge_lines.len());
            output.segment_counts.push(count);
        }

        log::debug!(
            "isolines: {} iso-values, {} segments",
            self.iso_values.len(),
            output.num_segments()
        );
        Ok(output)
    }

    /// Like [`run`](Self::run), reading the attribute from the mesh by name.
    pub fn run_named<M>(&mut self, mesh: &M, name: &str) -> Result<IsoLines>
    where
        M: MeshSource + ?Sized,
    {
        let attribute = mesh
            .attribute(name)
            .ok_or_else(|| ContourError::MissingAttribute(name.to_string()))?;
        self.run(mesh, attribute)
    }
}

/// Extracts isolines in one call.
pub fn create_iso_contour_lines<M>(
    mesh: &M,
    attribute: &[f32],
    iso_list: &[f32],
    default_color: &str,
    lut: Option<&str>,
) -> Result<IsoLines>
where
    M: MeshSource + ?Sized,
{
    IsoContourLines::new(iso_list, default_color, lut)?.run(mesh, attribute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_colors_expand_counts() {
        let lines = IsoLines {
            positions: vec![Vec3::ZERO; 6],
            colors: vec![Vec3::X, Vec3::Y, Vec3::Z],
            segment_counts: vec![2, 0, 1],
        };
        assert_eq!(lines.num_segments(), 3);
        assert_eq!(
            lines.vertex_colors(),
            vec![Vec3::X, Vec3::X, Vec3::X, Vec3::X, Vec3::Z, Vec3::Z]
        );
    }

    #[test]
    fn test_bad_default_color() {
        assert!(matches!(
            IsoContourLines::new(&[1.0], "not-a-color", None),
            Err(ContourError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_unknown_lut() {
        assert!(matches!(
            IsoContourLines::new(&[1.0], "#000000", Some("nope")),
            Err(ContourError::ColorMapNotFound(_))
        ));
    }
}
