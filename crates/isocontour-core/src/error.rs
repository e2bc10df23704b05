//! Error types for isocontour-rs.

use thiserror::Error;

/// The main error type for contour extraction.
#[derive(Error, Debug)]
pub enum ContourError {
    /// The mesh lacks positions or indices.
    #[error("mesh data missing: {0}")]
    MissingMeshData(&'static str),

    /// The requested per-vertex attribute does not exist.
    #[error("attribute '{0}' not found on mesh")]
    MissingAttribute(String),

    /// The resolved scalar range is empty or inverted.
    #[error("invalid scalar range: min {min} must be below max {max}")]
    InvalidRange { min: f32, max: f32 },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A triangle references a vertex that does not exist.
    #[error("vertex index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// No color map is registered under the given name.
    #[error("color map '{0}' not found")]
    ColorMapNotFound(String),

    /// A color string could not be parsed.
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for contour extraction.
pub type Result<T> = std::result::Result<T, ContourError>;
