//! Error types for mesh loading, configuration and image output.
//!
//! Degenerate geometry is never an error: the rasterizers skip it silently.
//! Everything in [`RenderError`] is fatal for the render job and is reported
//! by the binary with a non-zero exit status.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the rasterization loop.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The mesh file is missing, unreadable or not valid OBJ.
    #[error("failed to load mesh from {path}: {source}")]
    MeshLoad {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    /// The rendered image could not be encoded or written.
    #[error("failed to write image to {path}: {source}")]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Rejected render settings.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for fallible pipeline operations.
pub type Result<T> = std::result::Result<T, RenderError>;
