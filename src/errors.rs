//! Validation errors

use std::fmt::Display;

/// All the ways a set of mesh buffers can be malformed.
///
/// Every variant is fatal to the call that produced it; no partial output is
/// ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// (TriangleCountNotMultipleOfThree) The triangle index buffer cannot be split into triples
    TriangleCountNotMultipleOfThree { len: usize },
    /// (IndexOutOfRange) A triangle index points past the end of the vertex buffer
    IndexOutOfRange {
        index: u32,
        slot: usize,
        vertex_count: usize,
    },
    /// (NormalCountMismatch) The normal buffer is not parallel to the vertex buffer
    NormalCountMismatch { vertices: usize, normals: usize },
    /// (UvCountExceedsVertices) More texture coordinates than vertices
    UvCountExceedsVertices { vertices: usize, uvs: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::TriangleCountNotMultipleOfThree { len } => write!(
                f,
                "(TriangleCountNotMultipleOfThree) Triangle index buffer length {} is not a multiple of 3",
                len
            ),
            ValidationError::IndexOutOfRange { index, slot, vertex_count } => write!(
                f,
                "(IndexOutOfRange) Triangle index {} at slot {} is out of range for {} vertices",
                index, slot, vertex_count
            ),
            ValidationError::NormalCountMismatch { vertices, normals } => write!(
                f,
                "(NormalCountMismatch) {} normals for {} vertices",
                normals, vertices
            ),
            ValidationError::UvCountExceedsVertices { vertices, uvs } => write!(
                f,
                "(UvCountExceedsVertices) {} texture coordinates for {} vertices",
                uvs, vertices
            ),
        }
    }
}
