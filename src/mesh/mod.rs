//! `MeshBuffers` — the index-addressed buffer quartet a renderer hands us

use crate::errors::ValidationError;
use crate::float_types::Real;
use nalgebra::{Point2, Point3, Vector3};

pub mod double_faces;

/// Raw triangle-mesh buffers: positions, per-vertex normals, per-vertex
/// texture coordinates, and a flat triangle index list.
///
/// `vertices` and `normals` are parallel arrays of length `V`; `uv` has
/// length at most `V` (a host renderer may supply none at all); `triangles`
/// holds `3 * F` indices into `[0, V)`, three per face, whose order defines
/// each face's winding.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    pub vertices: Vec<Point3<Real>>,
    pub normals: Vec<Vector3<Real>>,
    pub uv: Vec<Point2<Real>>,
    pub triangles: Vec<u32>,
}

impl Default for MeshBuffers {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshBuffers {
    /// Create an empty mesh.
    pub const fn new() -> Self {
        MeshBuffers {
            vertices: Vec::new(),
            normals: Vec::new(),
            uv: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Build a mesh from its four raw buffers, rejecting malformed input.
    pub fn from_buffers(
        vertices: Vec<Point3<Real>>,
        normals: Vec<Vector3<Real>>,
        uv: Vec<Point2<Real>>,
        triangles: Vec<u32>,
    ) -> Result<Self, ValidationError> {
        let mesh = MeshBuffers {
            vertices,
            normals,
            uv,
            triangles,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Number of vertices `V`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle indices `T` (three per face).
    #[inline]
    pub fn triangle_index_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of faces `T / 3`.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.triangles.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the mesh is treated as carrying texture coordinates.
    ///
    /// This reproduces the host-side heuristic verbatim: a mesh is
    /// "untextured" when `uv.len() < triangles.len()`, i.e. a per-vertex
    /// count is compared against a per-index count. A textured mesh with
    /// fewer uv entries than triangle indices therefore tests as untextured.
    /// Kept bit-for-bit until product owners sign off on changing it.
    #[inline]
    pub fn is_textured(&self) -> bool {
        self.uv.len() >= self.triangles.len()
    }

    /// Check the buffer invariants.
    ///
    /// - triangle index count is a multiple of 3,
    /// - every index is in `[0, V)`,
    /// - normals are parallel to vertices,
    /// - at most one uv per vertex.
    ///
    /// An empty mesh (`V == 0`, no indices) is valid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.triangles.len() % 3 != 0 {
            return Err(ValidationError::TriangleCountNotMultipleOfThree {
                len: self.triangles.len(),
            });
        }
        if self.normals.len() != self.vertices.len() {
            return Err(ValidationError::NormalCountMismatch {
                vertices: self.vertices.len(),
                normals: self.normals.len(),
            });
        }
        if self.uv.len() > self.vertices.len() {
            return Err(ValidationError::UvCountExceedsVertices {
                vertices: self.vertices.len(),
                uvs: self.uv.len(),
            });
        }
        for (slot, &index) in self.triangles.iter().enumerate() {
            if index as usize >= self.vertices.len() {
                return Err(ValidationError::IndexOutOfRange {
                    index,
                    slot,
                    vertex_count: self.vertices.len(),
                });
            }
        }
        Ok(())
    }

    /// Recompute per-vertex normals as area-weighted averages of the
    /// incident face normals. Faces with zero area contribute nothing;
    /// isolated vertices keep a zero normal.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![Vector3::zeros(); self.vertices.len()];

        for tri in self.triangles.chunks_exact(3) {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            // Cross product length is twice the face area, so summing the
            // raw crosses weights each face by its area.
            let face_normal = (v1 - v0).cross(&(v2 - v0));

            normals[tri[0] as usize] += face_normal;
            normals[tri[1] as usize] += face_normal;
            normals[tri[2] as usize] += face_normal;
        }

        for normal in &mut normals {
            let len = normal.norm();
            if len > 0.0 {
                *normal /= len;
            }
        }

        self.normals = normals;
    }
}
