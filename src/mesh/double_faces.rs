//! Face duplication: make a single-sided mesh visible from both sides

use super::MeshBuffers;
use crate::errors::ValidationError;
use nalgebra::Point2;

impl MeshBuffers {
    /// Duplicate every face so the surface renders from both sides.
    ///
    /// Produces new buffers of length `2V` / `2T`:
    /// - vertex `j` is duplicated at `j + V`, at the same position,
    /// - the duplicate's normal is negated so backface lighting is correct,
    /// - texture coordinates are duplicated pair-wise (zeroed throughout when
    ///   the mesh tests as untextured, see [`MeshBuffers::is_textured`]),
    /// - each front triangle `[a, b, c]` gains a back triangle
    ///   `[a + V, c + V, b + V]` — the swapped slots reverse the winding
    ///   order, so the mirrored face points the opposite way.
    ///
    /// Input is validated first; on error nothing is produced and `self` is
    /// untouched. Doubling an empty mesh yields an empty mesh. The transform
    /// is not a toggle: applying it twice quadruples the buffers.
    pub fn double_faces(&self) -> Result<MeshBuffers, ValidationError> {
        self.validate()?;

        let num_vertices = self.vertices.len();
        let num_triangles = self.triangles.len();

        let mut new_vertices = Vec::with_capacity(num_vertices * 2);
        let mut new_normals = Vec::with_capacity(num_vertices * 2);
        let mut new_uv = Vec::with_capacity(num_vertices * 2);
        let mut new_triangles = Vec::with_capacity(num_triangles * 2);

        // Front copies keep their normals, back copies are negated.
        new_vertices.extend_from_slice(&self.vertices);
        new_vertices.extend_from_slice(&self.vertices);
        new_normals.extend_from_slice(&self.normals);
        new_normals.extend(self.normals.iter().map(|n| -n));

        if self.is_textured() {
            // An undersized-but-textured buffer is legal input (`uv.len() <=
            // V`); vertices past its end get a zero coordinate.
            let uv_of = |j: usize| self.uv.get(j).copied().unwrap_or_else(Point2::origin);
            new_uv.extend((0..num_vertices).map(uv_of));
            new_uv.extend((0..num_vertices).map(uv_of));
        } else {
            new_uv.resize(num_vertices * 2, Point2::origin());
        }

        // Front half verbatim, back half offset into the mirrored vertex
        // range with slots 1 and 2 swapped to reverse the winding.
        let offset = num_vertices as u32;
        new_triangles.extend_from_slice(&self.triangles);
        for tri in self.triangles.chunks_exact(3) {
            new_triangles.push(tri[0] + offset);
            new_triangles.push(tri[2] + offset);
            new_triangles.push(tri[1] + offset);
        }

        Ok(MeshBuffers {
            vertices: new_vertices,
            normals: new_normals,
            uv: new_uv,
            triangles: new_triangles,
        })
    }

    /// [`double_faces`](MeshBuffers::double_faces), writing the result back
    /// into this mesh. All four buffers are replaced together after the
    /// transform succeeds; on error the mesh keeps its original buffers.
    pub fn double_faces_in_place(&mut self) -> Result<(), ValidationError> {
        *self = self.double_faces()?;
        Ok(())
    }
}
