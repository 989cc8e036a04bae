//! STL import/export so doubled meshes can be checked in a viewer.

use crate::float_types::Real;
use crate::mesh::MeshBuffers;
use nalgebra::{Point3, Vector3};
use std::io::Cursor;

impl MeshBuffers {
    /// Convert this mesh to an **ASCII STL** string with the given `name`.
    ///
    /// Each triangle becomes one facet; the facet normal is taken from the
    /// triangle's first vertex.
    pub fn to_stl_ascii(&self, name: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("solid {name}\n"));

        for tri in self.triangles.chunks_exact(3) {
            let n = self.normals[tri[0] as usize];
            out.push_str(&format!(
                "  facet normal {:.6} {:.6} {:.6}\n",
                n.x, n.y, n.z
            ));
            out.push_str("    outer loop\n");
            for &index in tri {
                let p = self.vertices[index as usize];
                out.push_str(&format!(
                    "      vertex {:.6} {:.6} {:.6}\n",
                    p.x, p.y, p.z
                ));
            }
            out.push_str("    endloop\n");
            out.push_str("  endfacet\n");
        }

        out.push_str(&format!("endsolid {name}\n"));
        out
    }

    /// Convert this mesh to a **binary STL** byte vector.
    ///
    /// The resulting `Vec<u8>` can be written to a file or handled in memory.
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        use stl_io::{Normal, Triangle, Vertex, write_stl};

        let mut triangles = Vec::<Triangle>::new();

        for tri in self.triangles.chunks_exact(3) {
            let n = self.normals[tri[0] as usize];
            #[allow(clippy::unnecessary_cast)]
            {
                triangles.push(Triangle {
                    normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                    vertices: [tri[0], tri[1], tri[2]].map(|index| {
                        let p = self.vertices[index as usize];
                        Vertex::new([p.x as f32, p.y as f32, p.z as f32])
                    }),
                });
            }
        }

        let mut cursor = Cursor::new(Vec::new());
        write_stl(&mut cursor, triangles.iter())?;
        Ok(cursor.into_inner())
    }

    /// Build a mesh from STL data (ASCII or binary) using `stl_io`.
    ///
    /// Every facet contributes three unshared vertices carrying the facet
    /// normal, so the result is flat-shaded. STL has no texture coordinates;
    /// the uv buffer comes back empty.
    pub fn from_stl(stl_data: &[u8]) -> Result<MeshBuffers, std::io::Error> {
        let mut cursor = Cursor::new(stl_data);
        let stl_reader = stl_io::create_stl_reader(&mut cursor)?;

        let mut mesh = MeshBuffers::new();
        for tri_result in stl_reader {
            let tri = tri_result?;

            let base = mesh.vertices.len() as u32;
            #[allow(clippy::unnecessary_cast)]
            let normal = Vector3::new(
                tri.normal[0] as Real,
                tri.normal[1] as Real,
                tri.normal[2] as Real,
            );
            for k in 0..3 {
                #[allow(clippy::unnecessary_cast)]
                mesh.vertices.push(Point3::new(
                    tri.vertices[k][0] as Real,
                    tri.vertices[k][1] as Real,
                    tri.vertices[k][2] as Real,
                ));
                mesh.normals.push(normal);
            }
            mesh.triangles
                .extend_from_slice(&[base, base + 1, base + 2]);
        }

        Ok(mesh)
    }
}
