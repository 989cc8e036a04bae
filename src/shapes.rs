//! Single-sided primitive meshes used by the demo binary and tests.
//!
//! Faces carry flat per-corner normals (corners are not shared between
//! faces), since double-siding mirrors normals per vertex.

use crate::float_types::Real;
use crate::mesh::MeshBuffers;
use nalgebra::{Point2, Point3, Vector3};

impl MeshBuffers {
    /// A single untextured triangle in the XY plane, facing +Z.
    pub fn triangle() -> MeshBuffers {
        MeshBuffers {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![Vector3::z(); 3],
            uv: Vec::new(),
            triangles: vec![0, 1, 2],
        }
    }

    /// A textured unit-uv square of the given side in the XY plane, facing +Z.
    pub fn quad(size: Real) -> MeshBuffers {
        MeshBuffers {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(size, 0.0, 0.0),
                Point3::new(size, size, 0.0),
                Point3::new(0.0, size, 0.0),
            ],
            normals: vec![Vector3::z(); 4],
            uv: vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ],
            triangles: vec![0, 1, 2, 0, 2, 3],
        }
    }

    /// An axis-aligned cube spanning `[0, size]^3`, flat-shaded, with a
    /// unit-uv atlas per face. 24 vertices, 12 triangles.
    pub fn cube(size: Real) -> MeshBuffers {
        // Corner layout as in the usual cuboid table; each face lists its
        // four corners CCW as seen from outside.
        let corner = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(size, 0.0, 0.0),
            Point3::new(size, size, 0.0),
            Point3::new(0.0, size, 0.0),
            Point3::new(0.0, 0.0, size),
            Point3::new(size, 0.0, size),
            Point3::new(size, size, size),
            Point3::new(0.0, size, size),
        ];
        let face_definitions = [
            ([0, 3, 2, 1], -Vector3::z()), // bottom
            ([4, 5, 6, 7], Vector3::z()),  // top
            ([0, 1, 5, 4], -Vector3::y()), // front
            ([3, 7, 6, 2], Vector3::y()),  // back
            ([0, 4, 7, 3], -Vector3::x()), // left
            ([1, 2, 6, 5], Vector3::x()),  // right
        ];

        let mut mesh = MeshBuffers::new();
        for (corners, normal) in face_definitions {
            let base = mesh.vertices.len() as u32;
            for (k, &c) in corners.iter().enumerate() {
                mesh.vertices.push(corner[c]);
                mesh.normals.push(normal);
                mesh.uv.push(match k {
                    0 => Point2::new(0.0, 0.0),
                    1 => Point2::new(1.0, 0.0),
                    2 => Point2::new(1.0, 1.0),
                    _ => Point2::new(0.0, 1.0),
                });
            }
            mesh.triangles
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        mesh
    }

    /// An untextured flat-shaded tetrahedron on the even corners of
    /// `[0, size]^3`. 12 vertices, 4 triangles; exercises the zero-uv path.
    pub fn tetrahedron(size: Real) -> MeshBuffers {
        let corner = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(size, size, 0.0),
            Point3::new(size, 0.0, size),
            Point3::new(0.0, size, size),
        ];
        // Outward-facing windings and their (unnormalized) normals.
        let face_definitions = [
            ([0, 1, 2], Vector3::new(1.0, -1.0, -1.0)),
            ([0, 3, 1], Vector3::new(-1.0, 1.0, -1.0)),
            ([0, 2, 3], Vector3::new(-1.0, -1.0, 1.0)),
            ([1, 3, 2], Vector3::new(1.0, 1.0, 1.0)),
        ];

        let mut mesh = MeshBuffers::new();
        for (corners, normal) in face_definitions {
            let base = mesh.vertices.len() as u32;
            let normal = normal.normalize();
            for &c in &corners {
                mesh.vertices.push(corner[c]);
                mesh.normals.push(normal);
            }
            mesh.triangles
                .extend_from_slice(&[base, base + 1, base + 2]);
        }
        mesh
    }
}
