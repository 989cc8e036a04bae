use doubleface::errors::ValidationError;
use doubleface::float_types::EPSILON;
use doubleface::mesh::MeshBuffers;
use nalgebra::{Point2, Point3, Vector3};

/// The single-triangle mesh from the reference scenario: no uv buffer.
fn lone_triangle() -> MeshBuffers {
    MeshBuffers::from_buffers(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        vec![Vector3::new(0.0, 0.0, 1.0); 3],
        Vec::new(),
        vec![0, 1, 2],
    )
    .expect("fixture is well-formed")
}

#[test]
fn doubling_doubles_every_buffer() {
    let cube = MeshBuffers::cube(2.0);
    let doubled = cube.double_faces().unwrap();

    assert_eq!(doubled.vertices.len(), 2 * cube.vertices.len());
    assert_eq!(doubled.normals.len(), 2 * cube.normals.len());
    assert_eq!(doubled.uv.len(), 2 * cube.vertices.len());
    assert_eq!(doubled.triangles.len(), 2 * cube.triangles.len());
    doubled.validate().expect("doubled mesh is well-formed");
}

#[test]
fn vertices_are_duplicated_pair_wise() {
    let cube = MeshBuffers::cube(1.5);
    let v = cube.vertices.len();
    let doubled = cube.double_faces().unwrap();

    for j in 0..v {
        assert_eq!(doubled.vertices[j], cube.vertices[j]);
        assert_eq!(doubled.vertices[j + v], cube.vertices[j]);
    }
}

#[test]
fn back_copy_normals_are_negated() {
    let cube = MeshBuffers::cube(1.0);
    let v = cube.vertices.len();
    let doubled = cube.double_faces().unwrap();

    for j in 0..v {
        assert_eq!(doubled.normals[j], cube.normals[j]);
        assert!(
            (doubled.normals[j + v] + cube.normals[j]).norm() < EPSILON,
            "back normal {} should be the negation of front normal {}",
            doubled.normals[j + v],
            cube.normals[j]
        );
    }
}

#[test]
fn back_triangles_are_offset_and_rewound() {
    let cube = MeshBuffers::cube(1.0);
    let v = cube.vertices.len() as u32;
    let t = cube.triangles.len();
    let doubled = cube.double_faces().unwrap();

    for x in (0..t).step_by(3) {
        // Front half is copied verbatim.
        assert_eq!(&doubled.triangles[x..x + 3], &cube.triangles[x..x + 3]);

        // Back half swaps slots 1 and 2 to reverse the winding.
        let j = x + t;
        assert_eq!(doubled.triangles[j], cube.triangles[x] + v);
        assert_eq!(doubled.triangles[j + 1], cube.triangles[x + 2] + v);
        assert_eq!(doubled.triangles[j + 2], cube.triangles[x + 1] + v);
    }
}

#[test]
fn lone_triangle_scenario() {
    let doubled = lone_triangle().double_faces().unwrap();

    assert_eq!(doubled.vertices.len(), 6);
    assert_eq!(doubled.vertices[0], doubled.vertices[3]);
    assert_eq!(doubled.vertices[1], doubled.vertices[4]);
    assert_eq!(doubled.vertices[2], doubled.vertices[5]);

    assert_eq!(doubled.normals.len(), 6);
    for j in 0..3 {
        assert_eq!(doubled.normals[j], Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(doubled.normals[j + 3], Vector3::new(0.0, 0.0, -1.0));
    }

    // No input uv: output is a zeroed buffer of length 2V.
    assert_eq!(doubled.uv, vec![Point2::origin(); 6]);

    assert_eq!(doubled.triangles, vec![0, 1, 2, 3, 5, 4]);
}

#[test]
fn textured_triangle_duplicates_uv() {
    let mut tri = lone_triangle();
    tri.uv = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    ];
    // 3 uvs vs 3 triangle indices: passes the textured heuristic.
    assert!(tri.is_textured());

    let doubled = tri.double_faces().unwrap();
    for j in 0..3 {
        assert_eq!(doubled.uv[j], tri.uv[j]);
        assert_eq!(doubled.uv[j + 3], tri.uv[j]);
    }
}

/// Documents the inherited heuristic misfire: a textured quad has 4 uvs but
/// 6 triangle indices, so `uv.len() < triangles.len()` classifies it as
/// untextured and its coordinates are dropped. Deliberately not fixed.
#[test]
fn textured_quad_loses_uv_to_untextured_heuristic() {
    let quad = MeshBuffers::quad(1.0);
    assert_eq!(quad.uv.len(), 4);
    assert!(!quad.is_textured());

    let doubled = quad.double_faces().unwrap();
    assert_eq!(doubled.uv, vec![Point2::origin(); 8]);
}

#[test]
fn empty_mesh_doubles_to_empty() {
    let empty = MeshBuffers::new();
    let doubled = empty.double_faces().unwrap();

    assert!(doubled.vertices.is_empty());
    assert!(doubled.normals.is_empty());
    assert!(doubled.uv.is_empty());
    assert!(doubled.triangles.is_empty());
}

#[test]
fn doubling_is_not_a_toggle() {
    let tri = lone_triangle();
    let twice = tri.double_faces().unwrap().double_faces().unwrap();

    // Doubling twice quadruples; it does not round-trip.
    assert_eq!(twice.vertices.len(), 4 * tri.vertices.len());
    assert_eq!(twice.triangles.len(), 4 * tri.triangles.len());
    twice.validate().expect("quadrupled mesh is well-formed");
}

#[test]
fn out_of_range_index_is_rejected() {
    let mut tri = lone_triangle();
    tri.triangles = vec![0, 1, 5];

    assert_eq!(
        tri.double_faces().unwrap_err(),
        ValidationError::IndexOutOfRange {
            index: 5,
            slot: 2,
            vertex_count: 3,
        }
    );
}

#[test]
fn ragged_triangle_buffer_is_rejected() {
    let mut tri = lone_triangle();
    tri.triangles = vec![0, 1];

    assert_eq!(
        tri.double_faces().unwrap_err(),
        ValidationError::TriangleCountNotMultipleOfThree { len: 2 }
    );
}

#[test]
fn mismatched_normals_are_rejected() {
    let mut tri = lone_triangle();
    tri.normals.pop();

    assert_eq!(
        tri.double_faces().unwrap_err(),
        ValidationError::NormalCountMismatch {
            vertices: 3,
            normals: 2,
        }
    );
}

#[test]
fn oversized_uv_buffer_is_rejected() {
    let mut tri = lone_triangle();
    tri.uv = vec![Point2::origin(); 4];

    assert_eq!(
        tri.double_faces().unwrap_err(),
        ValidationError::UvCountExceedsVertices {
            vertices: 3,
            uvs: 4,
        }
    );
}

#[test]
fn in_place_error_leaves_buffers_untouched() {
    let mut bad = lone_triangle();
    bad.triangles = vec![0, 1, 7];
    let before = bad.clone();

    assert!(bad.double_faces_in_place().is_err());
    assert_eq!(bad, before, "failed call must not mutate any buffer");
}

#[test]
fn in_place_success_replaces_all_buffers() {
    let mut tri = lone_triangle();
    tri.double_faces_in_place().unwrap();

    assert_eq!(tri.vertices.len(), 6);
    assert_eq!(tri.triangles, vec![0, 1, 2, 3, 5, 4]);
}

#[test]
fn computed_normals_match_flat_faces() {
    let mut tri = lone_triangle();
    tri.normals.clear();
    tri.compute_normals();

    assert_eq!(tri.normals.len(), 3);
    for normal in &tri.normals {
        assert!(
            (normal - Vector3::new(0.0, 0.0, 1.0)).norm() < EPSILON,
            "planar triangle normals should be +Z, got {normal}"
        );
    }
}
