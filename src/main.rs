// main.rs
//
// Minimal demo: build a few single-sided shapes, double their faces, and
// write both versions as ASCII STL so the back faces can be inspected in a
// viewer.

use doubleface::{MeshBuffers, Model, SubMesh};
use std::error::Error;
use std::fs;

fn main() -> Result<(), Box<dyn Error>> {
    fs::create_dir_all("stl")?;

    // A lone quad is the clearest demonstration: single-sided it vanishes
    // when viewed from behind, doubled it does not.
    let quad = MeshBuffers::quad(2.0);
    fs::write("stl/quad.stl", quad.to_stl_ascii("quad"))?;
    let quad_doubled = quad.double_faces()?;
    fs::write("stl/quad_doubled.stl", quad_doubled.to_stl_ascii("quad_doubled"))?;

    // Doubling a whole model walks every sub-mesh.
    let mut model = Model::from_sub_meshes(vec![
        SubMesh::new("cube", MeshBuffers::cube(1.0)),
        SubMesh::new("tetrahedron", MeshBuffers::tetrahedron(1.0)),
    ]);
    model.double_faces_in_place()?;
    for sub in &model.sub_meshes {
        fs::write(
            format!("stl/{}_doubled.stl", sub.name),
            sub.buffers.to_stl_ascii(&sub.name),
        )?;
    }

    Ok(())
}
