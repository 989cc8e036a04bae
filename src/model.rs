//! A model is a flat collection of independently-renderable sub-meshes.
//!
//! This is the host-agnostic stand-in for "every renderer found under a root
//! object": whatever scene traversal the host performs, it hands us the
//! sub-meshes as a list and takes the doubled buffers back.

use crate::errors::ValidationError;
use crate::mesh::MeshBuffers;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One renderable mesh of a larger model.
#[derive(Debug, Clone, PartialEq)]
pub struct SubMesh {
    pub name: String,
    pub buffers: MeshBuffers,
}

impl SubMesh {
    pub fn new(name: impl Into<String>, buffers: MeshBuffers) -> Self {
        SubMesh {
            name: name.into(),
            buffers,
        }
    }
}

/// A root object with zero or more sub-meshes under it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub sub_meshes: Vec<SubMesh>,
}

impl Model {
    pub const fn new() -> Self {
        Model {
            sub_meshes: Vec::new(),
        }
    }

    pub fn from_sub_meshes(sub_meshes: Vec<SubMesh>) -> Self {
        Model { sub_meshes }
    }

    pub fn push(&mut self, sub_mesh: SubMesh) {
        self.sub_meshes.push(sub_mesh);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sub_meshes.is_empty()
    }

    /// Double the faces of every sub-mesh.
    ///
    /// Sub-meshes are independent, so with the `parallel` feature the map
    /// runs on rayon; otherwise they are processed sequentially. The first
    /// malformed sub-mesh aborts the whole call with no model returned.
    pub fn double_faces(&self) -> Result<Model, ValidationError> {
        #[cfg(feature = "parallel")]
        let doubled: Result<Vec<SubMesh>, ValidationError> = self
            .sub_meshes
            .par_iter()
            .map(|sub| {
                Ok(SubMesh {
                    name: sub.name.clone(),
                    buffers: sub.buffers.double_faces()?,
                })
            })
            .collect();

        #[cfg(not(feature = "parallel"))]
        let doubled: Result<Vec<SubMesh>, ValidationError> = self
            .sub_meshes
            .iter()
            .map(|sub| {
                Ok(SubMesh {
                    name: sub.name.clone(),
                    buffers: sub.buffers.double_faces()?,
                })
            })
            .collect();

        Ok(Model {
            sub_meshes: doubled?,
        })
    }

    /// Double the faces of every sub-mesh, writing the results back.
    ///
    /// Every sub-mesh is validated before any buffer is replaced, so an
    /// error late in the list never leaves the model half-doubled.
    pub fn double_faces_in_place(&mut self) -> Result<(), ValidationError> {
        for sub in &self.sub_meshes {
            sub.buffers.validate()?;
        }
        for sub in &mut self.sub_meshes {
            sub.buffers.double_faces_in_place()?;
        }
        Ok(())
    }
}
