//! Double-sided triangle meshes.
//!
//! Duplicates the faces of a mesh so both the front and back side are
//! visible: vertices are mirrored into a second copy, the copies' normals are
//! inverted, and the copied triangles are re-wound so they face the opposite
//! direction. The core is one pure buffer transformation,
//! [`MeshBuffers::double_faces`]; [`Model`] applies it across the sub-meshes
//! of a larger object.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` import/export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to double a model's sub-meshes concurrently

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod model;
pub mod shapes;

#[cfg(feature = "stl-io")]
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ValidationError;
pub use mesh::MeshBuffers;
pub use model::{Model, SubMesh};
