// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used when comparing positions and normals.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance used when comparing positions and normals.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-8;
