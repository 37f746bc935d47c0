//! Vector, matrix and quaternion value types.
//!
//! Conventions shared by every type in this module:
//! - Vectors are row vectors: transforming `v` by `M` computes `v * M`.
//! - [`Matrix3`] is row-major, [`Matrix4`] is column-major as OpenGL expects, with the translation
//!   in elements 12, 13 and 14.
//! - Euler angles are `(x, y, z)` radians applied in XYZ order.
//! - Equality (`==`) is exact; use the `almost_eq()` methods for tolerance-based comparison.

mod matrix3;
mod matrix4;
mod projection;
mod quaternion;
mod vec2;
mod vec3;

pub use matrix3::Matrix3;
pub use matrix4::Matrix4;
pub use projection::{look_at, perspective, perspective_with_planes, triangle_area};
pub use quaternion::Quaternion;
pub use vec2::Vec2;
pub use vec3::Vec3;
