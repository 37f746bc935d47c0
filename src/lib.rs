//! # remath
//!
//! Small linear-algebra toolkit for real-time graphics: [`Vec2`](util::linalg::Vec2),
//! [`Vec3`](util::linalg::Vec3), rotation-only [`Matrix3`](util::linalg::Matrix3), affine
//! [`Matrix4`](util::linalg::Matrix4) and [`Quaternion`](util::linalg::Quaternion), plus
//! `perspective`/`look_at` builders.
//!
//! Everything is a `Copy` value type laid out exactly as OpenGL expects, so matrices can be
//! handed straight to a graphics API through [`Matrix4::as_slice`](util::linalg::Matrix4::as_slice).
//!
//! ```
//! use remath::core::prelude::*;
//!
//! let view = look_at(Vec3::new(0.0, 0.0, 6.0), Vec3::zero(), Vec3::unit_y());
//! let projection = perspective(45.0, 800.0 / 600.0);
//! let mut model = Matrix4::identity();
//! model.set_rotation(to_radians(30.0), to_radians(30.0), 0.0);
//!
//! let mvp = projection * view * model;
//! assert_eq!(mvp.as_slice().len(), 16);
//! ```

pub mod core;
pub mod util;
