pub const EPSILON: f32 = 1e-5;

/// Matrix euler extraction treats `|m[1]|` above this as a pole (gimbal lock).
pub const GIMBAL_LOCK_THRESHOLD: f32 = 0.9998;
/// Below this value of `1 - dot`, [`Quaternion::slerp`](crate::util::linalg::Quaternion::slerp)
/// falls back to a normalised lerp.
pub const SLERP_THRESHOLD: f32 = 1e-5;

pub const DEFAULT_Z_NEAR: f32 = 0.1;
pub const DEFAULT_Z_FAR: f32 = 10_000.0;
