use crate::core::prelude::*;

use std::{
    fmt,
    fmt::Formatter,
    ops::{Index, IndexMut},
};

/// A 3x3 pure rotation matrix, stored row-major:
/// ```text
/// | 0 1 2 |
/// | 3 4 5 |
/// | 6 7 8 |
/// ```
///
/// Vectors are multiplied as rows, so [`rotate()`](Matrix3::rotate) computes `v * M`. The
/// rotation block of a [`Matrix4`] has the same element order, which is what the conversions
/// between the two rely on.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    bincode::Encode,
    bincode::Decode,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(C)]
#[must_use]
pub struct Matrix3 {
    data: [f32; 9],
}

impl Matrix3 {
    /// Creates an identity matrix:
    /// ```text
    /// | 1 0 0 |
    /// | 0 1 0 |
    /// | 0 0 1 |
    /// ```
    pub fn identity() -> Matrix3 {
        Matrix3 {
            data: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn from_array(data: [f32; 9]) -> Matrix3 {
        Matrix3 { data }
    }

    /// Creates a rotation matrix from XYZ euler angles in radians.
    ///
    /// # Examples
    ///
    /// ```
    /// use remath::core::prelude::*;
    ///
    /// let m = Matrix3::rotation(0.0, 0.0, std::f32::consts::FRAC_PI_2);
    /// assert!(m.rotate(Vec3::unit_x()).almost_eq(Vec3::unit_y()));
    /// ```
    pub fn rotation(x: f32, y: f32, z: f32) -> Matrix3 {
        let mut rv = Matrix3::identity();
        rv.set_rotation(x, y, z);
        rv
    }

    pub fn load_identity(&mut self) {
        *self = Matrix3::identity();
    }

    /// Overwrites all nine elements; `None` loads the identity.
    pub fn set(&mut self, data: Option<[f32; 9]>) {
        *self = data.map_or_else(Matrix3::identity, Matrix3::from_array);
    }

    /// Overwrites every element with the rotation for the XYZ euler angles `(x, y, z)`.
    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        let (sx, cx) = x.sin_cos();
        let (sy, cy) = y.sin_cos();
        let (sz, cz) = z.sin_cos();
        let sxsy = sx * sy;
        let cxsy = cx * sy;

        self.data = [
            cy * cz,
            cy * sz,
            -sy,
            sxsy * cz - cx * sz,
            sxsy * sz + cx * cz,
            sx * cy,
            cxsy * cz + sx * sz,
            cxsy * sz - sx * cz,
            cx * cy,
        ];
    }
    pub fn set_rotation_vec(&mut self, eulers: Vec3) {
        self.set_rotation(eulers.x, eulers.y, eulers.z);
    }

    /// Extracts XYZ euler angles from the rotation.
    ///
    /// Near the poles (`|m[1]| > GIMBAL_LOCK_THRESHOLD`) the x and y rotations are not separable;
    /// the whole residual rotation is reported in `y`, with `x = 0` and `z = ±π/2`.
    ///
    /// Away from the poles the result only inverts [`set_rotation()`](Matrix3::set_rotation)
    /// exactly when the original `y` or `z` angle is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use remath::core::prelude::*;
    ///
    /// let m = Matrix3::rotation(0.3, 0.0, 0.5);
    /// assert!(m.eulers().almost_eq(Vec3::new(0.3, 0.0, 0.5)));
    /// ```
    pub fn eulers(&self) -> Vec3 {
        let d = &self.data;
        if d[1].abs() > GIMBAL_LOCK_THRESHOLD {
            debug!("Matrix3: gimbal lock in eulers(): m[1] = {}", d[1]);
            let z = std::f32::consts::FRAC_PI_2.copysign(d[1]);
            Vec3::new(0.0, d[6].atan2(d[8]), z)
        } else {
            Vec3::new((-d[7]).atan2(d[4]), (-d[2]).atan2(d[0]), d[1].asin())
        }
    }

    /// Applies the rotation to `v` as a row vector (`v * M`).
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let d = &self.data;
        Vec3 {
            x: v.x * d[0] + v.y * d[3] + v.z * d[6],
            y: v.x * d[1] + v.y * d[4] + v.z * d[7],
            z: v.x * d[2] + v.y * d[5] + v.z * d[8],
        }
    }
    /// Applies the transpose, which undoes [`rotate()`](Matrix3::rotate) for a pure rotation.
    pub fn inverse_rotate(&self, v: Vec3) -> Vec3 {
        let d = &self.data;
        Vec3 {
            x: v.x * d[0] + v.y * d[1] + v.z * d[2],
            y: v.x * d[3] + v.y * d[4] + v.z * d[5],
            z: v.x * d[6] + v.y * d[7] + v.z * d[8],
        }
    }

    /// Elementwise comparison with tolerance [`EPSILON`](crate::core::config::EPSILON).
    #[must_use]
    pub fn almost_eq(&self, rhs: Matrix3) -> bool {
        self.data
            .iter()
            .zip(rhs.data.iter())
            .all(|(a, b)| (a - b).abs() < EPSILON)
    }

    #[must_use]
    pub fn as_array(&self) -> &[f32; 9] {
        &self.data
    }
    pub fn as_array_mut(&mut self) -> &mut [f32; 9] {
        &mut self.data
    }
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Matrix3::identity()
    }
}

/// Takes the upper-left 3x3 block; translation is dropped.
impl From<Matrix4> for Matrix3 {
    fn from(value: Matrix4) -> Self {
        let m = value.as_array();
        Matrix3 {
            data: [m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10]],
        }
    }
}

impl From<[f32; 9]> for Matrix3 {
    fn from(value: [f32; 9]) -> Self {
        Matrix3::from_array(value)
    }
}

impl Index<usize> for Matrix3 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        if cfg!(debug_assertions) {
            check_lt!(index, 9);
        }
        &self.data[index]
    }
}
impl IndexMut<usize> for Matrix3 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if cfg!(debug_assertions) {
            check_lt!(index, 9);
        }
        &mut self.data[index]
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mat3[[{}]]",
            self.data.chunks(3).map(|row| row.iter().join(", ")).join("], [")
        )
    }
}
