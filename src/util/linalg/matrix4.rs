use crate::core::prelude::*;

use num_traits::One;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Index, IndexMut, Mul, MulAssign},
};

/// A 4x4 affine transform in the column-major layout OpenGL expects:
/// ```text
/// | 0  4  8 12 |
/// | 1  5  9 13 |
/// | 2  6 10 14 |
/// | 3  7 11 15 |
/// ```
///
/// The rotation block is stored in elements 0-2, 4-6 and 8-10 (in the same order as a
/// [`Matrix3`]), the translation in 12, 13 and 14, and scale along the diagonal 0, 5, 10.
/// The last row is assumed to be `0 0 0 1`; multiplication does not compute it.
///
/// # Examples
///
/// ```
/// use remath::core::prelude::*;
///
/// let mut m = Matrix4::identity();
/// m.set_translation(1.0, 2.0, 3.0);
/// assert_eq!(Vec3::zero() * m, Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(m.as_slice()[12..15], [1.0, 2.0, 3.0]);
/// ```
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
pub struct Matrix4 {
    data: [f32; 16],
}

impl Matrix4 {
    pub fn identity() -> Matrix4 {
        let mut data = [0.0; 16];
        data[0] = 1.0;
        data[5] = 1.0;
        data[10] = 1.0;
        data[15] = 1.0;
        Matrix4 { data }
    }
    pub fn from_array(data: [f32; 16]) -> Matrix4 {
        Matrix4 { data }
    }

    pub fn load_identity(&mut self) {
        *self = Matrix4::identity();
    }
    /// Overwrites all sixteen elements; `None` loads the identity.
    pub fn set(&mut self, data: Option<[f32; 16]>) {
        *self = data.map_or_else(Matrix4::identity, Matrix4::from_array);
    }
    /// # Errors
    /// Fails if `values` does not hold exactly sixteen elements; the matrix is left unchanged.
    pub fn set_from_slice(&mut self, values: &[f32]) -> Result<()> {
        *self = Matrix4::try_from(values)?;
        Ok(())
    }

    /// Writes the rotation for XYZ euler angles (radians) into the rotation block. Translation
    /// and the last row are left as they are.
    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        let (sx, cx) = x.sin_cos();
        let (sy, cy) = y.sin_cos();
        let (sz, cz) = z.sin_cos();
        let sxsy = sx * sy;
        let cxsy = cx * sy;

        let d = &mut self.data;
        d[0] = cy * cz;
        d[1] = cy * sz;
        d[2] = -sy;

        d[4] = sxsy * cz - cx * sz;
        d[5] = sxsy * sz + cx * cz;
        d[6] = sx * cy;

        d[8] = cxsy * cz + sx * sz;
        d[9] = cxsy * sz - sx * cz;
        d[10] = cx * cy;
    }
    pub fn set_rotation_vec(&mut self, eulers: Vec3) {
        self.set_rotation(eulers.x, eulers.y, eulers.z);
    }

    pub fn set_translation(&mut self, x: f32, y: f32, z: f32) {
        self.data[12] = x;
        self.data[13] = y;
        self.data[14] = z;
    }
    pub fn set_translation_vec(&mut self, t: Vec3) {
        self.set_translation(t.x, t.y, t.z);
    }
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Overwrites the diagonal elements 0, 5 and 10. Any rotation stored there is lost.
    pub fn set_scale(&mut self, x: f32, y: f32, z: f32) {
        self.data[0] = x;
        self.data[5] = y;
        self.data[10] = z;
    }
    pub fn set_scale_vec(&mut self, s: Vec3) {
        self.set_scale(s.x, s.y, s.z);
    }
    pub fn set_uniform_scale(&mut self, s: f32) {
        self.set_scale(s, s, s);
    }
    /// Returns `1 / m[0]`, the reciprocal of the x scale.
    ///
    /// This reads a uniform scale back with the inverse convention: after
    /// `set_uniform_scale(2.0)` this returns `0.5`.
    #[must_use]
    pub fn scale_factor(&self) -> f32 {
        if self.data[0] == 0.0 {
            warn!("Matrix4: scale_factor() with zero m[0]");
        }
        1.0 / self.data[0]
    }

    /// Extracts XYZ euler angles from the rotation block.
    ///
    /// Uses the same pole handling as [`Matrix3::eulers()`]: when `|m[1]|` exceeds
    /// [`GIMBAL_LOCK_THRESHOLD`](crate::core::config::GIMBAL_LOCK_THRESHOLD), `x = 0`,
    /// `z = ±π/2` and `y = atan2(m[8], m[10])`. Away from the poles it only inverts
    /// [`set_rotation()`](Matrix4::set_rotation) exactly when the original `y` or `z` angle is
    /// zero.
    #[must_use]
    pub fn eulers(&self) -> Vec3 {
        let d = &self.data;
        if d[1].abs() > GIMBAL_LOCK_THRESHOLD {
            debug!("Matrix4: gimbal lock in eulers(): m[1] = {}", d[1]);
            let z = std::f32::consts::FRAC_PI_2.copysign(d[1]);
            Vec3::new(0.0, d[8].atan2(d[10]), z)
        } else {
            Vec3::new((-d[9]).atan2(d[5]), (-d[2]).atan2(d[0]), d[1].asin())
        }
    }

    /// Same as [`translation()`](Matrix4::translation).
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.translation()
    }
    #[must_use]
    pub fn x_axis(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }
    #[must_use]
    pub fn y_axis(&self) -> Vec3 {
        Vec3::new(self.data[4], self.data[5], self.data[6])
    }
    #[must_use]
    pub fn z_axis(&self) -> Vec3 {
        Vec3::new(self.data[8], self.data[9], self.data[10])
    }

    /// Inverts a rotation + translation matrix in place. See [`inverse()`](Matrix4::inverse).
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Returns the inverse of a rotation + translation matrix.
    ///
    /// The rotation block is transposed. The translation is recomputed from the old translation
    /// and cofactors of the rotation block, which does not in general equal `-(t * R^T)`. Scale
    /// and projection matrices are not supported.
    pub fn inverse(&self) -> Matrix4 {
        let d = &self.data;
        let mut rv = self.transposed();
        rv.data[12] = d[12] * (d[5] * d[10] - d[9] * d[6]) - d[13] * (d[4] * d[10] - d[8] * d[6])
            + d[14] * (d[4] * d[9] - d[8] * d[5]);
        rv.data[13] = d[12] * (d[1] * d[10] - d[9] * d[2]) - d[13] * (d[0] * d[10] - d[8] * d[2])
            + d[14] * (d[0] * d[9] - d[8] * d[1]);
        rv.data[14] = d[12] * (d[1] * d[6] - d[5] * d[2]) - d[13] * (d[0] * d[6] - d[4] * d[2])
            + d[14] * (d[0] * d[5] - d[4] * d[1]);
        rv.data[3] = 0.0;
        rv.data[7] = 0.0;
        rv.data[11] = 0.0;
        rv.data[15] = 1.0;
        rv
    }

    pub fn transpose(&mut self) {
        *self = self.transposed();
    }
    pub fn transposed(&self) -> Matrix4 {
        let mut data = [0.0; 16];
        for (i, j) in itertools::iproduct!(0..4, 0..4) {
            data[j * 4 + i] = self.data[i * 4 + j];
        }
        Matrix4 { data }
    }

    /// Applies only the rotation block to `v`.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let d = &self.data;
        Vec3 {
            x: v.x * d[0] + v.y * d[4] + v.z * d[8],
            y: v.x * d[1] + v.y * d[5] + v.z * d[9],
            z: v.x * d[2] + v.y * d[6] + v.z * d[10],
        }
    }
    /// Applies the transpose of the rotation block to `v`.
    pub fn inverse_rotate(&self, v: Vec3) -> Vec3 {
        let d = &self.data;
        Vec3 {
            x: v.x * d[0] + v.y * d[1] + v.z * d[2],
            y: v.x * d[4] + v.y * d[5] + v.z * d[6],
            z: v.x * d[8] + v.y * d[9] + v.z * d[10],
        }
    }
    pub fn translate(&self, v: Vec3) -> Vec3 {
        v + self.translation()
    }
    pub fn inverse_translate(&self, v: Vec3) -> Vec3 {
        v - self.translation()
    }
    /// Multiplies `v` componentwise by the diagonal `(m[0], m[5], m[10])`.
    pub fn scale(&self, v: Vec3) -> Vec3 {
        Vec3 {
            x: v.x * self.data[0],
            y: v.y * self.data[5],
            z: v.z * self.data[10],
        }
    }
    /// Divides `v` componentwise by the diagonal `(m[0], m[5], m[10])`.
    pub fn inverse_scale(&self, v: Vec3) -> Vec3 {
        if self.data[0] == 0.0 || self.data[5] == 0.0 || self.data[10] == 0.0 {
            warn!("Matrix4: inverse_scale() with zero on the diagonal: {}", self);
        }
        Vec3 {
            x: v.x / self.data[0],
            y: v.y / self.data[5],
            z: v.z / self.data[10],
        }
    }

    /// Copies out the rotation block.
    pub fn rotation_matrix(&self) -> Matrix3 {
        Matrix3::from(*self)
    }

    /// Elementwise comparison with tolerance [`EPSILON`](crate::core::config::EPSILON).
    #[must_use]
    pub fn almost_eq(&self, rhs: Matrix4) -> bool {
        self.data
            .iter()
            .zip(rhs.data.iter())
            .all(|(a, b)| (a - b).abs() < EPSILON)
    }

    #[must_use]
    pub fn as_array(&self) -> &[f32; 16] {
        &self.data
    }
    pub fn as_array_mut(&mut self) -> &mut [f32; 16] {
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

impl Default for Matrix4 {
    fn default() -> Self {
        Matrix4::identity()
    }
}

impl One for Matrix4 {
    fn one() -> Self {
        Matrix4::identity()
    }
}

/// Places the rotation into an otherwise identity matrix.
impl From<Matrix3> for Matrix4 {
    fn from(value: Matrix3) -> Self {
        let m = value.as_array();
        let mut rv = Matrix4::identity();
        rv.data[0..3].copy_from_slice(&m[0..3]);
        rv.data[4..7].copy_from_slice(&m[3..6]);
        rv.data[8..11].copy_from_slice(&m[6..9]);
        rv
    }
}

impl From<[f32; 16]> for Matrix4 {
    fn from(value: [f32; 16]) -> Self {
        Matrix4::from_array(value)
    }
}

impl TryFrom<&[f32]> for Matrix4 {
    type Error = anyhow::Error;

    fn try_from(value: &[f32]) -> Result<Self> {
        let data: [f32; 16] = value
            .try_into()
            .map_err(|_| anyhow!("Matrix4: expected 16 elements, got {}", value.len()))?;
        Ok(Matrix4 { data })
    }
}

impl Index<usize> for Matrix4 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        if cfg!(debug_assertions) {
            check_lt!(index, 16);
        }
        &self.data[index]
    }
}
impl IndexMut<usize> for Matrix4 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if cfg!(debug_assertions) {
            check_lt!(index, 16);
        }
        &mut self.data[index]
    }
}

/// Composes two transforms: `v * (a * b)` applies `b` first, then `a`.
impl Mul<Matrix4> for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Self::Output {
        let mut rv = self;
        rv *= rhs;
        rv
    }
}
impl MulAssign<Matrix4> for Matrix4 {
    fn mul_assign(&mut self, rhs: Matrix4) {
        let m1 = &self.data;
        let m2 = &rhs.data;
        let mut data = [0.0; 16];
        for (col, row) in itertools::iproduct!(0..3, 0..4) {
            data[col * 4 + row] = m1[row] * m2[col * 4]
                + m1[4 + row] * m2[col * 4 + 1]
                + m1[8 + row] * m2[col * 4 + 2];
        }
        for row in 0..4 {
            data[12 + row] =
                m1[row] * m2[12] + m1[4 + row] * m2[13] + m1[8 + row] * m2[14] + m1[12 + row];
        }
        self.data = data;
    }
}

/// Treats the quaternion as a 4-component column and multiplies it by the full matrix.
impl Mul<Quaternion> for Matrix4 {
    type Output = Quaternion;

    fn mul(self, q: Quaternion) -> Self::Output {
        let d = &self.data;
        Quaternion {
            x: d[0] * q.x + d[4] * q.y + d[8] * q.z + d[12] * q.w,
            y: d[1] * q.x + d[5] * q.y + d[9] * q.z + d[13] * q.w,
            z: d[2] * q.x + d[6] * q.y + d[10] * q.z + d[14] * q.w,
            w: d[3] * q.x + d[7] * q.y + d[11] * q.z + d[15] * q.w,
        }
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mat4[[{}]]",
            self.data.chunks(4).map(|col| col.iter().join(", ")).join("], [")
        )
    }
}
