use crate::core::prelude::*;

use crate::util::re_float;
use num_traits::Zero;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

/// A 3D vector using 32-bit floating point coordinates.
///
/// Treated as a row vector when transformed: `v * m` applies the [`Matrix4`] `m` to the point
/// `(x, y, z, 1)`.
///
/// # Examples
///
/// ```
/// use remath::core::prelude::*;
///
/// let a = Vec3::unit_x();
/// let b = Vec3::unit_y();
/// assert_eq!(a.cross(b), Vec3::unit_z());
/// assert_eq!(a.dot(b), 0.0);
/// ```
#[derive(
    Default,
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
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }
    #[must_use]
    pub fn zero() -> Vec3 {
        Vec3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
    #[must_use]
    pub fn one() -> Vec3 {
        Vec3::splat(1.0)
    }
    #[must_use]
    pub fn unit_x() -> Vec3 {
        Vec3::new(1.0, 0.0, 0.0)
    }
    #[must_use]
    pub fn unit_y() -> Vec3 {
        Vec3::new(0.0, 1.0, 0.0)
    }
    #[must_use]
    pub fn unit_z() -> Vec3 {
        Vec3::new(0.0, 0.0, 1.0)
    }
    #[must_use]
    pub fn splat(v: f32) -> Vec3 {
        Vec3 { x: v, y: v, z: v }
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }
    pub fn set_splat(&mut self, value: f32) {
        *self = Vec3::splat(value);
    }
    pub fn set_from_array(&mut self, values: [f32; 3]) {
        *self = values.into();
    }
    /// Sets the components from a raw slice, which must hold exactly three values.
    ///
    /// # Errors
    /// Fails if `values.len() != 3`; the vector is left unchanged.
    pub fn set_from_slice(&mut self, values: &[f32]) -> Result<()> {
        *self = Vec3::try_from(values)?;
        Ok(())
    }

    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }
    #[must_use]
    pub fn dist(&self, other: Vec3) -> f32 {
        (*self - other).len()
    }
    #[must_use]
    pub fn dist_squared(&self, other: Vec3) -> f32 {
        (*self - other).len_squared()
    }

    /// Checks whether all three component ratios `x / other.x`, `y / other.y`, `z / other.z` are
    /// equal. Zero components in `other` are not guarded against, see
    /// [`Vec2::is_parallel()`](crate::util::linalg::Vec2::is_parallel).
    #[must_use]
    pub fn is_parallel(&self, other: Vec3) -> bool {
        if other.x == 0.0 || other.y == 0.0 || other.z == 0.0 {
            warn!("Vec3: is_parallel() divides by zero: {} vs. {}", self, other);
        }
        let rx = self.x / other.x;
        rx == self.y / other.y && rx == self.z / other.z
    }

    pub fn normalize(&mut self) {
        *self = self.normed();
    }
    /// Returns a unit vector in the same direction, or the zero vector if the length is zero.
    #[must_use]
    pub fn normed(&self) -> Vec3 {
        let len = self.len();
        let mut rv = if len == 0.0 { Vec3::zero() } else { *self / len };
        rv.x = re_float::force_positive_zero(rv.x);
        rv.y = re_float::force_positive_zero(rv.y);
        rv.z = re_float::force_positive_zero(rv.z);
        rv
    }

    pub fn negate(&mut self) {
        *self = -*self;
    }

    #[must_use]
    pub fn dot(&self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Linearly interpolates towards `to`. `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(&self, to: Vec3, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        Vec3 {
            x: scalar::lerp(self.x, to.x, t),
            y: scalar::lerp(self.y, to.y, t),
            z: scalar::lerp(self.z, to.z, t),
        }
    }

    #[must_use]
    pub fn almost_eq(&self, rhs: Vec3) -> bool {
        (*self - rhs).len() < EPSILON
    }

    #[must_use]
    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }
    pub fn as_array_mut(&mut self) -> &mut [f32; 3] {
        bytemuck::cast_mut(self)
    }
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        self.as_array()
    }
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        self.as_array_mut()
    }
}

impl Zero for Vec3 {
    fn zero() -> Self {
        Vec3::zero()
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Vec3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl TryFrom<&[f32]> for Vec3 {
    type Error = anyhow::Error;

    fn try_from(value: &[f32]) -> Result<Self> {
        let array: [f32; 3] = value
            .try_into()
            .map_err(|_| anyhow!("Vec3: expected 3 components, got {}", value.len()))?;
        Ok(array.into())
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(f, "vec({:.p$}, {:.p$}, {:.p$})", self.x, self.y, self.z)
        } else {
            write!(f, "vec({}, {}, {})", self.x, self.y, self.z)
        }
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        if cfg!(debug_assertions) {
            check_lt!(index, 3);
        }
        &self.as_array()[index]
    }
}
impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if cfg!(debug_assertions) {
            check_lt!(index, 3);
        }
        &mut self.as_array_mut()[index]
    }
}

impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign<Vec3> for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}
impl AddAssign<f32> for Vec3 {
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + Vec3::splat(rhs);
    }
}

impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign<Vec3> for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}
impl SubAssign<f32> for Vec3 {
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - Vec3::splat(rhs);
    }
}

impl Sum<Vec3> for Vec3 {
    fn sum<I: Iterator<Item = Vec3>>(iter: I) -> Self {
        iter.fold(Vec3::zero(), Vec3::add)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self * rhs.x,
            y: self * rhs.y,
            z: self * rhs.z,
        }
    }
}
impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Transforms the point `(x, y, z, 1)` by the matrix, including its translation.
impl Mul<Matrix4> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Matrix4) -> Self::Output {
        let m = rhs.as_array();
        Vec3 {
            x: self.x * m[0] + self.y * m[4] + self.z * m[8] + m[12],
            y: self.x * m[1] + self.y * m[5] + self.z * m[9] + m[13],
            z: self.x * m[2] + self.y * m[6] + self.z * m[10] + m[14],
        }
    }
}
impl MulAssign<Matrix4> for Vec3 {
    fn mul_assign(&mut self, rhs: Matrix4) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        Vec3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}
impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    // ==================== Vec3 Basic Operations ====================

    #[test]
    fn vec3_length() {
        let v = Vec3::new(2.0, 3.0, 4.0);
        assert_eq!(v.len(), 5.385_164_7);
        assert_eq!(v.len_squared(), 29.0);
        assert_eq!(v.dot(v), v.len_squared());
    }

    #[test]
    fn vec3_is_parallel() {
        let v = Vec3::new(2.0, 3.0, 4.0);
        assert!(v.is_parallel(Vec3::new(4.0, 6.0, 8.0)));
        assert!(v.is_parallel(Vec3::new(-1.0, -1.5, -2.0)));
        assert!(!v.is_parallel(Vec3::new(3.0, 4.5, 0.1)));
        assert!(!Vec3::unit_x().is_parallel(Vec3::unit_x() * 2.0));
    }

    #[test]
    fn vec3_normalize() {
        let mut v = Vec3::new(2.0, 3.0, 4.0);
        v.normalize();
        assert_eq!(v.x, 0.371_390_67);
        assert_eq!(v.y, 0.557_086_05);
        assert_eq!(v.z, 0.742_781_34);
        assert_eq!(Vec3::zero().normed(), Vec3::zero());
        assert!(Vec3::new(-0.0, 0.0, -0.0).normed().x.is_sign_positive());
    }

    #[test]
    fn vec3_cross_and_dot() {
        assert_eq!(Vec3::unit_x().cross(Vec3::unit_y()), Vec3::unit_z());
        assert_eq!(Vec3::unit_y().cross(Vec3::unit_z()), Vec3::unit_x());
        assert_eq!(Vec3::unit_z().cross(Vec3::unit_x()), Vec3::unit_y());
        assert_eq!(Vec3::unit_y().cross(Vec3::unit_x()), -Vec3::unit_z());

        let v = Vec3::new(2.0, 3.0, 4.0);
        assert_eq!(v.cross(v), Vec3::zero());
        assert_eq!(v.cross(Vec3::new(5.0, 6.0, 7.0)), Vec3::new(-3.0, 6.0, -3.0));
        assert_eq!(v.dot(Vec3::new(5.0, 6.0, 7.0)), 56.0);
    }

    #[test]
    fn vec3_dist() {
        let v = Vec3::new(2.0, 3.0, 4.0);
        assert_eq!(v.dist(Vec3::new(3.0, 4.5, 0.1)), 4.296_51);
        assert_eq!(v.dist_squared(Vec3::new(2.0, 6.0, 0.0)), 25.0);
        assert_eq!(v.dist(v), 0.0);
    }

    #[test]
    fn vec3_set_overloads() {
        let mut v = Vec3::zero();
        v.set(1.0, 2.0, 3.0);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        v.set_splat(-1.0);
        assert_eq!(v, Vec3::splat(-1.0));
        v.set_from_array([4.0, 5.0, 6.0]);
        assert_eq!(v.as_array(), &[4.0, 5.0, 6.0]);
        assert!(v.set_from_slice(&[1.0, 2.0]).is_err());
        assert_eq!(v, Vec3::new(4.0, 5.0, 6.0));
        v.set_from_slice(&[7.0, 8.0, 9.0]).unwrap();
        assert_eq!(v, Vec3::new(7.0, 8.0, 9.0));
    }

    // ==================== Vec3 Operators ====================

    #[test]
    fn vec3_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-1.0, 0.5, 2.0);
        assert_eq!(a + b, Vec3::new(0.0, 2.5, 5.0));
        assert_eq!(a - b, Vec3::new(2.0, 1.5, 1.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(-(-a), a);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c += 1.0;
        assert_eq!(c, Vec3::new(0.0, 1.5, 3.0));
        c -= 0.5;
        assert_eq!(c, Vec3::new(-0.5, 1.0, 2.5));
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Vec3::new(-0.25, 0.5, 1.25));
        c.negate();
        assert_eq!(c, Vec3::new(0.25, -0.5, -1.25));
    }

    #[test]
    fn vec3_times_matrix() {
        let mut m = Matrix4::identity();
        m.set_translation(1.0, 2.0, 3.0);
        let v = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(v * m, Vec3::new(2.0, 3.0, 4.0));

        m.set_uniform_scale(2.0);
        let mut w = v;
        w *= m;
        assert_eq!(w, Vec3::new(3.0, 4.0, 5.0));

        let mut r = Matrix4::identity();
        r.set_rotation(0.0, 0.0, std::f32::consts::FRAC_PI_2);
        assert!((Vec3::unit_x() * r).almost_eq(Vec3::unit_y()));
    }

    #[test]
    fn vec3_array_access() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        v[1] = 10.0;
        assert_eq!(v.y, 10.0);
        v.as_mut_slice()[2] = -1.0;
        assert_eq!(v.as_slice(), &[1.0, 10.0, -1.0]);
        let arr: [f32; 3] = v.into();
        assert_eq!(Vec3::from(arr), v);
    }

    #[test]
    #[should_panic]
    fn vec3_index_out_of_range() {
        let mut v = Vec3::zero();
        v[3] = 1.0;
    }

    #[test]
    fn vec3_sum_and_lerp() {
        let total: Vec3 = (0..4).map(|i| Vec3::splat(i as f32)).sum();
        assert_eq!(total, Vec3::splat(6.0));
        let a = Vec3::zero();
        let b = Vec3::new(2.0, 4.0, 8.0);
        assert_eq!(a.lerp(b, 0.25), Vec3::new(0.5, 1.0, 2.0));
        assert_eq!(a.lerp(b, 1.5), b);
    }

    #[test]
    fn vec3_display() {
        assert_eq!(format!("{}", Vec3::new(1.0, -2.5, 3.0)), "vec(1, -2.5, 3)");
        assert_eq!(
            format!("{:.1}", Vec3::new(1.0, -2.5, 3.3)),
            "vec(1.0, -2.5, 3.3)"
        );
    }

    #[test]
    fn vec3_serde_round_trip() {
        let v = Vec3::new(1.5, -0.0, 1e-7);
        let config = bincode::config::standard();
        let bytes = bincode::serde::encode_to_vec(v, config).unwrap();
        let (decoded, _): (Vec3, usize) =
            bincode::serde::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(decoded, v);
        assert!(decoded.y.is_sign_negative());
    }

    // ==================== Vec3 Properties ====================

    #[test]
    fn vec3_random_normalization() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let v = Vec3::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            );
            if v.len() < 1e-3 {
                continue;
            }
            let n = v.normed();
            assert!((n.len() - 1.0).abs() < EPSILON, "{v} -> {n}");
            assert!(n.cross(v).len() < 1e-3 * v.len(), "{v} -> {n}");
            assert!((n.normed() - n).len() < EPSILON);
        }
    }
}
