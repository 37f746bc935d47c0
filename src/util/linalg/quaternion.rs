use crate::core::prelude::*;

use num_traits::One;
use std::{
    fmt,
    fmt::Formatter,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

/// A rotation quaternion `(x, y, z, w)`, with `w` the scalar part.
///
/// Most operations assume unit length but do not enforce it; call
/// [`normalize()`](Quaternion::normalize) after accumulating products. The product `a * b`
/// corresponds to the matrix product `a.to_matrix() * b.to_matrix()`.
///
/// # Examples
///
/// ```
/// use remath::core::prelude::*;
///
/// let q = Quaternion::from_eulers(Vec3::new(0.3, 0.2, 0.5));
/// let mut m = Matrix4::identity();
/// m.set_rotation(0.3, 0.2, 0.5);
/// assert!(q.to_matrix().almost_eq(m));
/// assert!(q.eulers().almost_eq(Vec3::new(0.3, 0.2, 0.5)));
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
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Quaternion {
        Quaternion { x, y, z, w }
    }
    /// The identity rotation `(0, 0, 0, 1)`.
    #[must_use]
    pub fn identity() -> Quaternion {
        Quaternion::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Creates a quaternion from its vector part, computing `w` with
    /// [`compute_w()`](Quaternion::compute_w).
    ///
    /// # Examples
    ///
    /// ```
    /// use remath::core::prelude::*;
    /// assert_eq!(Quaternion::from_xyz(0.0, 0.0, 0.0), Quaternion::identity());
    /// assert_eq!(Quaternion::from_xyz(0.0, 1.0, 0.0).w, -0.0);
    /// ```
    #[must_use]
    pub fn from_xyz(x: f32, y: f32, z: f32) -> Quaternion {
        let mut rv = Quaternion::new(x, y, z, 0.0);
        rv.compute_w();
        rv
    }
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Quaternion {
        Quaternion::from_xyz(v.x, v.y, v.z)
    }

    /// Builds the rotation for XYZ euler angles `(roll, pitch, yaw)` in radians. Produces the
    /// same rotation as [`Matrix4::set_rotation()`].
    #[must_use]
    pub fn from_eulers(eulers: Vec3) -> Quaternion {
        let (sr, cr) = (eulers.x / 2.0).sin_cos();
        let (sp, cp) = (eulers.y / 2.0).sin_cos();
        let (sy, cy) = (eulers.z / 2.0).sin_cos();
        Quaternion {
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
            w: cr * cp * cy + sr * sp * sy,
        }
    }
    #[must_use]
    pub fn from_rotation_x(angle: f32) -> Quaternion {
        let (s, c) = (angle * 0.5).sin_cos();
        Quaternion::new(s, 0.0, 0.0, c)
    }
    #[must_use]
    pub fn from_rotation_y(angle: f32) -> Quaternion {
        let (s, c) = (angle * 0.5).sin_cos();
        Quaternion::new(0.0, s, 0.0, c)
    }
    #[must_use]
    pub fn from_rotation_z(angle: f32) -> Quaternion {
        let (s, c) = (angle * 0.5).sin_cos();
        Quaternion::new(0.0, 0.0, s, c)
    }

    /// Recovers the rotation from the rotation block of `m`, which must be a pure rotation.
    ///
    /// Inverts [`to_matrix()`](Quaternion::to_matrix) up to sign: the result is `q` or `-q`,
    /// which describe the same rotation. The branch is chosen by the trace, falling back to the
    /// largest diagonal element to keep the divisor away from zero.
    #[must_use]
    pub fn from_rotation_matrix(m: &Matrix4) -> Quaternion {
        let m = m.as_array();
        let trace = m[0] + m[5] + m[10];
        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Quaternion {
                x: (m[6] - m[9]) / s,
                y: (m[8] - m[2]) / s,
                z: (m[1] - m[4]) / s,
                w: 0.25 * s,
            }
        } else if m[0] > m[5] && m[0] > m[10] {
            let s = (1.0 + m[0] - m[5] - m[10]).sqrt() * 2.0;
            Quaternion {
                x: 0.25 * s,
                y: (m[4] + m[1]) / s,
                z: (m[8] + m[2]) / s,
                w: (m[6] - m[9]) / s,
            }
        } else if m[5] > m[10] {
            let s = (1.0 + m[5] - m[0] - m[10]).sqrt() * 2.0;
            Quaternion {
                x: (m[4] + m[1]) / s,
                y: 0.25 * s,
                z: (m[9] + m[6]) / s,
                w: (m[8] - m[2]) / s,
            }
        } else {
            let s = (1.0 + m[10] - m[0] - m[5]).sqrt() * 2.0;
            Quaternion {
                x: (m[8] + m[2]) / s,
                y: (m[9] + m[6]) / s,
                z: 0.25 * s,
                w: (m[1] - m[4]) / s,
            }
        }
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        *self = Quaternion::new(x, y, z, w);
    }
    pub fn set_from_array(&mut self, values: [f32; 4]) {
        *self = values.into();
    }
    /// # Errors
    /// Fails if `values.len() != 4`; the quaternion is left unchanged.
    pub fn set_from_slice(&mut self, values: &[f32]) -> Result<()> {
        *self = Quaternion::try_from(values)?;
        Ok(())
    }
    /// Sets the vector part and recomputes `w`.
    pub fn set_xyz(&mut self, x: f32, y: f32, z: f32) {
        *self = Quaternion::from_xyz(x, y, z);
    }
    pub fn set_vec3(&mut self, v: Vec3) {
        *self = Quaternion::from_vec3(v);
    }

    /// Derives `w` from the vector part so that the quaternion has unit length.
    ///
    /// The negative root is taken. A zero vector part gives the identity (`w = 1`), and a vector
    /// part longer than one gives `w = 0`.
    pub fn compute_w(&mut self) {
        if self.x == 0.0 && self.y == 0.0 && self.z == 0.0 {
            self.w = 1.0;
        } else {
            let t = 1.0 - (self.x * self.x + self.y * self.y + self.z * self.z);
            self.w = if t < 0.0 { 0.0 } else { -t.sqrt() };
        }
    }

    /// Converts to XYZ euler angles; requires a unit quaternion.
    #[must_use]
    pub fn eulers(&self) -> Vec3 {
        let Quaternion { x, y, z, w } = *self;
        let m11 = w * w + x * x - y * y - z * z;
        let m21 = 2.0 * (x * y + z * w);
        let m31 = (2.0 * (z * x - y * w)).clamp(-1.0, 1.0);
        let m32 = 2.0 * (z * y + x * w);
        let m33 = w * w - x * x - y * y + z * z;
        Vec3::new(m32.atan2(m33), (-m31).asin(), m21.atan2(m11))
    }

    /// Converts to a rotation matrix with no translation; requires a unit quaternion.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix4 {
        let Quaternion { x, y, z, w } = *self;
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, yy, zz) = (x * x2, y * y2, z * z2);
        let (xy, yz, xz) = (x * y2, y * z2, x * z2);
        let (xw, yw, zw) = (w * x2, w * y2, w * z2);

        let mut rv = Matrix4::identity();
        rv[0] = 1.0 - (yy + zz);
        rv[1] = xy + zw;
        rv[2] = xz - yw;

        rv[4] = xy - zw;
        rv[5] = 1.0 - (xx + zz);
        rv[6] = yz + xw;

        rv[8] = xz + yw;
        rv[9] = yz - xw;
        rv[10] = 1.0 - (xx + yy);
        rv
    }

    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }
    /// # Examples
    /// ```
    /// use remath::core::prelude::*;
    /// assert_eq!(Quaternion::new(2.0, 3.0, 4.0, 5.0).len(), 7.348_469_3);
    /// ```
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Scales to unit length in place. A zero quaternion becomes the identity.
    pub fn normalize(&mut self) {
        let len = self.len();
        if len == 0.0 {
            warn!("Quaternion: normalize() with zero length, using identity");
            *self = Quaternion::identity();
        } else {
            *self /= len;
        }
    }
    #[must_use]
    pub fn normed(&self) -> Quaternion {
        let mut rv = *self;
        rv.normalize();
        rv
    }

    pub fn negate(&mut self) {
        *self = -*self;
    }

    #[must_use]
    pub fn dot(&self, other: Quaternion) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// If the two rotations are within [`SLERP_THRESHOLD`](crate::core::config::SLERP_THRESHOLD)
    /// of each other the result is the normalised [`lerp()`](Quaternion::lerp) instead, which
    /// avoids dividing by a vanishing `sin(angle)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use remath::core::prelude::*;
    ///
    /// let a = Quaternion::identity();
    /// let b = Quaternion::from_rotation_z(1.0);
    /// assert!(a.slerp(b, 0.5).almost_eq(Quaternion::from_rotation_z(0.5)));
    /// ```
    #[must_use]
    pub fn slerp(&self, other: Quaternion, t: f32) -> Quaternion {
        let first = *self;
        let mut second = other;
        let mut dot = first.dot(second);
        if dot < 0.0 {
            second.negate();
            dot = -dot;
        }
        let dot = dot.clamp(-1.0, 1.0);

        if 1.0 - dot > SLERP_THRESHOLD {
            let angle = dot.acos();
            let rv = (first * (angle * (1.0 - t)).sin() + second * (angle * t).sin()) / angle.sin();
            rv.normed()
        } else {
            first.lerp(second, t)
        }
    }

    /// Linear interpolation followed by normalisation. `t` is not clamped.
    #[must_use]
    pub fn lerp(&self, other: Quaternion, t: f32) -> Quaternion {
        (*self + (other - *self) * t).normed()
    }

    /// Checks whether the length of the difference is below
    /// [`EPSILON`](crate::core::config::EPSILON). Note `q` and `-q` are not considered equal.
    #[must_use]
    pub fn almost_eq(&self, rhs: Quaternion) -> bool {
        (*self - rhs).len() < EPSILON
    }

    #[must_use]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }
    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
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

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::identity()
    }
}

impl One for Quaternion {
    fn one() -> Self {
        Quaternion::identity()
    }
}

impl From<Matrix4> for Quaternion {
    fn from(value: Matrix4) -> Self {
        Quaternion::from_rotation_matrix(&value)
    }
}

impl From<[f32; 4]> for Quaternion {
    fn from(value: [f32; 4]) -> Self {
        Quaternion::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Quaternion> for [f32; 4] {
    fn from(value: Quaternion) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

impl TryFrom<&[f32]> for Quaternion {
    type Error = anyhow::Error;

    fn try_from(value: &[f32]) -> Result<Self> {
        let array: [f32; 4] = value
            .try_into()
            .map_err(|_| anyhow!("Quaternion: expected 4 components, got {}", value.len()))?;
        Ok(array.into())
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(
                f,
                "quat({:.p$}, {:.p$}, {:.p$}, {:.p$})",
                self.x, self.y, self.z, self.w
            )
        } else {
            write!(f, "quat({}, {}, {}, {})", self.x, self.y, self.z, self.w)
        }
    }
}

impl Index<usize> for Quaternion {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        if cfg!(debug_assertions) {
            check_lt!(index, 4);
        }
        &self.as_array()[index]
    }
}
impl IndexMut<usize> for Quaternion {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if cfg!(debug_assertions) {
            check_lt!(index, 4);
        }
        &mut self.as_array_mut()[index]
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Quaternion;

    fn add(self, rhs: Quaternion) -> Self::Output {
        Quaternion {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}
impl AddAssign<Quaternion> for Quaternion {
    fn add_assign(&mut self, rhs: Quaternion) {
        *self = *self + rhs;
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Quaternion;

    fn sub(self, rhs: Quaternion) -> Self::Output {
        Quaternion {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}
impl SubAssign<Quaternion> for Quaternion {
    fn sub_assign(&mut self, rhs: Quaternion) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: f32) -> Self::Output {
        Quaternion {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}
impl Mul<Quaternion> for f32 {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Quaternion {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Quaternion {
    type Output = Quaternion;

    fn div(self, rhs: f32) -> Self::Output {
        Quaternion {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}
impl DivAssign<f32> for Quaternion {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// Hamilton product.
impl Mul<Quaternion> for Quaternion {
    type Output = Quaternion;

    fn mul(self, o: Quaternion) -> Self::Output {
        Quaternion {
            x: self.w * o.x + o.w * self.x + (self.y * o.z - self.z * o.y),
            y: self.w * o.y + o.w * self.y + (self.z * o.x - self.x * o.z),
            z: self.w * o.z + o.w * self.z + (self.x * o.y - self.y * o.x),
            w: self.w * o.w - (self.x * o.x + self.y * o.y + self.z * o.z),
        }
    }
}
impl MulAssign<Quaternion> for Quaternion {
    fn mul_assign(&mut self, rhs: Quaternion) {
        *self = *self * rhs;
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Self::Output {
        Quaternion {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f32::consts::{FRAC_PI_2, PI};

    fn random_unit(rng: &mut StdRng) -> Quaternion {
        loop {
            let q = Quaternion::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if q.len() > 0.1 {
                return q.normed();
            }
        }
    }

    fn same_rotation(a: Quaternion, b: Quaternion) -> bool {
        a.almost_eq(b) || a.almost_eq(-b)
    }

    // ==================== Quaternion Construction ====================

    #[test]
    fn quaternion_identity() {
        let q = Quaternion::identity();
        assert_eq!(q, Quaternion::default());
        assert_eq!(q, Quaternion::one());
        assert_eq!(q.as_array(), &[0.0, 0.0, 0.0, 1.0]);
        assert_eq!(q.to_matrix(), Matrix4::identity());
        assert_eq!(q.eulers(), Vec3::zero());
        assert_eq!(q * q, q);
    }

    #[test]
    fn quaternion_set_overloads() {
        let mut q = Quaternion::identity();
        q.set(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
        q.set_from_array([4.0, 3.0, 2.0, 1.0]);
        assert_eq!(q.as_slice(), &[4.0, 3.0, 2.0, 1.0]);
        q.set_from_slice(&[0.5, 0.5, 0.5, 0.5]).unwrap();
        assert_eq!(q, Quaternion::new(0.5, 0.5, 0.5, 0.5));
        assert!(q.set_from_slice(&[1.0; 5]).is_err());
        assert_eq!(q, Quaternion::new(0.5, 0.5, 0.5, 0.5));
        let arr: [f32; 4] = q.into();
        assert_eq!(arr, [0.5; 4]);
    }

    #[test]
    fn quaternion_compute_w() {
        let q = Quaternion::from_xyz(0.0, 0.0, 0.0);
        assert_eq!(q, Quaternion::identity());

        let q = Quaternion::from_xyz(0.5, 0.5, 0.5);
        assert_eq!(q.w, -0.5);
        assert!((q.len() - 1.0).abs() < EPSILON);

        // Vector part too long: clamped to w = 0.
        let q = Quaternion::from_vec3(Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(q.w, 0.0);

        let mut q = Quaternion::identity();
        q.set_xyz(0.0, 0.0, 1.0);
        assert_eq!(q.w, 0.0);
        q.set_vec3(Vec3::zero());
        assert_eq!(q.w, 1.0);
        q.x = 0.5;
        q.compute_w();
        assert!((q.w + 0.866_025_4).abs() < EPSILON);
    }

    #[test]
    fn quaternion_single_axis() {
        let angle = 0.8;
        let mut m = Matrix4::identity();
        m.set_rotation(angle, 0.0, 0.0);
        assert!(Quaternion::from_rotation_x(angle).to_matrix().almost_eq(m));
        assert!(Quaternion::from_rotation_x(angle)
            .almost_eq(Quaternion::from_eulers(Vec3::new(angle, 0.0, 0.0))));

        m.set_rotation(0.0, angle, 0.0);
        assert!(Quaternion::from_rotation_y(angle).to_matrix().almost_eq(m));

        m.set_rotation(0.0, 0.0, angle);
        assert!(Quaternion::from_rotation_z(angle).to_matrix().almost_eq(m));
        assert!(Quaternion::from_rotation_z(PI).almost_eq(Quaternion::new(0.0, 0.0, 1.0, 0.0)));
    }

    // ==================== Quaternion Conversions ====================

    #[test]
    fn quaternion_eulers_round_trip() {
        for eulers in [
            Vec3::new(0.3, 0.2, 0.5),
            Vec3::new(-1.0, 0.7, 2.0),
            Vec3::new(0.0, -1.2, 0.0),
            Vec3::new(3.0, 0.0, -3.0),
        ] {
            let q = Quaternion::from_eulers(eulers);
            assert!((q.len() - 1.0).abs() < EPSILON);
            let back = q.eulers();
            assert!((back - eulers).len() < 1e-4, "{eulers} -> {back}");

            let mut m = Matrix4::identity();
            m.set_rotation_vec(eulers);
            assert!(q.to_matrix().almost_eq(m), "{eulers}");
        }
    }

    #[test]
    fn quaternion_eulers_clamps_at_pole() {
        let q = Quaternion::from_rotation_y(FRAC_PI_2);
        let e = q.eulers();
        assert!(e.y.is_finite());
        assert!((e.y - FRAC_PI_2).abs() < 1e-3);
    }

    #[test]
    fn quaternion_from_rotation_matrix() {
        for q in [
            Quaternion::identity(),
            Quaternion::new(1.0, 0.0, 0.0, 0.0),
            Quaternion::new(0.0, 1.0, 0.0, 0.0),
            Quaternion::new(0.0, 0.0, 1.0, 0.0),
            Quaternion::from_eulers(Vec3::new(0.3, 0.2, 0.5)),
            Quaternion::from_rotation_x(3.0),
        ] {
            assert!(same_rotation(Quaternion::from(q.to_matrix()), q), "{q}");
        }

        let mut m = Matrix4::identity();
        m.set_rotation(0.1, -0.2, 0.3);
        m.set_translation(9.0, 9.0, 9.0);
        let q = Quaternion::from_rotation_matrix(&m);
        assert!(same_rotation(q, Quaternion::from_eulers(Vec3::new(0.1, -0.2, 0.3))));
    }

    // ==================== Quaternion Arithmetic ====================

    #[test]
    fn quaternion_length_and_normalize() {
        let q = Quaternion::new(2.0, 3.0, 4.0, 5.0);
        assert_eq!(q.len(), 7.348_469_3);
        assert_eq!(q.len_squared(), 54.0);
        let n = q.normed();
        assert!((n.len() - 1.0).abs() < EPSILON);
        assert!(n.normed().almost_eq(n));

        let mut z = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        z.normalize();
        assert_eq!(z, Quaternion::identity());
    }

    #[test]
    fn quaternion_operators() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(0.5, -1.0, 0.0, 2.0);
        assert_eq!(a + b, Quaternion::new(1.5, 1.0, 3.0, 6.0));
        assert_eq!(a - b, Quaternion::new(0.5, 3.0, 3.0, 2.0));
        assert_eq!(a * 2.0, Quaternion::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Quaternion::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(-a, Quaternion::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(a.dot(b), 6.5);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= 4.0;
        c /= 2.0;
        assert_eq!(c, Quaternion::new(1.0, -2.0, 0.0, 4.0));
        c.negate();
        assert_eq!(c, Quaternion::new(-1.0, 2.0, -0.0, -4.0));
    }

    #[test]
    fn quaternion_hamilton_product() {
        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, Quaternion::new(0.0, 0.0, 0.0, -1.0));

        let a = Quaternion::from_rotation_z(0.4);
        let b = Quaternion::from_rotation_x(0.3);
        assert!((a * b).to_matrix().almost_eq(a.to_matrix() * b.to_matrix()));
        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
        assert!((Quaternion::from_rotation_x(0.3) * Quaternion::from_rotation_x(0.5))
            .almost_eq(Quaternion::from_rotation_x(0.8)));
    }

    // ==================== Quaternion Interpolation ====================

    #[test]
    fn quaternion_slerp() {
        let a = Quaternion::identity();
        let b = Quaternion::from_rotation_z(1.0);
        assert!(a.slerp(b, 0.0).almost_eq(a));
        assert!(a.slerp(b, 1.0).almost_eq(b));
        assert!(a.slerp(b, 0.25).almost_eq(Quaternion::from_rotation_z(0.25)));
        // Takes the short arc when the inputs are in opposite hemispheres.
        assert!(a.slerp(-b, 0.5).almost_eq(Quaternion::from_rotation_z(0.5)));
        assert!(a.slerp(-a, 0.7).almost_eq(a));
    }

    #[test]
    fn quaternion_lerp() {
        let a = Quaternion::new(2.0, 0.0, 0.0, 0.0);
        let b = Quaternion::new(0.0, 0.0, 0.0, 3.0);
        assert_eq!(a.lerp(b, 0.0), a.normed());
        assert!(a.lerp(b, 1.0).almost_eq(b.normed()));
        let mid = a.lerp(b, 0.5);
        assert!(mid.almost_eq(Quaternion::new(2.0, 0.0, 0.0, 3.0).normed()));
    }

    // ==================== Quaternion Properties ====================

    #[test]
    fn quaternion_random_properties() {
        let mut rng = StdRng::seed_from_u64(0x9e37_79b9);
        for _ in 0..1000 {
            let q = random_unit(&mut rng);
            let r = random_unit(&mut rng);
            let t: f32 = rng.gen_range(0.0..1.0);

            assert!((q.len() - 1.0).abs() < EPSILON, "{q}");
            assert!(q.normed().almost_eq(q), "{q}");
            assert!(q.slerp(q, t).almost_eq(q), "{q} {t}");
            assert!(q.lerp(r, 0.0).almost_eq(q), "{q} {r}");
            assert!(q.lerp(r, 1.0).almost_eq(r), "{q} {r}");
            assert!(same_rotation(Quaternion::from_rotation_matrix(&q.to_matrix()), q), "{q}");

            let s = q.slerp(r, t);
            assert!((s.len() - 1.0).abs() < EPSILON, "{q} {r} {t}");
            assert!((q * r).to_matrix().almost_eq(q.to_matrix() * r.to_matrix()), "{q} {r}");
        }
    }

    #[test]
    fn quaternion_index_and_display() {
        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q[3], 4.0);
        q[0] = -1.0;
        assert_eq!(q.x, -1.0);
        q.as_mut_slice()[1] = 0.5;
        assert_eq!(q.to_string(), "quat(-1, 0.5, 3, 4)");
        assert_eq!(format!("{q:.2}"), "quat(-1.00, 0.50, 3.00, 4.00)");
    }

    #[test]
    #[should_panic]
    fn quaternion_index_out_of_range() {
        let q = Quaternion::identity();
        let _ = q[4];
    }
}
