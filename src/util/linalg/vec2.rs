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

/// A 2D vector using 32-bit floating point coordinates.
///
/// The layout is `#[repr(C)]` with `x` at index 0 and `y` at index 1, so a [`Vec2`] (or a slice of
/// them) can be handed to a graphics API as raw floats via [`as_slice()`](Vec2::as_slice) or
/// [`bytemuck::cast_slice`].
///
/// # Examples
///
/// ```
/// use remath::core::prelude::*;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2::new(1.0, 2.0);
///
/// assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
/// assert_eq!(v1.len(), 5.0);
/// ```
///
/// # Equality
/// `==` compares components exactly, with no tolerance. Use [`almost_eq()`](Vec2::almost_eq) to
/// compare the results of floating point computations.
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
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }
    /// Returns a vector with both components set to 0.0.
    #[must_use]
    pub fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }
    /// Returns a vector with both components set to 1.0.
    #[must_use]
    pub fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }
    #[must_use]
    pub fn unit_x() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }
    #[must_use]
    pub fn unit_y() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }

    /// Creates a new vector with both components set to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use remath::core::prelude::*;
    /// let vec = Vec2::splat(3.0);
    /// assert_eq!(vec.x, 3.0);
    /// assert_eq!(vec.y, 3.0);
    /// ```
    #[must_use]
    pub fn splat(v: f32) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
    /// Sets both components to `value`.
    pub fn set_splat(&mut self, value: f32) {
        *self = Vec2::splat(value);
    }
    pub fn set_from_array(&mut self, values: [f32; 2]) {
        *self = values.into();
    }
    /// Sets the components from a raw slice, which must hold exactly two values.
    ///
    /// # Errors
    /// Fails if `values.len() != 2`; the vector is left unchanged.
    pub fn set_from_slice(&mut self, values: &[f32]) -> Result<()> {
        *self = Vec2::try_from(values)?;
        Ok(())
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len`](Vec2::len) when comparing lengths to avoid the square root.
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Returns the length (magnitude) of the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use remath::core::prelude::*;
    /// assert_eq!(Vec2::new(2.0, 3.0).len(), 3.605_551_2);
    /// ```
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns the distance between the two points.
    #[must_use]
    pub fn dist(&self, other: Vec2) -> f32 {
        (*self - other).len()
    }
    #[must_use]
    pub fn dist_squared(&self, other: Vec2) -> f32 {
        (*self - other).len_squared()
    }

    /// Checks whether the two vectors are parallel by comparing component ratios, `x / other.x ==
    /// y / other.y`.
    ///
    /// The division is not guarded: if `other` has a zero component the ratios become infinite
    /// or `NaN`, and the result follows IEEE comparison rules. For example `(1, 0)` and `(2, 0)`
    /// are reported as *not* parallel, because `0 / 0` is `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use remath::core::prelude::*;
    /// let v = Vec2::new(2.0, 3.0);
    /// assert!(v.is_parallel(Vec2::new(3.0, 4.5)));
    /// assert!(v.is_parallel(Vec2::new(-4.0, -6.0)));
    /// assert!(!v.is_parallel(Vec2::new(-1.0, 3.0)));
    /// ```
    #[must_use]
    pub fn is_parallel(&self, other: Vec2) -> bool {
        if other.x == 0.0 || other.y == 0.0 {
            warn!("Vec2: is_parallel() divides by zero: {} vs. {}", self, other);
        }
        self.x / other.x == self.y / other.y
    }

    /// Normalises the vector in place. A zero-length vector stays the zero vector.
    pub fn normalize(&mut self) {
        *self = self.normed();
    }

    /// Returns a normalised (unit) vector in the same direction as this vector.
    ///
    /// If the original vector's length is zero, returns a zero vector to avoid
    /// division by zero. Negative zero components are returned as positive zero.
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        let len = self.len();
        let mut rv = if len == 0.0 { Vec2::zero() } else { *self / len };
        rv.x = re_float::force_positive_zero(rv.x);
        rv.y = re_float::force_positive_zero(rv.y);
        rv
    }

    /// Flips the sign of both components in place.
    pub fn negate(&mut self) {
        *self = -*self;
    }

    /// Computes the dot product of two vectors.
    #[must_use]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the z-component of the cross product of the two vectors placed in the xy-plane.
    ///
    /// This is a scalar: the signed area of the parallelogram spanned by the two vectors. It is
    /// positive if `other` is counter-clockwise from `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use remath::core::prelude::*;
    /// let v1 = Vec2 { x: 2.0, y: 0.0 };
    /// let v2 = Vec2 { x: 0.0, y: 3.0 };
    /// assert_eq!(v1.cross(v2), 6.0);
    /// assert_eq!(v2.cross(v1), -6.0);
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Linearly interpolates towards `to`. `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(&self, to: Vec2, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        Vec2 {
            x: scalar::lerp(self.x, to.x, t),
            y: scalar::lerp(self.y, to.y, t),
        }
    }

    /// Checks if the vector is approximately equal to another vector.
    ///
    /// Two vectors are considered approximately equal if the length of their difference
    /// is less than [`EPSILON`](crate::core::config::EPSILON).
    #[must_use]
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (*self - rhs).len() < EPSILON
    }

    /// Views the components as `[x, y]`.
    #[must_use]
    pub fn as_array(&self) -> &[f32; 2] {
        bytemuck::cast_ref(self)
    }
    pub fn as_array_mut(&mut self) -> &mut [f32; 2] {
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

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl TryFrom<&[f32]> for Vec2 {
    type Error = anyhow::Error;

    fn try_from(value: &[f32]) -> Result<Self> {
        let array: [f32; 2] = value
            .try_into()
            .map_err(|_| anyhow!("Vec2: expected 2 components, got {}", value.len()))?;
        Ok(array.into())
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        if cfg!(debug_assertions) {
            check_lt!(index, 2);
        }
        &self.as_array()[index]
    }
}
impl IndexMut<usize> for Vec2 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if cfg!(debug_assertions) {
            check_lt!(index, 2);
        }
        &mut self.as_array_mut()[index]
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
/// Adds the value to every component.
impl AddAssign<f32> for Vec2 {
    fn add_assign(&mut self, rhs: f32) {
        self.x += rhs;
        self.y += rhs;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
/// Subtracts the value from every component.
impl SubAssign<f32> for Vec2 {
    fn sub_assign(&mut self, rhs: f32) {
        self.x -= rhs;
        self.y -= rhs;
    }
}

impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Vec2::add)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
