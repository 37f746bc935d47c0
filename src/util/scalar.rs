use std::f32::consts::PI;

/// Converts an angle in degrees to radians.
///
/// # Examples
/// ```
/// use remath::core::prelude::*;
/// assert_eq!(to_radians(180.0), std::f32::consts::PI);
/// ```
pub fn to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Converts an angle in radians to degrees.
///
/// # Examples
/// ```
/// use remath::core::prelude::*;
/// assert_eq!(to_degrees(std::f32::consts::PI), 180.0);
/// ```
pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}

/// Returns the largest exponent `e` such that `2^e <= value`.
///
/// Both 0 and 1 map to 0.
///
/// # Examples
/// ```
/// use remath::core::prelude::*;
/// assert_eq!(max_power_of_two(200), 7); // 2^7 = 128 is the largest power of two in 200
/// assert_eq!(max_power_of_two(0), 0);
/// ```
pub fn max_power_of_two(value: u64) -> u32 {
    value.checked_ilog2().unwrap_or(0)
}

/// Masks out the low half of a byte. The result is not shifted down, so
/// `high_nibble(0x7F) == 0x70`.
pub fn high_nibble(byte: u8) -> u8 {
    byte & 0xF0
}

pub fn low_nibble(byte: u8) -> u8 {
    byte & 0x0F
}

/// A linear interpolation between two values.
///
/// # Examples
/// ```
/// use remath::core::prelude::*;
/// let start = 0.0;
/// let end = 10.0;
/// assert_eq!(scalar::lerp(start, end, 0.0), start);
/// assert_eq!(scalar::lerp(start, end, 1.0), end);
/// assert_eq!(scalar::lerp(start, end, 0.5), 5.0);
/// ```
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}
