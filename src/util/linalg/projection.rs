use crate::core::prelude::*;

/// Perspective projection with the default clip planes
/// ([`DEFAULT_Z_NEAR`](crate::core::config::DEFAULT_Z_NEAR),
/// [`DEFAULT_Z_FAR`](crate::core::config::DEFAULT_Z_FAR)).
pub fn perspective(fovy_degrees: f32, aspect: f32) -> Matrix4 {
    perspective_with_planes(fovy_degrees, aspect, DEFAULT_Z_NEAR, DEFAULT_Z_FAR)
}

/// Builds an OpenGL-style perspective projection, as `gluPerspective` does.
///
/// `fovy_degrees` is the vertical field of view in degrees; `aspect` is width over height. Depth
/// in `[z_near, z_far]` maps to `[-1, 1]` after the perspective divide. Element 15 keeps its
/// identity value of 1.
///
/// # Examples
///
/// ```
/// use remath::core::prelude::*;
///
/// let p = perspective_with_planes(90.0, 2.0, 1.0, 3.0);
/// assert!((p[5] - 1.0).abs() < EPSILON);
/// assert!((p[0] - 0.5).abs() < EPSILON);
/// assert_eq!(p[10], -2.0);
/// assert_eq!(p[11], -1.0);
/// assert_eq!(p[14], -3.0);
/// ```
pub fn perspective_with_planes(
    fovy_degrees: f32,
    aspect: f32,
    z_near: f32,
    z_far: f32,
) -> Matrix4 {
    let f = 1.0 / (to_radians(fovy_degrees) / 2.0).tan();
    let mut rv = Matrix4::identity();
    rv[0] = f / aspect;
    rv[5] = f;
    rv[10] = (z_far + z_near) / (z_near - z_far);
    rv[11] = -1.0;
    rv[14] = (2.0 * z_far * z_near) / (z_near - z_far);
    rv
}

/// Builds a view matrix for a camera at `eye` looking towards `center`.
///
/// The camera basis is written into the rotation block: side in (0, 4, 8), the recomputed up
/// vector in (1, 5, 9) and the backwards direction in (2, 6, 10). The translation is then set to
/// `-eye` directly, without rotating it into view space, so the result only maps `eye` to the
/// origin when the basis is the identity.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Matrix4 {
    let forward = (center - eye).normed();
    let side = forward.cross(up).normed();
    let up = side.cross(forward);

    let mut basis = Matrix4::identity();
    basis[0] = side.x;
    basis[4] = side.y;
    basis[8] = side.z;

    basis[1] = up.x;
    basis[5] = up.y;
    basis[9] = up.z;

    basis[2] = -forward.x;
    basis[6] = -forward.y;
    basis[10] = -forward.z;

    let mut rv = Matrix4::identity();
    rv *= basis;
    rv.set_translation_vec(-eye);
    rv
}

/// Area of the triangle `abc` by Heron's formula.
///
/// # Examples
///
/// ```
/// use remath::core::prelude::*;
///
/// let area = triangle_area(Vec3::zero(), Vec3::new(4.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0));
/// assert_eq!(area, 6.0);
/// ```
pub fn triangle_area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    let d1 = a.dist(b);
    let d2 = a.dist(c);
    let d3 = b.dist(c);
    let s = (d1 + d2 + d3) / 2.0;
    (s * (s - d1) * (s - d2) * (s - d3)).sqrt()
}
