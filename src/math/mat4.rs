//! 4×4 matrix operations over flat `[f32; 16]` arrays.
//!
//! Element order: `m[r * 4 + c]` is row `r`, column `c`, and the
//! translation components live at indices 12, 13, 14.  This is the
//! exact layout the render backend consumes without transposition, so
//! every caller in the crate must agree on it.  All functions are pure
//! and return a new matrix.

use crate::math::vec3::{self, Vec3};

pub type Mat4 = [f32; 16];

/// Identity matrix: ones on the diagonal.
pub fn identity() -> Mat4 {
    #[rustfmt::skip]
    let m = [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ];
    m
}

/// Add a translation offset into the matrix.
///
/// Only the three translation slots (12, 13, 14) are updated on top of
/// the input; the rest of the matrix is untouched.
pub fn translate(m: Mat4, x: f32, y: f32, z: f32) -> Mat4 {
    let mut out = m;
    out[12] += x;
    out[13] += y;
    out[14] += z;
    out
}

/// Uniformly scale the rotation/scale diagonal (0, 5, 10) and the
/// translation slots (12, 13, 14).
///
/// Because the translation slots are scaled as well, this must be
/// applied to a matrix before an independent translation is composed
/// on top of it, or that translation ends up scaled too.
pub fn uniform_scale(m: Mat4, s: f32) -> Mat4 {
    let mut out = m;
    out[0] *= s;
    out[5] *= s;
    out[10] *= s;
    out[12] *= s;
    out[13] *= s;
    out[14] *= s;
    out
}

/// Standard row-by-column product: `result[r,c] = Σ_k a[r,k] * b[k,c]`.
pub fn multiply(a: Mat4, b: Mat4) -> Mat4 {
    let mut out = [0.0; 16];
    for row in 0..4 {
        for col in 0..4 {
            let mut acc = 0.0;
            for k in 0..4 {
                acc += a[row * 4 + k] * b[k * 4 + col];
            }
            out[row * 4 + col] = acc;
        }
    }
    out
}

/// Rotation about the Y axis by `angle` radians.
pub fn rotation_y(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    #[rustfmt::skip]
    let m = [
         c,  0.0, s,   0.0,
         0.0, 1.0, 0.0, 0.0,
        -s,  0.0, c,   0.0,
         0.0, 0.0, 0.0, 1.0,
    ];
    m
}

/// Symmetric frustum projection from a vertical field of view in
/// degrees, aspect ratio, and near/far clip planes.
pub fn perspective(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let t = (fov_deg.to_radians() / 2.0).tan();
    #[rustfmt::skip]
    let m = [
        1.0 / (aspect * t), 0.0,     0.0,                                0.0,
        0.0,                1.0 / t, 0.0,                                0.0,
        0.0,                0.0,     -((far + near) / (far - near)),     -((2.0 * far * near) / (far - near)),
        0.0,                0.0,     -1.0,                               0.0,
    ];
    m
}

/// Build a look-at view matrix from a camera basis and position.
///
/// The basis columns hold `right`, `up` and `-forward`; the translation
/// terms are `(-right·pos, -up·pos, forward·pos)`.
pub fn look_at(position: Vec3, forward: Vec3, right: Vec3, up: Vec3) -> Mat4 {
    #[rustfmt::skip]
    let m = [
        right[0], up[0], -forward[0], 0.0,
        right[1], up[1], -forward[1], 0.0,
        right[2], up[2], -forward[2], 0.0,
        -vec3::dot(right, position),
        -vec3::dot(up, position),
        vec3::dot(forward, position),
        1.0,
    ];
    m
}

/// Apply a matrix to a point (implicit `w = 1`) in the crate's element
/// order, returning the transformed point.
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    let mut out = [0.0_f32; 3];
    for (c, slot) in out.iter_mut().enumerate() {
        *slot = p[0] * m[c] + p[1] * m[4 + c] + p[2] * m[8 + c] + m[12 + c];
    }
    out
}
