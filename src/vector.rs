//! # Vector algebra primitives
//!
//! Thin, total functions over 3-vectors. None of them can fail for finite
//! inputs: the cross product of parallel vectors is the zero vector and the
//! norm of the zero vector is `0.0`.
//!
//! All other modules work with [`Vec3`] directly and call into this module when
//! they need a degenerate-safe direction ([`unit_or_zero`]).

use nalgebra::Vector3;

/// Cartesian 3-vector (AU or AU/day depending on context).
pub type Vec3 = Vector3<f64>;

/// Norms below this are treated as the zero vector by [`unit_or_zero`].
pub const ZERO_NORM: f64 = 1e-300;

/// Euclidean norm.
#[inline]
pub fn norm(a: &Vec3) -> f64 {
    a.norm()
}

/// Scalar product.
#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b)
}

/// Vector product `a × b`.
#[inline]
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    a.cross(b)
}

/// Unit vector along `a`, or the zero vector when `a` has no direction.
pub fn unit_or_zero(a: &Vec3) -> Vec3 {
    let n = a.norm();
    if n > ZERO_NORM {
        a / n
    } else {
        Vec3::zeros()
    }
}
