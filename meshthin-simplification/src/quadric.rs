//! Error quadrics
//!
//! A quadric is a symmetric 4x4 matrix encoding the sum of squared
//! distances to a set of supporting planes. One quadric is accumulated
//! per vertex from the planes of its incident triangles; collapsing an
//! edge adds the endpoint quadrics together.

use meshthin_core::Point3f;
use std::ops::{Add, AddAssign};

/// Determinant magnitude below which the 3x3 system is treated as singular.
pub(crate) const SINGULAR_EPS: f64 = 1e-6;

/// A symmetric 4x4 error matrix stored as its 10 distinct coefficients.
///
/// Coefficients are kept in `f64`; positions stay `f32` at the API
/// boundary. The zero quadric is the additive identity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quadric {
    pub m00: f64,
    pub m01: f64,
    pub m02: f64,
    pub m03: f64,
    pub m11: f64,
    pub m12: f64,
    pub m13: f64,
    pub m22: f64,
    pub m23: f64,
    pub m33: f64,
}

impl Quadric {
    /// The zero quadric
    pub fn zero() -> Self {
        Self::default()
    }

    /// Fundamental quadric of the plane `ax + by + cz + d = 0`:
    /// the outer product of `(a, b, c, d)` with itself.
    pub fn from_plane(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            m00: a * a,
            m01: a * b,
            m02: a * c,
            m03: a * d,
            m11: b * b,
            m12: b * c,
            m13: b * d,
            m22: c * c,
            m23: c * d,
            m33: d * d,
        }
    }

    /// Quadratic form `v^T Q v` at a point (with homogeneous w = 1).
    pub fn error(&self, p: &Point3f) -> f64 {
        let (x, y, z) = (p.x as f64, p.y as f64, p.z as f64);
        self.m00 * x * x + 2.0 * self.m01 * x * y + 2.0 * self.m02 * x * z + 2.0 * self.m03 * x
            + self.m11 * y * y + 2.0 * self.m12 * y * z + 2.0 * self.m13 * y
            + self.m22 * z * z + 2.0 * self.m23 * z
            + self.m33
    }

    /// Position minimizing the quadratic form, solving the 3x3 system
    /// formed by the upper-left block against the negated fourth column
    /// by the cofactor method. `None` when the system is singular
    /// (`|det| <= 1e-6`); callers fall back to the edge midpoint.
    pub fn optimal_position(&self) -> Option<Point3f> {
        let det = self.m00 * (self.m11 * self.m22 - self.m12 * self.m12)
            - self.m01 * (self.m01 * self.m22 - self.m12 * self.m02)
            + self.m02 * (self.m01 * self.m12 - self.m11 * self.m02);
        if det.abs() <= SINGULAR_EPS {
            return None;
        }
        let inv_det = 1.0 / det;
        let x = -inv_det
            * (self.m03 * (self.m11 * self.m22 - self.m12 * self.m12)
                - self.m01 * (self.m13 * self.m22 - self.m12 * self.m23)
                + self.m02 * (self.m13 * self.m12 - self.m11 * self.m23));
        let y = -inv_det
            * (self.m00 * (self.m13 * self.m22 - self.m12 * self.m23)
                - self.m03 * (self.m01 * self.m22 - self.m02 * self.m12)
                + self.m02 * (self.m01 * self.m23 - self.m13 * self.m02));
        let z = -inv_det
            * (self.m00 * (self.m11 * self.m23 - self.m13 * self.m12)
                - self.m01 * (self.m01 * self.m23 - self.m13 * self.m02)
                + self.m03 * (self.m01 * self.m12 - self.m11 * self.m02));
        Some(Point3f::new(x as f32, y as f32, z as f32))
    }
}

impl Add for Quadric {
    type Output = Quadric;

    fn add(mut self, rhs: Quadric) -> Quadric {
        self += rhs;
        self
    }
}

impl AddAssign for Quadric {
    fn add_assign(&mut self, rhs: Quadric) {
        self.m00 += rhs.m00;
        self.m01 += rhs.m01;
        self.m02 += rhs.m02;
        self.m03 += rhs.m03;
        self.m11 += rhs.m11;
        self.m12 += rhs.m12;
        self.m13 += rhs.m13;
        self.m22 += rhs.m22;
        self.m23 += rhs.m23;
        self.m33 += rhs.m33;
    }
}

/// Plane `(a, b, c, d)` of a triangle, or `None` for a zero-area
/// triangle whose normal is undefined.
fn face_plane(v0: &Point3f, v1: &Point3f, v2: &Point3f) -> Option<(f64, f64, f64, f64)> {
    let n = (v1 - v0).cross(&(v2 - v0));
    let len = n.norm();
    if len <= 0.0 || !len.is_finite() {
        return None;
    }
    let n = n / len;
    let d = -n.dot(&v0.coords);
    Some((n.x as f64, n.y as f64, n.z as f64, d as f64))
}

/// Accumulate one quadric per vertex from the planes of its incident
/// triangles. Purely additive; zero-area triangles contribute nothing.
pub fn accumulate_quadrics(vertices: &[Point3f], faces: &[[usize; 3]]) -> Vec<Quadric> {
    let mut quadrics = vec![Quadric::zero(); vertices.len()];
    for face in faces {
        let [i0, i1, i2] = *face;
        if let Some((a, b, c, d)) = face_plane(&vertices[i0], &vertices[i1], &vertices[i2]) {
            let q = Quadric::from_plane(a, b, c, d);
            quadrics[i0] += q;
            quadrics[i1] += q;
            quadrics[i2] += q;
        }
    }
    quadrics
}
