//! Vector arithmetic on points: differences, products, distances, angles.
//!
//! Points are lifted to `nalgebra::Vector3<f64>` for the arithmetic; planar
//! inputs carry `z = 0`, so the 3D products reduce to their 2D meaning.

use nalgebra::Vector3;

use crate::cfg::near_zero;
use crate::point::Point;

/// Direction vector `a − b`.
#[inline]
pub fn subtract(a: Point, b: Point) -> Vector3<f64> {
    a.to_vector() - b.to_vector()
}

#[inline]
pub fn cross(a: Vector3<f64>, b: Vector3<f64>) -> Vector3<f64> {
    a.cross(&b)
}

#[inline]
pub fn dot(a: Vector3<f64>, b: Vector3<f64>) -> f64 {
    a.dot(&b)
}

/// Euclidean distance in the x/y plane (z ignored).
#[inline]
pub fn distance_2d(p: Point, q: Point) -> f64 {
    (q.x - p.x).hypot(q.y - p.y)
}

#[inline]
pub fn distance_3d(p: Point, q: Point) -> f64 {
    subtract(q, p).norm()
}

/// z-component of `(q − p) × (r − q)`: the turn taken at `q` walking p→q→r.
///
/// Positive for a counterclockwise turn, negative for clockwise, zero when
/// collinear.
#[inline]
pub fn turn(p: Point, q: Point, r: Point) -> f64 {
    (q.x - p.x) * (r.y - q.y) - (q.y - p.y) * (r.x - q.x)
}

/// Planar angle at `p2` between the rays to `p1` and `p3`, in degrees.
///
/// The cosine is clamped to [-1, 1] before `acos`. A zero-length ray yields
/// `NaN`, which fails every tolerance comparison downstream.
pub fn angle_degrees(p1: Point, p2: Point, p3: Point) -> f64 {
    let (v1x, v1y) = (p1.x - p2.x, p1.y - p2.y);
    let (v2x, v2y) = (p3.x - p2.x, p3.y - p2.y);
    let dot = v1x * v2x + v1y * v2y;
    let mags = v1x.hypot(v1y) * v2x.hypot(v2y);
    let cos = dot / mags;
    if cos.is_nan() {
        return f64::NAN;
    }
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Lines `p1p2` and `p3p4` are parallel (planar cross product below epsilon).
#[inline]
pub fn are_parallel(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let (dx1, dy1) = (p2.x - p1.x, p2.y - p1.y);
    let (dx2, dy2) = (p4.x - p3.x, p4.y - p3.y);
    near_zero(dx1 * dy2 - dy1 * dx2)
}
