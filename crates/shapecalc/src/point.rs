//! Immutable 3D point used for both planar quadrilaterals and tetrahedra.

use std::fmt;

use nalgebra::Vector3;

/// Point in R³; planar callers leave `z = 0`.
///
/// Invariants:
/// - Value semantics (`Copy`); nothing in the crate mutates a point in place.
/// - `==` is exact component-wise equality. Geometric predicates never use it;
///   they compare with [`crate::cfg::EPSILON`] instead.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Planar point (`z = 0`).
    #[inline]
    pub const fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    #[inline]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Euclidean norm of the position vector (distance from the origin).
    #[inline]
    pub fn norm(self) -> f64 {
        self.to_vector().norm()
    }
}

impl From<Vector3<f64>> for Point {
    #[inline]
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point> for Vector3<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::xy(x, y)
    }
}

impl From<(f64, f64, f64)> for Point {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {}, {})", self.x, self.y, self.z)
    }
}
