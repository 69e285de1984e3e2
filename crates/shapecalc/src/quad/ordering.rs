//! Ordering predicates for four-point polygons.
//!
//! - `sort_clockwise`: canonical angular order around the centroid.
//! - `is_self_intersecting`: "bowtie" detection on opposite edges.
//! - `winding` / `is_valid_order`: turn-direction consistency of a traversal.
//!
//! Conventions
//! - Only x/y take part; z is carried through untouched.
//! - The canonical order is ascending `atan2(y − cy, x − cx)`. In a y-up frame
//!   this walks counterclockwise; the name follows the screen (y-down) reading.
//!   Later checks only rely on the order being angular and stable.

use std::cmp::Ordering;

use crate::cfg::near_zero;
use crate::point::Point;
use crate::vector::turn;

/// Turn-direction summary of a closed traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    /// Every turn is negligible (all points collinear or coincident).
    Degenerate,
    Clockwise,
    CounterClockwise,
    /// Non-negligible turns of both signs: the traversal is not simple.
    Mixed,
}

/// Reorder four points by ascending polar angle around their x/y centroid.
///
/// Inputs of any other length are returned unchanged. The sort is stable, so
/// points at equal angles keep their input order and the operation is
/// idempotent.
///
/// The centroid must not depend on input order: a point level with it and
/// to its left sits on the `atan2` branch cut, and a one-ulp change flips it
/// between `π` and `−π`.
pub fn sort_clockwise(points: &[Point]) -> Vec<Point> {
    let mut out = points.to_vec();
    if points.len() != 4 {
        return out;
    }
    let cx = order_free_mean(points.iter().map(|p| p.x));
    let cy = order_free_mean(points.iter().map(|p| p.y));
    out.sort_by(|a, b| {
        let aa = (a.y - cy).atan2(a.x - cx);
        let bb = (b.y - cy).atan2(b.x - cx);
        aa.partial_cmp(&bb).unwrap_or(Ordering::Equal)
    });
    out
}

/// Mean of four values summed in ascending order.
fn order_free_mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut v: Vec<f64> = values.collect();
    v.sort_by(f64::total_cmp);
    v.iter().sum::<f64>() / v.len() as f64
}

/// Orientation of `(p, q, r)`: `(qy−py)(rx−qx) − (qx−px)(ry−qy)`.
///
/// Positive for clockwise, negative for counterclockwise, zero if collinear.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> f64 {
    (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
}

/// Segments `p1p2` and `p3p4` properly cross.
///
/// Strict sign test: each segment's endpoints lie on opposite sides of the
/// other's line. Touching and collinear overlaps are not reported.
pub fn segments_cross(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d1 = orientation(p1, p2, p3);
    let d2 = orientation(p1, p2, p4);
    let d3 = orientation(p3, p4, p1);
    let d4 = orientation(p3, p4, p2);
    opposite(d1, d2) && opposite(d3, d4)
}

#[inline]
fn opposite(a: f64, b: f64) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}

/// Edge (0,1) crosses edge (2,3), or edge (1,2) crosses edge (3,0).
///
/// `false` for inputs that are not exactly four points.
pub fn is_self_intersecting(points: &[Point]) -> bool {
    let [a, b, c, d] = match points {
        [a, b, c, d] => [*a, *b, *c, *d],
        _ => return false,
    };
    segments_cross(a, b, c, d) || segments_cross(b, c, d, a)
}

/// Classify the turns of the closed traversal `p0 → p1 → … → p0`.
///
/// Turns with `|cross| < EPSILON` are ignored. Returns `Degenerate` for
/// fewer than three points.
pub fn winding(points: &[Point]) -> Winding {
    let n = points.len();
    if n < 3 {
        return Winding::Degenerate;
    }
    let mut sign = 0i8;
    for i in 0..n {
        let t = turn(points[i], points[(i + 1) % n], points[(i + 2) % n]);
        if near_zero(t) {
            continue;
        }
        let s = if t > 0.0 { 1 } else { -1 };
        if sign == 0 {
            sign = s;
        } else if sign != s {
            return Winding::Mixed;
        }
    }
    match sign {
        0 => Winding::Degenerate,
        1 => Winding::CounterClockwise,
        _ => Winding::Clockwise,
    }
}

/// Walking the four points in input order never flips turn direction.
///
/// Collinear sets are a valid (if degenerate) order; the classifiers reject
/// them through other checks.
pub fn is_valid_order(points: &[Point]) -> bool {
    points.len() == 4 && winding(points) != Winding::Mixed
}

/// Some pair of points coincides within epsilon in both x and y.
pub fn has_coincident_points(points: &[Point]) -> bool {
    points.iter().enumerate().any(|(i, p)| {
        points[i + 1..]
            .iter()
            .any(|q| near_zero(p.x - q.x) && near_zero(p.y - q.y))
    })
}
