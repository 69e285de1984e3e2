//! Quadrilateral metrics and classifiers.
//!
//! Conventions
//! - Inputs are `&[Point]`; anything other than four points yields `0.0` or
//!   `false`.
//! - `area`, `is_rectangle` and `is_convex` are order-independent (they
//!   canonicalize or are invariant). `perimeter`, the side check of
//!   `is_square`, and the side checks of `is_rhombus`/`is_trapezoid` read the
//!   caller's order as connectivity.
//! - Predicates never panic; degenerate input is a negative answer.

use tracing::debug;

use crate::cfg::{approx_eq, EPSILON};
use crate::point::Point;
use crate::vector::{angle_degrees, are_parallel, distance_2d};

use super::ordering::{
    has_coincident_points, is_self_intersecting, is_valid_order, sort_clockwise, winding, Winding,
};

/// Shoelace area `|Σ (x_i y_{i+1} − x_{i+1} y_i)| / 2`.
pub fn area(points: &[Point]) -> f64 {
    if points.len() != 4 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..4 {
        let j = (i + 1) % 4;
        acc += points[i].x * points[j].y;
        acc -= points[j].x * points[i].y;
    }
    acc.abs() / 2.0
}

/// `2 (|p0 p1| + |p1 p2|)`.
///
/// Assumes the points are given in traversal order of a parallelogram; no
/// canonicalization happens here.
pub fn perimeter(points: &[Point]) -> f64 {
    if points.len() != 4 {
        return 0.0;
    }
    2.0 * (distance_2d(points[0], points[1]) + distance_2d(points[1], points[2]))
}

/// Four distinct points, simple traversal, equal and parallel opposite sides,
/// and four right angles.
pub fn is_rectangle(points: &[Point]) -> bool {
    if points.len() != 4 {
        return false;
    }
    if has_coincident_points(points) {
        debug!("rectangle check: coincident points");
        return false;
    }
    if is_self_intersecting(points) {
        debug!("rectangle check: self-intersecting");
        return false;
    }
    if !is_valid_order(points) {
        debug!("rectangle check: inconsistent turn direction");
        return false;
    }

    let p = sort_clockwise(points);
    let sides = [
        distance_2d(p[0], p[1]),
        distance_2d(p[1], p[2]),
        distance_2d(p[2], p[3]),
        distance_2d(p[3], p[0]),
    ];
    if !approx_eq(sides[0], sides[2]) || !approx_eq(sides[1], sides[3]) {
        debug!(?sides, "rectangle check: opposite sides differ");
        return false;
    }
    if !are_parallel(p[0], p[1], p[2], p[3]) || !are_parallel(p[1], p[2], p[3], p[0]) {
        debug!("rectangle check: opposite sides not parallel");
        return false;
    }
    for i in 0..4 {
        let angle = angle_degrees(p[i], p[(i + 1) % 4], p[(i + 2) % 4]);
        if !approx_eq(angle, 90.0) {
            debug!(vertex = (i + 1) % 4, angle, "rectangle check: angle is not right");
            return false;
        }
    }
    true
}

/// Four distinct points, not a bowtie, and the canonical traversal turns one
/// way only.
///
/// All-collinear input has no significant turn and is not convex.
pub fn is_convex(points: &[Point]) -> bool {
    if points.len() != 4 || has_coincident_points(points) || is_self_intersecting(points) {
        return false;
    }
    match winding(&sort_clockwise(points)) {
        Winding::Clockwise | Winding::CounterClockwise => true,
        Winding::Degenerate => {
            debug!("convexity check: collinear points");
            false
        }
        Winding::Mixed => false,
    }
}

/// Rectangle whose first two sides (input order) match.
pub fn is_square(points: &[Point]) -> bool {
    if !is_rectangle(points) {
        return false;
    }
    approx_eq(
        distance_2d(points[0], points[1]),
        distance_2d(points[1], points[2]),
    )
}

/// Convex with four equal sides (input order).
pub fn is_rhombus(points: &[Point]) -> bool {
    if !is_convex(points) {
        return false;
    }
    let first = distance_2d(points[0], points[1]);
    (1..4).all(|i| approx_eq(distance_2d(points[i], points[(i + 1) % 4]), first))
}

/// Convex with at least one parallel pair among the four edges (input order).
///
/// All six pairings are tested, adjacent edges included.
pub fn is_trapezoid(points: &[Point]) -> bool {
    if !is_convex(points) {
        return false;
    }
    let edges: [(Point, Point); 4] = [
        (points[0], points[1]),
        (points[1], points[2]),
        (points[2], points[3]),
        (points[3], points[0]),
    ];
    (0..4).any(|i| {
        (i + 1..4).any(|j| are_parallel(edges[i].0, edges[i].1, edges[j].0, edges[j].1))
    })
}

/// Most specific label for a quadrilateral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuadKind {
    Square,
    Rectangle,
    Rhombus,
    Trapezoid,
    Convex,
    /// Simple but with a reflex vertex.
    Concave,
    /// Edges cross in the given order.
    SelfIntersecting,
    /// Wrong arity, coincident points, or no area.
    Degenerate,
}

impl QuadKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuadKind::Square => "square",
            QuadKind::Rectangle => "rectangle",
            QuadKind::Rhombus => "rhombus",
            QuadKind::Trapezoid => "trapezoid",
            QuadKind::Convex => "convex",
            QuadKind::Concave => "concave",
            QuadKind::SelfIntersecting => "self-intersecting",
            QuadKind::Degenerate => "degenerate",
        }
    }
}

impl std::fmt::Display for QuadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every metric and predicate for one quadrilateral.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadReport {
    pub area: f64,
    pub perimeter: f64,
    pub rectangle: bool,
    pub square: bool,
    pub rhombus: bool,
    pub trapezoid: bool,
    pub convex: bool,
    pub self_intersecting: bool,
    /// Wrong arity, coincident points, or area below epsilon.
    pub degenerate: bool,
}

impl QuadReport {
    pub fn kind(&self) -> QuadKind {
        if self.square {
            QuadKind::Square
        } else if self.rectangle {
            QuadKind::Rectangle
        } else if self.rhombus {
            QuadKind::Rhombus
        } else if self.trapezoid {
            QuadKind::Trapezoid
        } else if self.convex {
            QuadKind::Convex
        } else if self.self_intersecting {
            QuadKind::SelfIntersecting
        } else if self.degenerate {
            QuadKind::Degenerate
        } else {
            QuadKind::Concave
        }
    }
}

/// Evaluate all metrics and predicates at once.
pub fn classify(points: &[Point]) -> QuadReport {
    let area = area(points);
    QuadReport {
        area,
        perimeter: perimeter(points),
        rectangle: is_rectangle(points),
        square: is_square(points),
        rhombus: is_rhombus(points),
        trapezoid: is_trapezoid(points),
        convex: is_convex(points),
        self_intersecting: is_self_intersecting(points),
        degenerate: points.len() != 4 || has_coincident_points(points) || area <= EPSILON,
    }
}
