//! Quadrilaterals: four planar points in caller-supplied order.
//!
//! - `ordering`: canonical angular order, bowtie detection, turn consistency.
//! - `classify`: shoelace area, perimeter, and the rectangle / square /
//!   rhombus / trapezoid / convex predicates built on `ordering`.
//!
//! Caveats
//! - `is_trapezoid` accepts any parallel pair among the four edges, adjacent
//!   ones included.
//! - `perimeter` trusts the caller's order (parallelogram formula).

pub mod classify;
pub mod ordering;

pub use classify::{
    area, classify, is_convex, is_rectangle, is_rhombus, is_square, is_trapezoid, perimeter,
    QuadKind, QuadReport,
};
pub use ordering::{
    has_coincident_points, is_self_intersecting, is_valid_order, orientation, segments_cross,
    sort_clockwise, winding, Winding,
};
