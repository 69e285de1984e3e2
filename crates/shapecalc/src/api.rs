//! Flat re-export surface for callers that want every operation in one place.
//!
//! The module paths (`quad::ordering`, `tetra::slice`, ...) stay the canonical
//! homes; this list only saves imports.

// points and vectors
pub use crate::cfg::EPSILON;
pub use crate::point::Point;
pub use crate::vector::{
    angle_degrees, are_parallel, cross, distance_2d, distance_3d, dot, subtract, turn,
};
// quadrilaterals
pub use crate::quad::{
    area, classify as classify_quad, has_coincident_points, is_convex, is_rectangle, is_rhombus,
    is_self_intersecting, is_square, is_trapezoid, is_valid_order, orientation, perimeter,
    segments_cross, sort_clockwise, winding, QuadKind, QuadReport, Winding,
};
// tetrahedra
pub use crate::tetra::{
    classify as classify_tetra, find_base_plane, is_tetrahedron, surface_area, triangle_area,
    volume, volume_ratio, CoordinatePlane, TetraReport, VolumeRatio,
};
// samplers
pub use crate::rand::{
    draw_rectangle, draw_tetrahedron, RectCfg, ReplayToken, SampleError, TetraCfg,
};
