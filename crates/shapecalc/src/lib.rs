//! Metrics and classification for quadrilaterals and tetrahedra.
//!
//! Every function in this crate is total: wrong arity, coincident points,
//! collinear or coplanar input all resolve to `false`, `0.0` or a documented
//! sentinel. Nothing here panics on geometric input and nothing holds state.
//!
//! Layout
//! - `point`, `vector`: the value type and its arithmetic.
//! - `quad`: ordering predicates and the quadrilateral classifier.
//! - `tetra`: volume, surface area and coordinate-plane placement.
//! - `rand`: seeded samplers used by tests and benchmarks.
//!
//! All tolerance comparisons go through [`cfg::EPSILON`].

pub mod api;
pub mod cfg;
pub mod point;
pub mod quad;
pub mod rand;
pub mod tetra;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::EPSILON;
pub use point::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::EPSILON;
    pub use crate::point::Point;
    pub use crate::quad::{QuadKind, QuadReport};
    pub use crate::tetra::{CoordinatePlane, TetraReport, VolumeRatio};
    pub use nalgebra::Vector3 as Vec3;
}
