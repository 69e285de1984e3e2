//! Tetrahedra: four vertices in R³.
//!
//! - `volume`: scalar triple product volume, Heron surface area, validity.
//! - `slice`: which coordinate plane carries a face, and the vertex split
//!   across a plane.

pub mod slice;
pub mod volume;

pub use slice::{find_base_plane, volume_ratio, CoordinatePlane, ParsePlaneError, VolumeRatio};
pub use volume::{is_tetrahedron, surface_area, triangle_area, volume, FACES};

use crate::point::Point;

/// Every metric for one tetrahedron.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TetraReport {
    pub volume: f64,
    pub surface_area: f64,
    pub valid: bool,
    pub base_plane: Option<CoordinatePlane>,
    /// Split against `base_plane`, or against XY when there is none.
    pub ratio: VolumeRatio,
}

/// Evaluate all metrics at once.
pub fn classify(vertices: &[Point]) -> TetraReport {
    let base_plane = find_base_plane(vertices);
    TetraReport {
        volume: volume(vertices),
        surface_area: surface_area(vertices),
        valid: is_tetrahedron(vertices),
        base_plane,
        ratio: volume_ratio(vertices, base_plane.unwrap_or(CoordinatePlane::XY)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_unit_corner() {
        let t = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        ];
        let r = classify(&t);
        assert!(r.valid);
        assert!((r.volume - 0.1667).abs() < 1e-4);
        assert!((r.surface_area - 2.366).abs() < 1e-3);
        assert_eq!(r.base_plane, Some(CoordinatePlane::XY));
        assert_eq!(r.ratio, VolumeRatio { above: 0.25, below: 0.0 });
    }

    #[test]
    fn report_for_flat_input() {
        let r = classify(&[Point::xy(0.0, 0.0), Point::xy(1.0, 0.0)]);
        assert!(!r.valid);
        assert_eq!(r.volume, 0.0);
        assert_eq!(r.surface_area, 0.0);
        assert_eq!(r.base_plane, None);
        assert_eq!(r.ratio, VolumeRatio::INVALID);
    }
}
