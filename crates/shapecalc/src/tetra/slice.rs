//! Placement of a tetrahedron relative to the coordinate planes.
//!
//! - `find_base_plane`: first coordinate plane (XY, XZ, YZ) containing a face.
//! - `volume_ratio`: share of vertices strictly above / below a plane.
//!
//! `volume_ratio` is a vertex-count proxy, not a clipped volume: with one
//! vertex above and three on the plane it reports `{0.25, 0.0}`.

use std::fmt;
use std::str::FromStr;

use crate::cfg::{near_zero, EPSILON};
use crate::point::Point;

use super::volume::is_tetrahedron;

/// Coordinate plane, named by the two axes it contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoordinatePlane {
    XY,
    XZ,
    YZ,
}

impl CoordinatePlane {
    /// Search order used by [`find_base_plane`].
    pub const ALL: [CoordinatePlane; 3] =
        [CoordinatePlane::XY, CoordinatePlane::XZ, CoordinatePlane::YZ];

    /// Signed coordinate along the axis orthogonal to the plane (z, y, x).
    #[inline]
    pub fn orthogonal_coordinate(self, p: Point) -> f64 {
        match self {
            CoordinatePlane::XY => p.z,
            CoordinatePlane::XZ => p.y,
            CoordinatePlane::YZ => p.x,
        }
    }

    /// All points lie on the plane within epsilon.
    pub fn contains_all(self, points: &[Point]) -> bool {
        points
            .iter()
            .all(|&p| near_zero(self.orthogonal_coordinate(p)))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CoordinatePlane::XY => "XY",
            CoordinatePlane::XZ => "XZ",
            CoordinatePlane::YZ => "YZ",
        }
    }
}

impl fmt::Display for CoordinatePlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized plane name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlaneError(pub String);

impl fmt::Display for ParsePlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown coordinate plane {:?} (expected XY, XZ or YZ)", self.0)
    }
}

impl std::error::Error for ParsePlaneError {}

impl FromStr for CoordinatePlane {
    type Err = ParsePlaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XY" => Ok(CoordinatePlane::XY),
            "XZ" => Ok(CoordinatePlane::XZ),
            "YZ" => Ok(CoordinatePlane::YZ),
            _ => Err(ParsePlaneError(s.to_string())),
        }
    }
}

/// Fractions of vertices strictly above and strictly below a plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeRatio {
    pub above: f64,
    pub below: f64,
}

impl VolumeRatio {
    /// Returned for anything that is not a valid tetrahedron.
    pub const INVALID: VolumeRatio = VolumeRatio {
        above: 1.0,
        below: 0.0,
    };
}

/// First coordinate plane (XY, then XZ, then YZ) holding one of the four
/// faces, or `None` when there is none or the input is not a tetrahedron.
pub fn find_base_plane(vertices: &[Point]) -> Option<CoordinatePlane> {
    if !is_tetrahedron(vertices) {
        return None;
    }
    CoordinatePlane::ALL
        .into_iter()
        .find(|&plane| has_face_on(vertices, plane))
}

fn has_face_on(vertices: &[Point], plane: CoordinatePlane) -> bool {
    (0..vertices.len()).any(|skip| {
        let face: Vec<Point> = vertices
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != skip)
            .map(|(_, &p)| p)
            .collect();
        plane.contains_all(&face)
    })
}

/// Vertex distribution of a tetrahedron relative to `plane`.
///
/// - not a tetrahedron: [`VolumeRatio::INVALID`]
/// - all four strictly above: `{1, 0}`; all four strictly below: `{0, 1}`
/// - otherwise `{above / 4, below / 4}`; vertices within epsilon of the plane
///   count toward neither side.
pub fn volume_ratio(vertices: &[Point], plane: CoordinatePlane) -> VolumeRatio {
    if !is_tetrahedron(vertices) {
        return VolumeRatio::INVALID;
    }
    let coords = vertices.iter().map(|&p| plane.orthogonal_coordinate(p));
    let above = coords.clone().filter(|&d| d > EPSILON).count();
    let below = coords.filter(|&d| d < -EPSILON).count();
    match (above, below) {
        (4, _) => VolumeRatio {
            above: 1.0,
            below: 0.0,
        },
        (_, 4) => VolumeRatio {
            above: 0.0,
            below: 1.0,
        },
        _ => VolumeRatio {
            above: above as f64 / 4.0,
            below: below as f64 / 4.0,
        },
    }
}
