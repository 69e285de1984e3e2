//! Tetrahedron volume and surface area.
//!
//! Volume is the scalar triple product `|AB · (AC × AD)| / 6`; surface area is
//! the sum of the four faces, each by Heron's formula on 3D edge lengths.

use crate::cfg::EPSILON;
use crate::point::Point;
use crate::vector::{cross, distance_3d, dot, subtract};

/// Faces as vertex-index triples; face `k` omits vertex `3 − k`.
pub const FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

/// `|AB · (AC × AD)| / 6`; zero for coplanar vertices or wrong arity.
pub fn volume(vertices: &[Point]) -> f64 {
    let [a, b, c, d] = match vertices {
        [a, b, c, d] => [*a, *b, *c, *d],
        _ => return 0.0,
    };
    let ab = subtract(b, a);
    let ac = subtract(c, a);
    let ad = subtract(d, a);
    dot(ab, cross(ac, ad)).abs() / 6.0
}

/// Heron's formula on the triangle `abc`.
///
/// A face whose semi-perimeter does not exceed its longest side by more than
/// `EPSILON` is flat and contributes `0.0`.
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    let ab = distance_3d(a, b);
    let ac = distance_3d(a, c);
    let bc = distance_3d(b, c);
    let s = (ab + ac + bc) / 2.0;
    if s - ab <= EPSILON || s - ac <= EPSILON || s - bc <= EPSILON {
        return 0.0;
    }
    let product = s * (s - ab) * (s - ac) * (s - bc);
    product.max(0.0).sqrt()
}

/// Sum of the four face areas; zero for wrong arity.
pub fn surface_area(vertices: &[Point]) -> f64 {
    if vertices.len() != 4 {
        return 0.0;
    }
    FACES
        .iter()
        .map(|&[i, j, k]| triangle_area(vertices[i], vertices[j], vertices[k]))
        .sum()
}

/// Exactly four vertices spanning a volume above `EPSILON`.
pub fn is_tetrahedron(vertices: &[Point]) -> bool {
    vertices.len() == 4 && volume(vertices) > EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_corner() -> [Point; 4] {
        [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn unit_corner_volume_and_area() {
        let t = unit_corner();
        assert!((volume(&t) - 1.0 / 6.0).abs() < 1e-12);
        let expected = 1.5 + 3f64.sqrt() / 2.0;
        assert!((surface_area(&t) - expected).abs() < 1e-12);
        assert!((surface_area(&t) - 2.366).abs() < 1e-3);
        assert!(is_tetrahedron(&t));
    }

    #[test]
    fn volume_ignores_vertex_order() {
        let [a, b, c, d] = unit_corner();
        let v = volume(&[a, b, c, d]);
        assert!((volume(&[b, a, c, d]) - v).abs() < 1e-15);
        assert!((volume(&[d, c, b, a]) - v).abs() < 1e-15);
    }

    #[test]
    fn coplanar_and_collinear_are_flat() {
        let square = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
        ];
        assert_eq!(volume(&square), 0.0);
        assert!(!is_tetrahedron(&square));

        let line = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(3.0, 0.0, 0.0),
        ];
        assert_eq!(volume(&line), 0.0);
        assert_eq!(surface_area(&line), 0.0);
        assert!(!is_tetrahedron(&line));
    }

    #[test]
    fn heron_guards_flat_triangles() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 1.0, 1.0);
        let c = Point::new(2.0, 2.0, 2.0);
        assert_eq!(triangle_area(a, b, c), 0.0);
        assert_eq!(triangle_area(a, a, b), 0.0);
        let right = triangle_area(a, Point::new(3.0, 0.0, 0.0), Point::new(0.0, 4.0, 0.0));
        assert!((right - 6.0).abs() < 1e-12);
    }

    #[test]
    fn wrong_arity_is_zero() {
        let t = unit_corner();
        assert_eq!(volume(&t[..3]), 0.0);
        assert_eq!(surface_area(&t[..3]), 0.0);
        assert!(!is_tetrahedron(&t[..3]));
        assert_eq!(volume(&[]), 0.0);
    }
}
