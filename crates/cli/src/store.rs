//! In-memory shape store with a per-id metrics cache.
//!
//! Invariants:
//! - Ids are unique; `insert` refuses a shape whose id is already stored.
//! - Every stored id has a cached [`ShapeMetrics`] computed from its current
//!   points; `insert` and `update` recompute it, `remove` drops it.
//! - Range filters on metrics read the cache only; a shape whose row lacks the
//!   metric (e.g. volume of a rectangle) never matches.

use std::cmp::Ordering;
use std::collections::HashMap;

use clap::ValueEnum;
use shapecalc::Point;
use tracing::warn;

use crate::analysis::{analyze, ShapeMetrics};
use crate::record::Shape;

/// Inclusive range `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Selection criteria for [`ShapeStore::query`].
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    Area(Range),
    Perimeter(Range),
    Volume(Range),
    SurfaceArea(Range),
    /// Some vertex's distance from the origin falls in the range.
    Distance(Range),
    /// Every vertex lies in quadrant 1..=4 (axes included).
    Quadrant(u8),
    /// Conjunction; empty matches everything.
    All(Vec<Filter>),
}

impl Filter {
    pub fn matches(&self, shape: &Shape, metrics: Option<&ShapeMetrics>) -> bool {
        let cached = |get: fn(&ShapeMetrics) -> Option<f64>, r: &Range| {
            metrics.and_then(get).is_some_and(|v| r.contains(v))
        };
        match self {
            Filter::Area(r) => cached(|m| m.area, r),
            Filter::Perimeter(r) => cached(|m| m.perimeter, r),
            Filter::Volume(r) => cached(|m| m.volume, r),
            Filter::SurfaceArea(r) => cached(|m| m.surface_area, r),
            Filter::Distance(r) => shape.points.iter().any(|p| r.contains(p.norm())),
            Filter::Quadrant(q) => {
                !shape.points.is_empty() && shape.points.iter().all(|&p| in_quadrant(p, *q))
            }
            Filter::All(fs) => fs.iter().all(|f| f.matches(shape, metrics)),
        }
    }
}

fn in_quadrant(p: Point, q: u8) -> bool {
    match q {
        1 => p.x >= 0.0 && p.y >= 0.0,
        2 => p.x <= 0.0 && p.y >= 0.0,
        3 => p.x <= 0.0 && p.y <= 0.0,
        4 => p.x >= 0.0 && p.y <= 0.0,
        _ => false,
    }
}

/// Orderings for [`ShapeStore::sorted`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Numeric id; non-numeric ids sort after numeric ones, lexically.
    Id,
    Name,
    /// x of the first point.
    X,
    /// y of the first point.
    Y,
}

impl SortKey {
    pub fn compare(self, a: &Shape, b: &Shape) -> Ordering {
        match self {
            SortKey::Id => match (a.id.parse::<i64>(), b.id.parse::<i64>()) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                (Ok(_), Err(_)) => Ordering::Less,
                (Err(_), Ok(_)) => Ordering::Greater,
                (Err(_), Err(_)) => a.id.cmp(&b.id),
            },
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::X => first_coord(a, |p| p.x)
                .partial_cmp(&first_coord(b, |p| p.x))
                .unwrap_or(Ordering::Equal),
            SortKey::Y => first_coord(a, |p| p.y)
                .partial_cmp(&first_coord(b, |p| p.y))
                .unwrap_or(Ordering::Equal),
        }
    }
}

fn first_coord(s: &Shape, get: fn(Point) -> f64) -> f64 {
    s.first_point().map(get).unwrap_or(f64::NAN)
}

/// Shapes in insertion order plus their cached metrics.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    metrics: HashMap<String, ShapeMetrics>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Append a shape and cache its metrics; `false` (store unchanged) if the
    /// id is taken.
    pub fn insert(&mut self, shape: Shape) -> bool {
        if self.metrics.contains_key(&shape.id) {
            return false;
        }
        self.metrics.insert(shape.id.clone(), analyze(&shape));
        self.shapes.push(shape);
        true
    }

    /// Replace the points of the shape with `id`; recomputes its metrics.
    pub fn update(&mut self, id: &str, points: Vec<Point>) -> bool {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        shape.points = points;
        self.metrics.insert(shape.id.clone(), analyze(shape));
        true
    }

    /// Remove the shape with `id` and its cached metrics.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.shapes.iter().position(|s| s.id == id) {
            Some(idx) => {
                self.shapes.remove(idx);
                self.metrics.remove(id);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn by_name(&self, name: &str) -> Vec<&Shape> {
        self.shapes.iter().filter(|s| s.name == name).collect()
    }

    pub fn all(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn metrics(&self, id: &str) -> Option<&ShapeMetrics> {
        self.metrics.get(id)
    }

    pub fn query(&self, filter: &Filter) -> Vec<&Shape> {
        self.shapes
            .iter()
            .filter(|s| filter.matches(s, self.metrics.get(&s.id)))
            .collect()
    }

    /// Stable sort of a view; the store keeps insertion order.
    pub fn sorted(&self, key: SortKey) -> Vec<&Shape> {
        let mut view: Vec<&Shape> = self.shapes.iter().collect();
        view.sort_by(|a, b| key.compare(a, b));
        view
    }
}

impl FromIterator<Shape> for ShapeStore {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        let mut store = ShapeStore::new();
        for s in iter {
            let (id, name) = (s.id.clone(), s.name.clone());
            if !store.insert(s) {
                warn!(id = %id, name = %name, "duplicate id; shape skipped");
            }
        }
        store
    }
}
