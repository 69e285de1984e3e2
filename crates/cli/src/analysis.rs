//! Per-shape metrics rows.

use serde::Serialize;
use shapecalc::{quad, tetra};
use tracing::info;

use crate::record::{Shape, ShapeKind};

/// Metrics and classification for one shape; fields that do not apply to the
/// shape's kind are `None`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapeMetrics {
    pub id: String,
    pub name: String,
    pub kind: ShapeKind,
    /// Most specific label (`square`, `trapezoid`, `tetrahedron`, ...).
    pub label: String,
    pub area: Option<f64>,
    pub perimeter: Option<f64>,
    pub rectangle: Option<bool>,
    pub square: Option<bool>,
    pub rhombus: Option<bool>,
    pub trapezoid: Option<bool>,
    pub convex: Option<bool>,
    pub volume: Option<f64>,
    pub surface_area: Option<f64>,
    pub valid_tetrahedron: Option<bool>,
    pub base_plane: Option<String>,
    pub above_plane: Option<f64>,
    pub below_plane: Option<f64>,
}

impl ShapeMetrics {
    fn empty(shape: &Shape, label: String) -> Self {
        Self {
            id: shape.id.clone(),
            name: shape.name.clone(),
            kind: shape.kind,
            label,
            area: None,
            perimeter: None,
            rectangle: None,
            square: None,
            rhombus: None,
            trapezoid: None,
            convex: None,
            volume: None,
            surface_area: None,
            valid_tetrahedron: None,
            base_plane: None,
            above_plane: None,
            below_plane: None,
        }
    }
}

/// Compute the metrics row for `shape`.
pub fn analyze(shape: &Shape) -> ShapeMetrics {
    match shape.kind {
        ShapeKind::Rectangle => {
            let r = quad::classify(&shape.points);
            ShapeMetrics {
                area: Some(r.area),
                perimeter: Some(r.perimeter),
                rectangle: Some(r.rectangle),
                square: Some(r.square),
                rhombus: Some(r.rhombus),
                trapezoid: Some(r.trapezoid),
                convex: Some(r.convex),
                ..ShapeMetrics::empty(shape, r.kind().to_string())
            }
        }
        ShapeKind::Tetrahedron => {
            let r = tetra::classify(&shape.points);
            let label = if r.valid { "tetrahedron" } else { "degenerate" };
            ShapeMetrics {
                volume: Some(r.volume),
                surface_area: Some(r.surface_area),
                valid_tetrahedron: Some(r.valid),
                base_plane: r.base_plane.map(|p| p.to_string()),
                above_plane: Some(r.ratio.above),
                below_plane: Some(r.ratio.below),
                ..ShapeMetrics::empty(shape, label.to_string())
            }
        }
    }
}

/// Analyze and log one shape.
pub fn analyze_logged(shape: &Shape) -> ShapeMetrics {
    let m = analyze(shape);
    match m.kind {
        ShapeKind::Rectangle => info!(
            id = %m.id,
            name = %m.name,
            label = %m.label,
            area = m.area.unwrap_or_default(),
            perimeter = m.perimeter.unwrap_or_default(),
            "rectangle analysis completed"
        ),
        ShapeKind::Tetrahedron => info!(
            id = %m.id,
            name = %m.name,
            label = %m.label,
            volume = m.volume.unwrap_or_default(),
            surface_area = m.surface_area.unwrap_or_default(),
            base_plane = m.base_plane.as_deref().unwrap_or("none"),
            "tetrahedron analysis completed"
        ),
    }
    m
}
