//! Seeded samplers for rectangles and tetrahedra.
//!
//! Purpose
//! - Reproducible inputs for property tests and benchmarks.
//!
//! Model
//! - Rectangle: random centre in a box, side lengths in a range, optional
//!   rotation; vertices emitted in traversal order (counterclockwise).
//! - Tetrahedron: four vertices uniform in a cube, redrawn until the volume
//!   clears a floor.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::f64::consts::TAU;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;
use crate::tetra::volume;

/// Errors surfaced by the samplers.
#[derive(Debug)]
pub enum SampleError {
    InvalidParams { reason: String },
    Degenerate { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
            Self::Degenerate { reason } => write!(f, "degenerate sample: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Rectangle sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RectCfg {
    /// Side lengths are drawn from `[side_min, side_max]`.
    pub side_min: f64,
    pub side_max: f64,
    /// Centre is drawn from `[-centre_extent, centre_extent]²`.
    pub centre_extent: f64,
    /// Random rotation in [0, 2π); axis-aligned otherwise.
    pub rotate: bool,
    /// Reuse the first side length for the second.
    pub square: bool,
}

impl Default for RectCfg {
    fn default() -> Self {
        Self {
            side_min: 0.5,
            side_max: 5.0,
            centre_extent: 10.0,
            rotate: true,
            square: false,
        }
    }
}

impl RectCfg {
    fn validate(&self) -> Result<(), SampleError> {
        if !(self.side_min > 0.0 && self.side_min <= self.side_max) {
            return Err(SampleError::invalid(format!(
                "side range [{}, {}] must be positive and ordered",
                self.side_min, self.side_max
            )));
        }
        if !(self.centre_extent >= 0.0 && self.centre_extent.is_finite()) {
            return Err(SampleError::invalid("centre_extent must be finite and >= 0"));
        }
        Ok(())
    }
}

/// Draw a rectangle in traversal order.
pub fn draw_rectangle(cfg: RectCfg, tok: ReplayToken) -> Result<[Point; 4], SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let w = rng.gen_range(cfg.side_min..=cfg.side_max);
    let h = if cfg.square {
        w
    } else {
        rng.gen_range(cfg.side_min..=cfg.side_max)
    };
    let (cx, cy) = if cfg.centre_extent > 0.0 {
        (
            rng.gen_range(-cfg.centre_extent..=cfg.centre_extent),
            rng.gen_range(-cfg.centre_extent..=cfg.centre_extent),
        )
    } else {
        (0.0, 0.0)
    };
    let theta = if cfg.rotate { rng.gen::<f64>() * TAU } else { 0.0 };
    let (s, c) = theta.sin_cos();
    let corners = [(-w, -h), (w, -h), (w, h), (-w, h)];
    Ok(corners.map(|(dx, dy)| {
        let (dx, dy) = (dx / 2.0, dy / 2.0);
        Point::xy(cx + c * dx - s * dy, cy + s * dx + c * dy)
    }))
}

/// Tetrahedron sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TetraCfg {
    /// Vertices are drawn from `[-extent, extent]³`.
    pub extent: f64,
    /// Reject draws with volume at or below this floor.
    pub min_volume: f64,
    pub max_attempts: usize,
}

impl Default for TetraCfg {
    fn default() -> Self {
        Self {
            extent: 5.0,
            min_volume: 1e-3,
            max_attempts: 32,
        }
    }
}

/// Draw a tetrahedron whose volume exceeds `cfg.min_volume`.
pub fn draw_tetrahedron(cfg: TetraCfg, tok: ReplayToken) -> Result<[Point; 4], SampleError> {
    if !(cfg.extent > 0.0 && cfg.extent.is_finite()) {
        return Err(SampleError::invalid("extent must be finite and > 0"));
    }
    if cfg.max_attempts == 0 {
        return Err(SampleError::invalid("max_attempts must be >= 1"));
    }
    let mut rng = tok.to_std_rng();
    let e = cfg.extent;
    for _ in 0..cfg.max_attempts {
        let verts: [Point; 4] = std::array::from_fn(|_| {
            Point::new(
                rng.gen_range(-e..=e),
                rng.gen_range(-e..=e),
                rng.gen_range(-e..=e),
            )
        });
        if volume(&verts) > cfg.min_volume {
            return Ok(verts);
        }
    }
    Err(SampleError::Degenerate {
        reason: format!(
            "no draw above volume {} in {} attempts",
            cfg.min_volume, cfg.max_attempts
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quad::{area, is_rectangle, is_square};
    use crate::tetra::is_tetrahedron;

    #[test]
    fn same_token_same_draw() {
        let tok = ReplayToken::new(7, 3);
        let a = draw_rectangle(RectCfg::default(), tok).unwrap();
        let b = draw_rectangle(RectCfg::default(), tok).unwrap();
        assert_eq!(a, b);
        let c = draw_rectangle(RectCfg::default(), ReplayToken::new(7, 4)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn drawn_rectangles_classify() {
        for i in 0..64 {
            let r = draw_rectangle(RectCfg::default(), ReplayToken::new(11, i)).unwrap();
            assert!(is_rectangle(&r), "draw {i}: {r:?}");
            assert!(area(&r) > 0.0);
        }
        let cfg = RectCfg {
            square: true,
            ..RectCfg::default()
        };
        for i in 0..16 {
            let s = draw_rectangle(cfg, ReplayToken::new(5, i)).unwrap();
            assert!(is_square(&s), "draw {i}: {s:?}");
        }
    }

    #[test]
    fn drawn_tetrahedra_are_valid() {
        for i in 0..32 {
            let t = draw_tetrahedron(TetraCfg::default(), ReplayToken::new(1, i)).unwrap();
            assert!(is_tetrahedron(&t));
        }
    }

    #[test]
    fn bad_params_are_rejected() {
        let cfg = RectCfg {
            side_min: 2.0,
            side_max: 1.0,
            ..RectCfg::default()
        };
        assert!(matches!(
            draw_rectangle(cfg, ReplayToken::new(0, 0)),
            Err(SampleError::InvalidParams { .. })
        ));
        let cfg = TetraCfg {
            min_volume: f64::INFINITY,
            max_attempts: 2,
            ..TetraCfg::default()
        };
        assert!(matches!(
            draw_tetrahedron(cfg, ReplayToken::new(0, 0)),
            Err(SampleError::Degenerate { .. })
        ));
    }
}
