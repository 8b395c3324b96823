//! Seeded sample paths for tests, benches, and demos.
//!
//! Model
//! - Each draw is a primitive (line, arc, rectangle outline, free polyline)
//!   with optional uniform noise added per coordinate.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so any sample in a batch can be regenerated on its own.

use nalgebra::{Rotation2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::{Path, PathCollection};

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
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Primitive to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleShape {
    /// Straight segment with `points` evenly spaced vertices.
    Line { points: usize },
    /// Arc of `sweep` radians (TAU gives a closed circle).
    Arc { points: usize, sweep: f64 },
    /// Four-corner rectangle, optionally rotated by a random angle.
    Rectangle { rotated: bool },
    /// Random walk with `points` vertices.
    Polyline { points: usize },
}

#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub shape: SampleShape,
    /// Half-width of uniform per-coordinate noise.
    pub noise: f64,
    /// Shapes are placed inside `[0, extent]²`.
    pub extent: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            shape: SampleShape::Arc {
                points: 32,
                sweep: std::f64::consts::TAU,
            },
            noise: 0.0,
            extent: 100.0,
        }
    }
}

/// Draw one path. The result has at least two points.
pub fn draw_path(cfg: SampleCfg, tok: ReplayToken) -> Path {
    let mut rng = tok.to_std_rng();
    let extent = cfg.extent.max(1e-6);
    let center = Vector2::new(
        rng.gen_range(0.25..0.75) * extent,
        rng.gen_range(0.25..0.75) * extent,
    );
    let size = rng.gen_range(0.1..0.25) * extent;
    let mut path: Path = match cfg.shape {
        SampleShape::Line { points } => {
            let n = points.max(2);
            let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
            let half = Vector2::new(theta.cos(), theta.sin()) * size;
            (0..n)
                .map(|i| center - half + half * (2.0 * i as f64 / (n - 1) as f64))
                .collect()
        }
        SampleShape::Arc { points, sweep } => {
            let n = points.max(2);
            let phase: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
            (0..n)
                .map(|i| {
                    let t = phase + sweep * i as f64 / (n - 1) as f64;
                    center + Vector2::new(t.cos(), t.sin()) * size
                })
                .collect()
        }
        SampleShape::Rectangle { rotated } => {
            let aspect = rng.gen_range(0.4..1.0);
            let half = Vector2::new(size, size * aspect);
            let rot = Rotation2::new(if rotated {
                rng.gen::<f64>() * std::f64::consts::FRAC_PI_2
            } else {
                0.0
            });
            [(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)]
                .iter()
                .map(|&(sx, sy)| center + rot * Vector2::new(sx * half.x, sy * half.y))
                .collect()
        }
        SampleShape::Polyline { points } => {
            let n = points.max(2);
            let step = size / 2.0;
            let mut p = center;
            (0..n)
                .map(|_| {
                    let current = p;
                    p += Vector2::new(rng.gen_range(-step..step), rng.gen_range(-step..step));
                    current
                })
                .collect()
        }
    };
    if cfg.noise > 0.0 {
        for p in &mut path {
            p.x += rng.gen_range(-cfg.noise..cfg.noise);
            p.y += rng.gen_range(-cfg.noise..cfg.noise);
        }
    }
    path
}

/// Draw `count` paths with tokens `(seed, 0..count)`, cycling through `shapes`.
pub fn draw_batch(shapes: &[SampleCfg], seed: u64, count: usize) -> PathCollection {
    if shapes.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|i| draw_path(shapes[i % shapes.len()], ReplayToken::new(seed, i as u64)))
        .collect()
}
