//! 2D geometry primitives shared by every detector.
//!
//! Purpose
//! - Keep the vector helpers (norm, unit vector, projection, centroid,
//!   distance) in one place so every stage agrees on tolerances.
//! - Paths are plain `Vec<Vector2<f64>>`; stages never mutate in place.
//!
//! Conventions
//! - Equality between geometric quantities is always eps-based; see `GeomCfg`.
//! - Normalizing a (near) zero vector is a `DegenerateInput` condition and is
//!   surfaced as `None`, never as a division by zero.

mod types;
mod util;

pub use types::{GeomCfg, Path, PathCollection};
pub use util::{
    approx_eq_pt, bounding_box, centroid, distance, mean, projection, try_normalize,
};
