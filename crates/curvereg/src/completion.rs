//! Curve completion: validity filter over the continuous-curve view.
//!
//! A path that forms a valid simple curve is rebuilt from that curve; any
//! other path is returned untouched. Gaps are not bridged and nothing is
//! extrapolated, so for every input the coordinates come back unchanged; the
//! outcome only records whether the path validated.

use nalgebra::Vector2;

use crate::curve::Curve;
use crate::error::{GeomError, GeomResult};
use crate::geom2::{GeomCfg, Path};

#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    /// Rebuilt from a validated curve.
    Completed(Path),
    /// Left as-is; carries why validation failed.
    Unchanged { path: Path, reason: GeomError },
}

impl Completion {
    pub fn path(&self) -> &Path {
        match self {
            Completion::Completed(p) => p,
            Completion::Unchanged { path, .. } => path,
        }
    }

    pub fn into_path(self) -> Path {
        match self {
            Completion::Completed(p) => p,
            Completion::Unchanged { path, .. } => path,
        }
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, Completion::Completed(_))
    }
}

/// Build and validate the simple curve behind `path`.
pub fn validated_curve(path: &[Vector2<f64>], cfg: &GeomCfg) -> GeomResult<Curve> {
    let curve = Curve::new(path, cfg.degenerate_eps)?;
    curve.validate_simple(cfg.degenerate_eps)?;
    Ok(curve)
}

pub fn complete_curve(path: &[Vector2<f64>], cfg: &GeomCfg) -> Completion {
    if path.len() < 2 {
        return Completion::Unchanged {
            path: path.to_vec(),
            reason: GeomError::degenerate("completion needs at least two points"),
        };
    }
    match validated_curve(path, cfg) {
        Ok(curve) => Completion::Completed(curve.to_path()),
        Err(reason) => Completion::Unchanged {
            path: path.to_vec(),
            reason,
        },
    }
}
