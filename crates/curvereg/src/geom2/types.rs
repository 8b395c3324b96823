//! Path aliases and the tolerance configuration used by all stages.

use nalgebra::Vector2;

/// Ordered polyline; order defines segment connectivity and drawing direction.
pub type Path = Vec<Vector2<f64>>;

/// Ordered batch of paths. Position is significant (renderers colour by index).
pub type PathCollection = Vec<Path>;

/// Geometry configuration (tolerances and iteration budgets).
///
/// All values are absolute, not scale-normalized. A config is fixed for the
/// duration of a run and passed by value into every stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Per-coordinate deviation allowed from the start→end line.
    pub line_eps: f64,
    /// Allowed |distance - radius| for circle classification.
    pub circle_eps: f64,
    /// Allowed mismatch between hypot(sides) and diagonals.
    pub rect_eps: f64,
    /// Per-coordinate tolerance for resampled curve equality.
    pub curve_eq_eps: f64,
    /// Number of equal arc-length samples used by curve equality.
    pub resample_count: usize,
    /// Number of evenly spaced angles in [0°, 360°] tried for rotation symmetry.
    pub rotation_steps: usize,
    /// Fixed rotation applied to rotation-symmetric paths, in degrees.
    pub rotation_handle_deg: f64,
    /// Iteration cap for the circle fit.
    pub fit_max_iter: usize,
    /// Step-size convergence threshold for the circle fit.
    pub fit_tol: f64,
    /// Lengths at or below this are treated as zero.
    pub degenerate_eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            line_eps: 1e-3,
            circle_eps: 1e-2,
            rect_eps: 1e-2,
            curve_eq_eps: 1e-2,
            resample_count: 100,
            rotation_steps: 36,
            rotation_handle_deg: 45.0,
            fit_max_iter: 100,
            fit_tol: 1e-12,
            degenerate_eps: 1e-12,
        }
    }
}
