//! Circle fit by damped Gauss–Newton on the radial residuals.
//!
//! Model
//! - Residual `r_i(c) = |p_i - c| - mean_j |p_j - c|`; we minimize `Σ r_i²`
//!   starting at the centroid. The radius is the mean distance at the final
//!   center.
//! - Steps use Levenberg damping on the 2×2 normal equations; a step is kept
//!   only if it does not increase the cost.
//! - Hitting the iteration cap, or stalling with a non-vanishing gradient,
//!   ends the search with the best center seen so far (`converged = false`);
//!   it never errors.

use nalgebra::{Matrix2, Vector2};

use crate::error::{GeomError, GeomResult};
use crate::geom2::{centroid, mean, GeomCfg, Path};

/// Result of `fit_circle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleFit {
    pub center: Vector2<f64>,
    pub radius: f64,
    pub iterations: usize,
    pub converged: bool,
}

impl CircleFit {
    /// `Err(FitNonConvergence)` if the solver stopped on its budget.
    pub fn require_converged(self) -> GeomResult<Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(GeomError::FitNonConvergence {
                iterations: self.iterations,
            })
        }
    }
}

fn distances(points: &[Vector2<f64>], c: Vector2<f64>) -> Vec<f64> {
    points.iter().map(|p| (p - c).norm()).collect()
}

fn cost(points: &[Vector2<f64>], c: Vector2<f64>) -> f64 {
    let d = distances(points, c);
    let m = mean(&d);
    d.iter().map(|di| (di - m) * (di - m)).sum()
}

/// Fit a circle; errors only on empty or non-finite input.
pub fn fit_circle(points: &[Vector2<f64>], cfg: &GeomCfg) -> GeomResult<CircleFit> {
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(GeomError::invalid("non-finite coordinate"));
    }
    let mut c = centroid(points).ok_or(GeomError::degenerate("circle fit on empty path"))?;
    let mut current = cost(points, c);
    let mut lambda = 1e-3;
    let mut converged = false;
    let mut iterations = 0;

    while iterations < cfg.fit_max_iter {
        iterations += 1;
        let d = distances(points, c);
        let m = mean(&d);
        // unit directions p_i - c; zero for points sitting on the center
        let units: Vec<Vector2<f64>> = points
            .iter()
            .zip(&d)
            .map(|(p, &di)| {
                if di > cfg.degenerate_eps {
                    (p - c) / di
                } else {
                    Vector2::zeros()
                }
            })
            .collect();
        let mean_u = units.iter().fold(Vector2::zeros(), |acc, u| acc + u) / units.len() as f64;
        let mut jtj = Matrix2::zeros();
        let mut jtr = Vector2::zeros();
        for (u, &di) in units.iter().zip(&d) {
            let row = mean_u - u;
            jtj += row * row.transpose();
            jtr += row * (di - m);
        }
        let grad = jtr.norm();
        if grad <= cfg.fit_tol * (1.0 + m) {
            converged = true;
            break;
        }

        let mut accepted = None;
        for _ in 0..12 {
            let damped = jtj + Matrix2::from_diagonal(&jtj.diagonal()) * lambda;
            let Some(inv) = damped.try_inverse() else {
                lambda *= 10.0;
                continue;
            };
            let step = -(inv * jtr);
            let next = c + step;
            let next_cost = cost(points, next);
            if next_cost.is_finite() && next_cost <= current {
                accepted = Some((step, next, next_cost));
                lambda = (lambda * 0.1).max(1e-12);
                break;
            }
            lambda *= 10.0;
        }

        let Some((step, next, next_cost)) = accepted else {
            // no descent direction left at working precision
            converged = grad <= cfg.fit_tol.sqrt() * (1.0 + m);
            tracing::trace!(iterations, cost = current, grad, "circle fit stalled");
            break;
        };
        c = next;
        current = next_cost;
        tracing::trace!(iterations, cost = current, step = step.norm(), "circle fit step");
        if step.norm() <= cfg.fit_tol * (1.0 + c.norm()) {
            converged = true;
            break;
        }
    }

    let radius = mean(&distances(points, c));
    Ok(CircleFit {
        center: c,
        radius,
        iterations,
        converged,
    })
}

/// `n` points on the circle at `linspace(0, 2π, n)` (first and last coincide).
pub fn sample_circle(center: Vector2<f64>, radius: f64, n: usize) -> Path {
    let denom = n.saturating_sub(1).max(1) as f64;
    (0..n)
        .map(|i| {
            let t = std::f64::consts::TAU * i as f64 / denom;
            center + Vector2::new(t.cos(), t.sin()) * radius
        })
        .collect()
}

/// Every point lies on the fitted circle within `circle_eps`.
///
/// The test runs on whatever estimate the fit returns, converged or not.
/// A radius at or below `circle_eps` fails closed.
pub fn is_circle(path: &[Vector2<f64>], cfg: &GeomCfg) -> bool {
    circle_params(path, cfg).is_some()
}

pub(crate) fn circle_params(path: &[Vector2<f64>], cfg: &GeomCfg) -> Option<CircleFit> {
    let fit = fit_circle(path, cfg).ok()?;
    if !fit.converged {
        tracing::debug!(iterations = fit.iterations, "testing unconverged circle estimate");
    }
    if !fit.radius.is_finite() || fit.radius <= cfg.circle_eps {
        return None;
    }
    let on_circle = path
        .iter()
        .all(|p| ((p - fit.center).norm() - fit.radius).abs() <= cfg.circle_eps);
    on_circle.then_some(fit)
}

/// Resample the fitted circle with the input's point count.
/// Returns the input unchanged when no fit is available.
pub fn regularize_circle(path: &[Vector2<f64>], cfg: &GeomCfg) -> Path {
    if path.len() < 2 {
        return path.to_vec();
    }
    match fit_circle(path, cfg) {
        Ok(fit) => sample_circle(fit.center, fit.radius, path.len()),
        Err(err) => {
            tracing::debug!(%err, "circle regularization skipped");
            path.to_vec()
        }
    }
}
