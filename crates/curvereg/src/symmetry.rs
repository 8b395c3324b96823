//! Reflective and rotational symmetry detection.
//!
//! Behavior notes (kept as-is, see DESIGN.md)
//! - `handle_reflection_symmetry` always mirrors across the y-axis, whichever
//!   axis matched.
//! - The rotation search includes 0° and 360°, so `has_rotation_symmetry` is
//!   true for every curve that can be built from > 2 points.
//! - `handle_rotation_symmetry` rotates by a fixed `rotation_handle_deg`
//!   regardless of which angle matched.

use nalgebra::Vector2;

use crate::curve::Curve;
use crate::error::{GeomError, GeomResult};
use crate::geom2::{GeomCfg, Path};

/// Which branch of the symmetry stage applied to a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymmetryKind {
    ReflectionX,
    ReflectionY,
    Rotation,
    None,
}

fn symmetric_curve(path: &[Vector2<f64>], cfg: &GeomCfg) -> GeomResult<Curve> {
    if path.len() <= 2 {
        return Err(GeomError::degenerate("symmetry needs more than two points"));
    }
    Curve::new(path, cfg.degenerate_eps)
}

/// First matching mirror axis: x-axis (negate y), then y-axis (negate x).
pub fn reflection_axis(path: &[Vector2<f64>], cfg: &GeomCfg) -> Option<SymmetryKind> {
    let curve = symmetric_curve(path, cfg).ok()?;
    let (n, eps) = (cfg.resample_count, cfg.curve_eq_eps);
    if curve.approx_eq(&curve.reflect_x(), n, eps) {
        Some(SymmetryKind::ReflectionX)
    } else if curve.approx_eq(&curve.reflect_y(), n, eps) {
        Some(SymmetryKind::ReflectionY)
    } else {
        None
    }
}

pub fn has_reflection_symmetry(path: &[Vector2<f64>], cfg: &GeomCfg) -> bool {
    reflection_axis(path, cfg).is_some()
}

/// Mirror across the y-axis (x → -x). Paths that cannot form a curve pass through.
pub fn handle_reflection_symmetry(path: &[Vector2<f64>], cfg: &GeomCfg) -> Path {
    match symmetric_curve(path, cfg) {
        Ok(curve) => curve.reflect_y().to_path(),
        Err(_) => path.to_vec(),
    }
}

/// Angles (degrees) tried by the rotation search: `linspace(0, 360, steps)`.
pub fn rotation_angles_deg(steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..steps)
            .map(|i| 360.0 * i as f64 / (steps - 1) as f64)
            .collect(),
    }
}

/// First angle (degrees) whose rotation about the centroid reproduces the curve.
pub fn rotation_match_deg(path: &[Vector2<f64>], cfg: &GeomCfg) -> Option<f64> {
    let curve = symmetric_curve(path, cfg).ok()?;
    let pivot = curve.centroid();
    rotation_angles_deg(cfg.rotation_steps).into_iter().find(|deg| {
        let rotated = curve.rotate_about(pivot, deg.to_radians());
        curve.approx_eq(&rotated, cfg.resample_count, cfg.curve_eq_eps)
    })
}

pub fn has_rotation_symmetry(path: &[Vector2<f64>], cfg: &GeomCfg) -> bool {
    rotation_match_deg(path, cfg).is_some()
}

/// Rotate by `rotation_handle_deg` counterclockwise about the centroid.
pub fn handle_rotation_symmetry(path: &[Vector2<f64>], cfg: &GeomCfg) -> Path {
    match symmetric_curve(path, cfg) {
        Ok(curve) => curve
            .rotate_about(curve.centroid(), cfg.rotation_handle_deg.to_radians())
            .to_path(),
        Err(_) => path.to_vec(),
    }
}

/// Symmetry stage for one path: reflection first, rotation only if no
/// reflection matched, otherwise unchanged.
pub fn apply_symmetry(path: &[Vector2<f64>], cfg: &GeomCfg) -> (Path, SymmetryKind) {
    if let Some(axis) = reflection_axis(path, cfg) {
        return (handle_reflection_symmetry(path, cfg), axis);
    }
    if has_rotation_symmetry(path, cfg) {
        return (handle_rotation_symmetry(path, cfg), SymmetryKind::Rotation);
    }
    (path.to_vec(), SymmetryKind::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::approx_eq_pt;
    use nalgebra::vector;

    fn asymmetric_hook() -> Vec<Vector2<f64>> {
        vec![
            vector![1.0, 0.5],
            vector![2.0, 3.0],
            vector![4.0, 3.5],
            vector![4.5, 1.0],
        ]
    }

    #[test]
    fn angle_grid_matches_linspace() {
        let a = rotation_angles_deg(36);
        assert_eq!(a.len(), 36);
        assert_eq!(a[0], 0.0);
        assert!((a[35] - 360.0).abs() < 1e-12);
        assert!((a[1] - 360.0 / 35.0).abs() < 1e-12);
    }

    #[test]
    fn mirror_about_y_axis_detected() {
        let cfg = GeomCfg::default();
        let v = vec![vector![-2.0, 3.0], vector![0.0, 1.0], vector![2.0, 3.0]];
        assert_eq!(reflection_axis(&v, &cfg), Some(SymmetryKind::ReflectionY));
        assert!(has_reflection_symmetry(&v, &cfg));
    }

    #[test]
    fn x_axis_match_still_reflects_across_y() {
        let cfg = GeomCfg::default();
        let arrow = vec![vector![1.0, 2.0], vector![3.0, 0.0], vector![1.0, -2.0]];
        assert_eq!(reflection_axis(&arrow, &cfg), Some(SymmetryKind::ReflectionX));
        let out = handle_reflection_symmetry(&arrow, &cfg);
        assert_eq!(
            out,
            vec![vector![-1.0, 2.0], vector![-3.0, 0.0], vector![-1.0, -2.0]]
        );
    }

    #[test]
    fn reflection_found_regardless_of_loop_start() {
        let cfg = GeomCfg::default();
        let from_vertex = vec![
            vector![2.0, 0.0],
            vector![0.0, 1.0],
            vector![0.0, -1.0],
            vector![2.0, 0.0],
        ];
        let from_mid_edge = vec![
            vector![1.0, 0.5],
            vector![0.0, 1.0],
            vector![0.0, -1.0],
            vector![2.0, 0.0],
            vector![1.0, 0.5],
        ];
        for tri in [from_vertex, from_mid_edge] {
            assert_eq!(reflection_axis(&tri, &cfg), Some(SymmetryKind::ReflectionX));
            assert_eq!(apply_symmetry(&tri, &cfg).1, SymmetryKind::ReflectionX);
        }
    }

    #[test]
    fn no_reflection_for_asymmetric_path() {
        let cfg = GeomCfg::default();
        assert!(!has_reflection_symmetry(&asymmetric_hook(), &cfg));
    }

    #[test]
    fn rotation_search_always_matches_identity() {
        let cfg = GeomCfg::default();
        let hook = asymmetric_hook();
        assert!(has_rotation_symmetry(&hook, &cfg));
        assert_eq!(rotation_match_deg(&hook, &cfg), Some(0.0));
    }

    #[test]
    fn rotation_handler_turns_45_degrees_about_centroid() {
        let cfg = GeomCfg::default();
        let hook = asymmetric_hook();
        let out = handle_rotation_symmetry(&hook, &cfg);
        assert_eq!(out.len(), hook.len());
        let c = crate::geom2::centroid(&hook).unwrap();
        let c_out = crate::geom2::centroid(&out).unwrap();
        assert!(approx_eq_pt(c, c_out, 1e-12));
        let before = hook[0] - c;
        let after = out[0] - c;
        let turned = after.y.atan2(after.x) - before.y.atan2(before.x);
        let turned = turned.rem_euclid(std::f64::consts::TAU);
        assert!((turned - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert!((after.norm() - before.norm()).abs() < 1e-12);
    }

    #[test]
    fn apply_dispatch_order() {
        let cfg = GeomCfg::default();
        let v = vec![vector![-2.0, 3.0], vector![0.0, 1.0], vector![2.0, 3.0]];
        let (out, kind) = apply_symmetry(&v, &cfg);
        assert_eq!(kind, SymmetryKind::ReflectionY);
        assert_eq!(out, vec![vector![2.0, 3.0], vector![0.0, 1.0], vector![-2.0, 3.0]]);

        let (_, kind) = apply_symmetry(&asymmetric_hook(), &cfg);
        assert_eq!(kind, SymmetryKind::Rotation);
    }

    #[test]
    fn short_or_degenerate_paths_pass_through() {
        let cfg = GeomCfg::default();
        let two = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
        assert_eq!(apply_symmetry(&two, &cfg), (two.clone(), SymmetryKind::None));
        let stuck = vec![vector![1.0, 1.0]; 3];
        assert!(!has_reflection_symmetry(&stuck, &cfg));
        assert!(!has_rotation_symmetry(&stuck, &cfg));
        assert_eq!(handle_rotation_symmetry(&stuck, &cfg), stuck);
    }
}
