//! Straight-line detection and regularization.
//!
//! A path is a line when every interior point's offset from the start equals
//! its projection onto the start→end direction, per coordinate, within
//! `line_eps`. Paths whose start and end coincide fail closed.

use nalgebra::Vector2;

use crate::geom2::{approx_eq_pt, projection, try_normalize, GeomCfg, Path};

/// Collinearity test (needs >= 2 points and distinct endpoints).
pub fn is_straight_line(path: &[Vector2<f64>], cfg: &GeomCfg) -> bool {
    if path.len() < 2 {
        return false;
    }
    let start = path[0];
    let Some(dir) = try_normalize(path[path.len() - 1] - start, cfg.degenerate_eps) else {
        return false;
    };
    path[1..path.len() - 1].iter().all(|p| {
        let offset = p - start;
        approx_eq_pt(offset, dir * projection(offset, dir), cfg.line_eps)
    })
}

/// Collapse to the first and last point. Paths shorter than 2 are returned as-is.
pub fn regularize_line(path: &[Vector2<f64>]) -> Path {
    match (path.first(), path.last()) {
        (Some(a), Some(b)) if path.len() >= 2 => vec![*a, *b],
        _ => path.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn diagonal_is_line() {
        let cfg = GeomCfg::default();
        let p = vec![vector![0.0, 0.0], vector![0.5, 0.5], vector![1.0, 1.0]];
        assert!(is_straight_line(&p, &cfg));
    }

    #[test]
    fn bent_path_is_not_line() {
        let cfg = GeomCfg::default();
        let p = vec![vector![0.0, 0.0], vector![0.5, 0.6], vector![1.0, 1.0]];
        assert!(!is_straight_line(&p, &cfg));
    }

    #[test]
    fn deviation_inside_tolerance_is_line() {
        let cfg = GeomCfg::default();
        let p = vec![vector![0.0, 0.0], vector![5.0, 0.0005], vector![10.0, 0.0]];
        assert!(is_straight_line(&p, &cfg));
    }

    #[test]
    fn backtracking_collinear_points_still_count() {
        // Points beyond the endpoints are collinear too; the test is about direction only.
        let cfg = GeomCfg::default();
        let p = vec![vector![0.0, 0.0], vector![-1.0, 0.0], vector![2.0, 0.0]];
        assert!(is_straight_line(&p, &cfg));
    }

    #[test]
    fn coincident_endpoints_fail_closed() {
        let cfg = GeomCfg::default();
        assert!(!is_straight_line(&[vector![1.0, 1.0], vector![1.0, 1.0]], &cfg));
        let loop_path = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 0.0]];
        assert!(!is_straight_line(&loop_path, &cfg));
        assert!(!is_straight_line(&[vector![3.0, 4.0]], &cfg));
    }

    #[test]
    fn regularize_keeps_endpoints() {
        let p = vec![vector![0.0, 0.0], vector![0.5, 0.5], vector![1.0, 1.0]];
        let r = regularize_line(&p);
        assert_eq!(r, vec![vector![0.0, 0.0], vector![1.0, 1.0]]);
        assert_eq!(regularize_line(&r), r);
        assert_eq!(regularize_line(&[vector![2.0, 2.0]]), vec![vector![2.0, 2.0]]);
    }
}
