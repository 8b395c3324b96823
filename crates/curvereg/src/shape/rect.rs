//! Rectangle check on sorted pairwise distances and bounding-box canonicalization.
//!
//! With the six pairwise distances sorted ascending, the two smallest are
//! taken as one side pair, the next two as the other side pair, and the two
//! largest as diagonals. The candidate passes when each side pair closes a
//! right triangle with its diagonal: `hypot(d0, d2) ≈ d4` and
//! `hypot(d1, d3) ≈ d5`. Point order is not inspected.
//!
//! Canonicalization only knows axis-aligned rectangles: a rotated rectangle
//! is replaced by its bounding box.

use nalgebra::Vector2;

use crate::error::{GeomError, GeomResult};
use crate::geom2::{bounding_box, distance, GeomCfg, Path};

fn sorted_distances(path: &[Vector2<f64>]) -> GeomResult<[f64; 6]> {
    if path.len() != 4 {
        return Err(GeomError::degenerate("rectangle needs exactly four points"));
    }
    let mut d = [0.0; 6];
    let mut k = 0;
    for i in 0..4 {
        for j in (i + 1)..4 {
            d[k] = distance(path[i], path[j]);
            k += 1;
        }
    }
    if d.iter().any(|x| !x.is_finite()) {
        return Err(GeomError::invalid("non-finite coordinate"));
    }
    d.sort_by(f64::total_cmp);
    Ok(d)
}

pub fn is_rectangle(path: &[Vector2<f64>], cfg: &GeomCfg) -> bool {
    let Ok(d) = sorted_distances(path) else {
        return false;
    };
    if d[0] <= cfg.degenerate_eps {
        return false;
    }
    (d[0].hypot(d[2]) - d[4]).abs() <= cfg.rect_eps
        && (d[1].hypot(d[3]) - d[5]).abs() <= cfg.rect_eps
}

/// Corners of the axis-aligned bounding box:
/// (min,min) → (min,max) → (max,max) → (max,min).
pub fn bounding_rectangle(path: &[Vector2<f64>]) -> Option<[Vector2<f64>; 4]> {
    let (lo, hi) = bounding_box(path)?;
    Some([
        Vector2::new(lo.x, lo.y),
        Vector2::new(lo.x, hi.y),
        Vector2::new(hi.x, hi.y),
        Vector2::new(hi.x, lo.y),
    ])
}

/// Bounding-box rectangle for 4-point paths; anything else is returned as-is.
pub fn regularize_rectangle(path: &[Vector2<f64>]) -> Path {
    if path.len() != 4 {
        return path.to_vec();
    }
    match bounding_rectangle(path) {
        Some(corners) => corners.to_vec(),
        None => path.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn axis_aligned_rectangle() {
        let cfg = GeomCfg::default();
        let p = vec![
            vector![0.0, 0.0],
            vector![0.0, 2.0],
            vector![3.0, 2.0],
            vector![3.0, 0.0],
        ];
        assert!(is_rectangle(&p, &cfg));
        assert_eq!(regularize_rectangle(&p), p);
    }

    #[test]
    fn point_order_is_not_inspected() {
        let cfg = GeomCfg::default();
        let crossed = vec![
            vector![0.0, 0.0],
            vector![3.0, 2.0],
            vector![0.0, 2.0],
            vector![3.0, 0.0],
        ];
        assert!(is_rectangle(&crossed, &cfg));
        assert_eq!(
            regularize_rectangle(&crossed),
            vec![
                vector![0.0, 0.0],
                vector![0.0, 2.0],
                vector![3.0, 2.0],
                vector![3.0, 0.0],
            ]
        );
    }

    #[test]
    fn rotated_rectangle_becomes_bounding_box() {
        let cfg = GeomCfg::default();
        let diamond = vec![
            vector![1.0, 0.0],
            vector![2.0, 1.0],
            vector![1.0, 2.0],
            vector![0.0, 1.0],
        ];
        assert!(is_rectangle(&diamond, &cfg));
        assert_eq!(
            regularize_rectangle(&diamond),
            vec![
                vector![0.0, 0.0],
                vector![0.0, 2.0],
                vector![2.0, 2.0],
                vector![2.0, 0.0],
            ]
        );
    }

    #[test]
    fn skewed_quad_is_not_rectangle() {
        let cfg = GeomCfg::default();
        let parallelogram = vec![
            vector![0.0, 0.0],
            vector![1.0, 2.0],
            vector![4.0, 2.0],
            vector![3.0, 0.0],
        ];
        assert!(!is_rectangle(&parallelogram, &cfg));
    }

    #[test]
    fn wrong_point_count_fails_closed() {
        let cfg = GeomCfg::default();
        let closed = vec![
            vector![0.0, 0.0],
            vector![0.0, 2.0],
            vector![3.0, 2.0],
            vector![3.0, 0.0],
            vector![0.0, 0.0],
        ];
        assert!(!is_rectangle(&closed, &cfg));
        assert_eq!(regularize_rectangle(&closed), closed);
        assert!(!is_rectangle(&[vector![1.0, 1.0]; 4], &cfg));
    }
}
