//! Continuous-curve view of a path (arc-length parametrized polyline).
//!
//! Purpose
//! - Give the symmetry and completion stages a single representation with a
//!   validity test, equal arc-length resampling, and isometries.
//! - Replace "shape equality" with a tolerance test on resampled geometry:
//!   two curves are equal when their samples at N equal arc-length steps
//!   agree coordinate-wise within eps, allowing reversed traversal and, for
//!   closed curves, a different start point anywhere on the loop.
//!
//! Validity
//! - `Curve::new` accepts any finite path with >= 2 points and positive length.
//! - `Curve::validate_simple` additionally rejects zero-length segments,
//!   folded-back adjacent segments, and crossings of non-adjacent segments.

use nalgebra::{Rotation2, Vector2};

use crate::error::{GeomError, GeomResult};
use crate::geom2::{approx_eq_pt, centroid, distance, Path};

#[derive(Clone, Debug)]
pub struct Curve {
    points: Vec<Vector2<f64>>,
    /// `cum[i]` = arc length from `points[0]` to `points[i]`.
    cum: Vec<f64>,
}

impl Curve {
    /// Build the curve; fails on < 2 points, non-finite coordinates, or zero length.
    pub fn new(points: &[Vector2<f64>], eps: f64) -> GeomResult<Self> {
        if points.len() < 2 {
            return Err(GeomError::degenerate("curve needs at least two points"));
        }
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(GeomError::invalid("non-finite coordinate"));
        }
        let curve = Self::from_points_unchecked(points.to_vec());
        if curve.length() <= eps {
            return Err(GeomError::invalid("zero-length curve"));
        }
        Ok(curve)
    }

    fn from_points_unchecked(points: Vec<Vector2<f64>>) -> Self {
        let mut cum = Vec::with_capacity(points.len());
        let mut acc = 0.0;
        cum.push(acc);
        for w in points.windows(2) {
            acc += distance(w[0], w[1]);
            cum.push(acc);
        }
        Self { points, cum }
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    /// Coordinate sequence of the curve as a fresh path.
    #[inline]
    pub fn to_path(&self) -> Path {
        self.points.clone()
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.cum.last().copied().unwrap_or(0.0)
    }

    /// First and last point coincide within `eps`.
    #[inline]
    pub fn is_closed(&self, eps: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => distance(*a, *b) <= eps,
            _ => false,
        }
    }

    /// Mean of the vertices.
    #[inline]
    pub fn centroid(&self) -> Vector2<f64> {
        centroid(&self.points).unwrap_or_else(Vector2::zeros)
    }

    /// Point at arc length `s` (clamped to `[0, length]`).
    pub fn point_at(&self, s: f64) -> Vector2<f64> {
        let s = s.clamp(0.0, self.length());
        // first index with cum[i] >= s
        let i = self.cum.partition_point(|&c| c < s);
        if i == 0 {
            return self.points[0];
        }
        if i >= self.points.len() {
            return self.points[self.points.len() - 1];
        }
        let seg = self.cum[i] - self.cum[i - 1];
        if seg <= 0.0 {
            return self.points[i];
        }
        let t = (s - self.cum[i - 1]) / seg;
        self.points[i - 1] + (self.points[i] - self.points[i - 1]) * t
    }

    /// `n` points at equal arc-length steps, both endpoints included.
    pub fn resample(&self, n: usize) -> Vec<Vector2<f64>> {
        let n = n.max(2);
        let step = self.length() / (n - 1) as f64;
        (0..n).map(|i| self.point_at(step * i as f64)).collect()
    }

    /// Apply a point map. Only used with isometries, so lengths stay positive.
    fn map<F: Fn(Vector2<f64>) -> Vector2<f64>>(&self, f: F) -> Curve {
        Curve::from_points_unchecked(self.points.iter().map(|&p| f(p)).collect())
    }

    /// Mirror across the x-axis (negate y).
    pub fn reflect_x(&self) -> Curve {
        self.map(|p| Vector2::new(p.x, -p.y))
    }

    /// Mirror across the y-axis (negate x).
    pub fn reflect_y(&self) -> Curve {
        self.map(|p| Vector2::new(-p.x, p.y))
    }

    /// Counterclockwise rotation by `angle` radians about `origin`.
    pub fn rotate_about(&self, origin: Vector2<f64>, angle: f64) -> Curve {
        let rot = Rotation2::new(angle);
        self.map(|p| origin + rot * (p - origin))
    }

    fn reversed(&self) -> Curve {
        let mut pts = self.points.clone();
        pts.reverse();
        Curve::from_points_unchecked(pts)
    }

    /// Same closed loop traversed from arc length `s`, cutting the edge there.
    fn reanchored_at(&self, s: f64) -> Curve {
        let m = self.points.len() - 1;
        // segment i spans cum[i]..cum[i + 1]
        let i = self.cum.partition_point(|&c| c <= s).clamp(1, m) - 1;
        let cut = self.point_at(s);
        let mut pts = Vec::with_capacity(m + 3);
        pts.push(cut);
        pts.extend_from_slice(&self.points[i + 1..m]);
        pts.extend_from_slice(&self.points[..=i]);
        pts.push(cut);
        Curve::from_points_unchecked(pts)
    }

    /// Arc-length positions on this curve within `eps` of `p`, one per segment.
    fn positions_near(&self, p: Vector2<f64>, eps: f64) -> Vec<f64> {
        self.points
            .windows(2)
            .zip(&self.cum)
            .filter_map(|(w, &s0)| {
                let seg = w[1] - w[0];
                let len2 = seg.norm_squared();
                let t = if len2 > 0.0 {
                    ((p - w[0]).dot(&seg) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let foot = w[0] + seg * t;
                approx_eq_pt(foot, p, eps).then(|| s0 + t * len2.sqrt())
            })
            .collect()
    }

    /// Tolerance-based geometric equality on `n` equal arc-length samples.
    ///
    /// Tries `other` forward and reversed; when both curves are closed, also
    /// re-cuts `other` at every point of it that lies on our start point,
    /// vertex or mid-edge.
    pub fn approx_eq(&self, other: &Curve, n: usize, eps: f64) -> bool {
        let ours = self.resample(n);
        let matches = |cand: &Curve| {
            cand.resample(n)
                .iter()
                .zip(&ours)
                .all(|(a, b)| approx_eq_pt(*a, *b, eps))
        };
        if matches(other) || matches(&other.reversed()) {
            return true;
        }
        if !(self.is_closed(eps) && other.is_closed(eps)) {
            return false;
        }
        other.positions_near(ours[0], eps).into_iter().any(|s| {
            let anchored = other.reanchored_at(s);
            matches(&anchored) || matches(&anchored.reversed())
        })
    }

    /// Reject zero-length segments, folded adjacent segments, and self-crossings.
    ///
    /// A closed curve may meet itself only at its shared start/end vertex.
    pub fn validate_simple(&self, eps: f64) -> GeomResult<()> {
        let segs: Vec<(Vector2<f64>, Vector2<f64>)> =
            self.points.windows(2).map(|w| (w[0], w[1])).collect();
        if segs.iter().any(|(a, b)| distance(*a, *b) <= eps) {
            return Err(GeomError::invalid("zero-length segment"));
        }
        let closed = self.is_closed(eps);
        let n = segs.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let adjacent = j == i + 1 || (closed && i == 0 && j == n - 1);
                if adjacent {
                    let (shared_a, other_a, other_b) = if j == i + 1 {
                        (segs[i].1, segs[i].0, segs[j].1)
                    } else {
                        (segs[i].0, segs[i].1, segs[j].0)
                    };
                    if folds_back(shared_a, other_a, other_b, eps) {
                        return Err(GeomError::invalid("adjacent segments overlap"));
                    }
                    continue;
                }
                if segments_intersect(segs[i], segs[j], eps) {
                    return Err(GeomError::invalid("self-intersection"));
                }
            }
        }
        Ok(())
    }
}

#[inline]
fn cross(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let oa = a - o;
    let ob = b - o;
    oa.x * ob.y - oa.y * ob.x
}

/// Segments `shared→a` and `shared→b` are collinear and point the same way.
fn folds_back(shared: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>, eps: f64) -> bool {
    let da = a - shared;
    let db = b - shared;
    let scale = da.norm() * db.norm();
    if scale <= eps {
        return false;
    }
    (da.x * db.y - da.y * db.x).abs() <= eps * scale && da.dot(&db) > 0.0
}

#[inline]
fn on_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>, eps: f64) -> bool {
    p.x >= a.x.min(b.x) - eps
        && p.x <= a.x.max(b.x) + eps
        && p.y >= a.y.min(b.y) - eps
        && p.y <= a.y.max(b.y) + eps
}

/// Closed-segment intersection test (touching counts).
fn segments_intersect(
    s: (Vector2<f64>, Vector2<f64>),
    t: (Vector2<f64>, Vector2<f64>),
    eps: f64,
) -> bool {
    let (p1, p2) = s;
    let (q1, q2) = t;
    let d1 = cross(q1, q2, p1);
    let d2 = cross(q1, q2, p2);
    let d3 = cross(p1, p2, q1);
    let d4 = cross(p1, p2, q2);
    if ((d1 > eps && d2 < -eps) || (d1 < -eps && d2 > eps))
        && ((d3 > eps && d4 < -eps) || (d3 < -eps && d4 > eps))
    {
        return true;
    }
    (d1.abs() <= eps && on_segment(p1, q1, q2, eps))
        || (d2.abs() <= eps && on_segment(p2, q1, q2, eps))
        || (d3.abs() <= eps && on_segment(q1, p1, p2, eps))
        || (d4.abs() <= eps && on_segment(q2, p1, p2, eps))
}

#[cfg(test)]
mod tests;
