use nalgebra::Vector2;

/// Unit vector in the direction of `v`, or `None` if `|v| <= eps` (or non-finite).
#[inline]
pub fn try_normalize(v: Vector2<f64>, eps: f64) -> Option<Vector2<f64>> {
    let norm = v.norm();
    if !norm.is_finite() || norm <= eps {
        return None;
    }
    Some(v / norm)
}

/// Scalar projection of `v` onto the unit vector `u`.
#[inline]
pub fn projection(v: Vector2<f64>, u: Vector2<f64>) -> f64 {
    v.dot(&u)
}

#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Arithmetic mean of the points; `None` for an empty slice.
pub fn centroid(points: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vector2::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Mean of a slice of scalars (0.0 when empty).
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Component-wise `|a - b| <= eps`.
#[inline]
pub fn approx_eq_pt(a: Vector2<f64>, b: Vector2<f64>, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

/// Axis-aligned bounds `(min, max)`; `None` for an empty slice.
pub fn bounding_box(points: &[Vector2<f64>]) -> Option<(Vector2<f64>, Vector2<f64>)> {
    let first = *points.first()?;
    let bounds = points.iter().skip(1).fold((first, first), |(lo, hi), p| {
        (
            Vector2::new(lo.x.min(p.x), lo.y.min(p.y)),
            Vector2::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    });
    Some(bounds)
}
