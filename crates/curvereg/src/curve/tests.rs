use super::*;
use nalgebra::vector;

const EPS: f64 = 1e-9;

fn square_loop() -> Vec<Vector2<f64>> {
    vec![
        vector![1.0, 1.0],
        vector![-1.0, 1.0],
        vector![-1.0, -1.0],
        vector![1.0, -1.0],
        vector![1.0, 1.0],
    ]
}

#[test]
fn new_rejects_degenerate_paths() {
    assert!(matches!(
        Curve::new(&[vector![0.0, 0.0]], EPS),
        Err(GeomError::DegenerateInput { .. })
    ));
    assert!(matches!(
        Curve::new(&[vector![1.0, 1.0], vector![1.0, 1.0]], EPS),
        Err(GeomError::InvalidGeometry { .. })
    ));
    assert!(Curve::new(&[vector![0.0, f64::INFINITY], vector![1.0, 1.0]], EPS).is_err());
}

#[test]
fn resample_hits_endpoints_and_midpoints() {
    let c = Curve::new(&[vector![0.0, 0.0], vector![2.0, 0.0], vector![2.0, 2.0]], EPS).unwrap();
    assert!((c.length() - 4.0).abs() < 1e-12);
    let s = c.resample(5);
    assert_eq!(s.len(), 5);
    assert!(approx_eq_pt(s[0], vector![0.0, 0.0], 1e-12));
    assert!(approx_eq_pt(s[1], vector![1.0, 0.0], 1e-12));
    assert!(approx_eq_pt(s[2], vector![2.0, 0.0], 1e-12));
    assert!(approx_eq_pt(s[3], vector![2.0, 1.0], 1e-12));
    assert!(approx_eq_pt(s[4], vector![2.0, 2.0], 1e-12));
}

#[test]
fn resample_is_parametrization_independent() {
    // Extra collinear vertex does not change the sampled geometry.
    let a = Curve::new(&[vector![0.0, 0.0], vector![3.0, 0.0]], EPS).unwrap();
    let b = Curve::new(&[vector![0.0, 0.0], vector![0.4, 0.0], vector![3.0, 0.0]], EPS).unwrap();
    assert!(a.approx_eq(&b, 50, 1e-9));
}

#[test]
fn reversed_open_curve_is_equal() {
    let v = Curve::new(&[vector![-1.0, 1.0], vector![0.0, 0.0], vector![1.0, 1.0]], EPS).unwrap();
    let mirrored = v.reflect_y();
    // Mirroring the V swaps its traversal direction only.
    assert!(approx_eq_pt(mirrored.points()[0], vector![1.0, 1.0], 1e-12));
    assert!(v.approx_eq(&mirrored, 64, 1e-9));
}

#[test]
fn closed_curve_equal_under_other_start_vertex() {
    let sq = Curve::new(&square_loop(), EPS).unwrap();
    assert!(sq.is_closed(EPS));
    let mirrored = sq.reflect_y();
    assert!(sq.approx_eq(&mirrored, 80, 1e-9));
    let mirrored_x = sq.reflect_x();
    assert!(sq.approx_eq(&mirrored_x, 80, 1e-9));
}

#[test]
fn closed_curve_equal_when_loop_starts_mid_edge() {
    // isosceles triangle, symmetric about the x-axis, starting halfway along an edge
    let tri = Curve::new(
        &[
            vector![1.0, 0.5],
            vector![0.0, 1.0],
            vector![0.0, -1.0],
            vector![2.0, 0.0],
            vector![1.0, 0.5],
        ],
        EPS,
    )
    .unwrap();
    assert!(tri.approx_eq(&tri.reflect_x(), 100, 1e-6));
    assert!(tri.reflect_x().approx_eq(&tri, 100, 1e-6));
    assert!(!tri.approx_eq(&tri.reflect_y(), 100, 1e-6));
}

#[test]
fn asymmetric_curve_differs_from_its_mirror() {
    let l = Curve::new(&[vector![1.0, 0.0], vector![1.0, 3.0], vector![2.0, 3.0]], EPS).unwrap();
    assert!(!l.approx_eq(&l.reflect_y(), 64, 1e-6));
    assert!(!l.approx_eq(&l.reflect_x(), 64, 1e-6));
}

#[test]
fn rotate_about_centroid_quarter_turn() {
    let sq = Curve::new(&square_loop(), EPS).unwrap();
    let c = sq.centroid();
    let r = sq.rotate_about(c, std::f64::consts::FRAC_PI_2);
    // The centroid counts the repeated closing vertex, so it is (0.2, 0.2).
    assert!(approx_eq_pt(c, vector![0.2, 0.2], 1e-12));
    let expected = c + Rotation2::new(std::f64::consts::FRAC_PI_2) * (vector![1.0, 1.0] - c);
    assert!(approx_eq_pt(r.points()[0], expected, 1e-12));
    assert!((r.length() - sq.length()).abs() < 1e-12);
}

#[test]
fn validate_simple_accepts_loops_and_open_chains() {
    let sq = Curve::new(&square_loop(), EPS).unwrap();
    assert!(sq.validate_simple(EPS).is_ok());
    let chain =
        Curve::new(&[vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0]], EPS).unwrap();
    assert!(chain.validate_simple(EPS).is_ok());
}

#[test]
fn validate_simple_rejects_bowtie() {
    let bowtie = Curve::new(
        &[
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![0.0, 0.0],
        ],
        EPS,
    )
    .unwrap();
    assert_eq!(
        bowtie.validate_simple(EPS),
        Err(GeomError::InvalidGeometry { reason: "self-intersection" })
    );
}

#[test]
fn validate_simple_rejects_repeated_vertex_and_spike() {
    let dup = Curve::new(&[vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 0.0]], EPS).unwrap();
    assert!(dup.validate_simple(EPS).is_err());
    let spike =
        Curve::new(&[vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 0.0]], EPS).unwrap();
    assert!(spike.validate_simple(EPS).is_err());
}
