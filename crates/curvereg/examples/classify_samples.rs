//! Classify a few seeded sample paths and print what the pipeline did.
//!
//! Usage:
//!   cargo run -p curvereg --example classify_samples -- [noise]

use curvereg::api::{draw_batch, GeomCfg, Pipeline, SampleCfg, SampleShape};

fn main() {
    let noise: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0);
    let base = SampleCfg {
        noise,
        ..SampleCfg::default()
    };
    let shapes = [
        SampleCfg {
            shape: SampleShape::Line { points: 5 },
            ..base
        },
        base,
        SampleCfg {
            shape: SampleShape::Rectangle { rotated: false },
            ..base
        },
        SampleCfg {
            shape: SampleShape::Polyline { points: 6 },
            ..base
        },
    ];
    let paths = draw_batch(&shapes, 2025, shapes.len());
    let out = Pipeline::new(GeomCfg::default())
        .with_shape_fitting(true)
        .run(&paths);
    for r in &out.reports {
        println!(
            "path {}: {} points -> {} points, shape={}, symmetry={:?}, completed={}",
            r.index,
            r.input_len,
            r.output_len,
            r.shape.kind(),
            r.symmetry,
            r.completed
        );
    }
}
