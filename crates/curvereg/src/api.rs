//! Curated internal API for binaries (UNSTABLE).
//!
//! Not a public API; breaking changes are expected. Binaries import from here
//! so stage names stay consistent across tools.

// Primitives
pub use crate::geom2::{
    centroid, distance, projection, try_normalize, GeomCfg, Path, PathCollection,
};
// Stages
pub use crate::completion::{complete_curve, Completion};
pub use crate::line::{is_straight_line, regularize_line};
pub use crate::pipeline::{
    complete_curves, detect_straight_lines, detect_symmetry, regularize_shapes, PathReport,
    Pipeline, PipelineOutput,
};
pub use crate::shape::{
    classify, fit_circle, is_circle, is_rectangle, regularize_circle, regularize_rectangle,
    CircleFit, ShapeClassification,
};
pub use crate::symmetry::{
    apply_symmetry, handle_reflection_symmetry, handle_rotation_symmetry, has_reflection_symmetry,
    has_rotation_symmetry, SymmetryKind,
};
// Samplers
pub use crate::sample::{draw_batch, draw_path, ReplayToken, SampleCfg, SampleShape};
