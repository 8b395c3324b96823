//! Batch stages and the end-to-end pipeline.
//!
//! Every stage maps a `PathCollection` to a new collection of the same length
//! and order; a path that a stage cannot handle passes through unchanged.
//! Default order: lines → symmetry → completion. The optional shape stage
//! runs right after line detection.

use crate::completion::{complete_curve, Completion};
use crate::geom2::{GeomCfg, Path, PathCollection};
use crate::line::{is_straight_line, regularize_line};
use crate::shape::{classify, ShapeClassification};
use crate::symmetry::{apply_symmetry, SymmetryKind};

/// Replace straight paths by their endpoints.
pub fn detect_straight_lines(paths: &[Path], cfg: &GeomCfg) -> PathCollection {
    paths
        .iter()
        .map(|p| {
            if is_straight_line(p, cfg) {
                regularize_line(p)
            } else {
                p.clone()
            }
        })
        .collect()
}

/// Replace rectangles and circles by their canonical form.
pub fn regularize_shapes(paths: &[Path], cfg: &GeomCfg) -> PathCollection {
    paths
        .iter()
        .map(|p| classify(p, cfg).regularize(p))
        .collect()
}

pub fn detect_symmetry(paths: &[Path], cfg: &GeomCfg) -> PathCollection {
    paths.iter().map(|p| apply_symmetry(p, cfg).0).collect()
}

pub fn complete_curves(paths: &[Path], cfg: &GeomCfg) -> PathCollection {
    paths
        .iter()
        .map(|p| complete_curve(p, cfg).into_path())
        .collect()
}

/// What happened to one path on its way through the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct PathReport {
    pub index: usize,
    pub input_len: usize,
    pub output_len: usize,
    /// Classification of the input path. Always computed (one circle fit per
    /// path that is neither a line nor a rectangle), even with shape fitting off.
    pub shape: ShapeClassification,
    pub line_regularized: bool,
    pub shape_regularized: bool,
    pub symmetry: SymmetryKind,
    pub completed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PipelineOutput {
    pub paths: PathCollection,
    pub reports: Vec<PathReport>,
}

impl PipelineOutput {
    /// Number of paths each stage changed: (lines, shapes, symmetry).
    pub fn change_counts(&self) -> (usize, usize, usize) {
        let lines = self.reports.iter().filter(|r| r.line_regularized).count();
        let shapes = self.reports.iter().filter(|r| r.shape_regularized).count();
        let sym = self
            .reports
            .iter()
            .filter(|r| r.symmetry != SymmetryKind::None)
            .count();
        (lines, shapes, sym)
    }
}

/// Stateless pipeline; holds only the run's fixed configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pipeline {
    pub cfg: GeomCfg,
    pub fit_shapes: bool,
}

impl Pipeline {
    pub fn new(cfg: GeomCfg) -> Self {
        Self {
            cfg,
            fit_shapes: false,
        }
    }

    pub fn with_shape_fitting(mut self, on: bool) -> Self {
        self.fit_shapes = on;
        self
    }

    /// Run all stages; output has the same length and order as `paths`.
    pub fn run(&self, paths: &[Path]) -> PipelineOutput {
        let mut out = PipelineOutput {
            paths: Vec::with_capacity(paths.len()),
            reports: Vec::with_capacity(paths.len()),
        };
        for (index, input) in paths.iter().enumerate() {
            let (path, report) = self.run_one(index, input);
            out.paths.push(path);
            out.reports.push(report);
        }
        out
    }

    fn run_one(&self, index: usize, input: &Path) -> (Path, PathReport) {
        let cfg = &self.cfg;
        let shape = classify(input, cfg);

        let line_regularized = is_straight_line(input, cfg);
        let mut path = if line_regularized {
            regularize_line(input)
        } else {
            input.clone()
        };

        // a line-regularized input classifies as Line, so this never double-fits
        let shape_regularized = self.fit_shapes
            && matches!(
                shape,
                ShapeClassification::Circle { .. } | ShapeClassification::Rectangle { .. }
            );
        if shape_regularized {
            path = shape.regularize(&path);
        }

        let (path, symmetry) = apply_symmetry(&path, cfg);
        let completion = complete_curve(&path, cfg);
        let completed = completion.is_completed();
        if let Completion::Unchanged { reason, .. } = &completion {
            tracing::debug!(index, %reason, "path left as-is by completion");
        }
        let path = completion.into_path();

        let report = PathReport {
            index,
            input_len: input.len(),
            output_len: path.len(),
            shape,
            line_regularized,
            shape_regularized,
            symmetry,
            completed,
        };
        (path, report)
    }
}
