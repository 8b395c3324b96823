//! Classification, regularization, and completion of 2D curve fragments.
//!
//! A batch of polylines flows through three stages, each returning a batch of
//! the same length and order:
//! 1. `line`: collapse straight paths to their endpoints.
//! 2. `symmetry`: mirror reflection-symmetric paths, else rotate
//!    rotation-symmetric ones.
//! 3. `completion`: validate each path as a simple curve.
//!
//! `shape` adds circle and rectangle fitting, available as an opt-in stage on
//! `pipeline::Pipeline`. No stage ever fails: a path a stage cannot handle is
//! passed through unchanged.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer the
//!   re-exports in `api` from binaries.

pub mod api;
pub mod completion;
pub mod curve;
pub mod error;
pub mod geom2;
pub mod line;
pub mod pipeline;
pub mod sample;
pub mod shape;
pub mod symmetry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, GeomResult};
pub use geom2::{GeomCfg, Path, PathCollection};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{GeomCfg, Path, PathCollection};
    pub use crate::pipeline::{PathReport, Pipeline, PipelineOutput};
    pub use crate::shape::ShapeClassification;
    pub use crate::symmetry::SymmetryKind;
    pub use nalgebra::Vector2 as Vec2;
}
