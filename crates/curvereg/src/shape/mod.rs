//! Primitive shape fitting: circles (nonlinear least squares) and rectangles
//! (sorted-distance test + bounding box), plus a combined classifier.
//!
//! Classification order is line → rectangle → circle → irregular; the first
//! test that passes wins and carries its canonical parameters.

mod circle;
mod rect;

pub use circle::{fit_circle, is_circle, regularize_circle, sample_circle, CircleFit};
pub use rect::{bounding_rectangle, is_rectangle, regularize_rectangle};

use nalgebra::Vector2;

use crate::geom2::{GeomCfg, Path};
use crate::line::is_straight_line;

/// Primitive a path approximates, with canonical parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeClassification {
    Line {
        start: Vector2<f64>,
        end: Vector2<f64>,
    },
    Circle {
        center: Vector2<f64>,
        radius: f64,
    },
    /// Corners in (min,min) → (min,max) → (max,max) → (max,min) order.
    Rectangle { corners: [Vector2<f64>; 4] },
    Irregular,
}

impl ShapeClassification {
    /// Short label used in reports and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeClassification::Line { .. } => "line",
            ShapeClassification::Circle { .. } => "circle",
            ShapeClassification::Rectangle { .. } => "rectangle",
            ShapeClassification::Irregular => "irregular",
        }
    }

    /// Canonical path for this class; circles keep the input's point count.
    pub fn regularize(&self, path: &[Vector2<f64>]) -> Path {
        match self {
            ShapeClassification::Line { start, end } => vec![*start, *end],
            ShapeClassification::Circle { center, radius } => {
                sample_circle(*center, *radius, path.len())
            }
            ShapeClassification::Rectangle { corners } => corners.to_vec(),
            ShapeClassification::Irregular => path.to_vec(),
        }
    }
}

pub fn classify(path: &[Vector2<f64>], cfg: &GeomCfg) -> ShapeClassification {
    if path.len() < 2 {
        return ShapeClassification::Irregular;
    }
    if is_straight_line(path, cfg) {
        return ShapeClassification::Line {
            start: path[0],
            end: path[path.len() - 1],
        };
    }
    if is_rectangle(path, cfg) {
        if let Some(corners) = bounding_rectangle(path) {
            return ShapeClassification::Rectangle { corners };
        }
    }
    if let Some(fit) = circle::circle_params(path, cfg) {
        return ShapeClassification::Circle {
            center: fit.center,
            radius: fit.radius,
        };
    }
    ShapeClassification::Irregular
}
