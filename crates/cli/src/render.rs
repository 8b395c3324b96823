//! Vector rendering of a path collection.
//!
//! `layout` turns paths into a `Drawing` (canvas size + coloured strokes);
//! the SVG writer and the rasterizer both consume that drawing, so the two
//! outputs always agree on colours, closing, and canvas size.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use curvereg::Path as CurvePath;

use crate::config::{PaletteColor, RenderStyle};

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: PaletteColor,
    pub points: Vec<(f64, f64)>,
    /// Draw a closing segment back to the first point.
    pub closed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Drawing {
    pub width: u32,
    pub height: u32,
    pub stroke_width: f64,
    pub strokes: Vec<Stroke>,
}

/// Canvas = max coordinate grown by `padding`, truncated to whole pixels.
/// Path `i` gets palette colour `i`; empty paths consume a colour but draw nothing.
pub fn layout(paths: &[CurvePath], style: &RenderStyle) -> Drawing {
    let (mut w, mut h) = (0.0f64, 0.0f64);
    for p in paths.iter().flatten() {
        w = w.max(p.x);
        h = h.max(p.y);
    }
    let grow = |v: f64| (v + style.padding * v).max(0.0) as u32;
    let strokes = paths
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_empty())
        .map(|(i, p)| Stroke {
            color: style.palette.color(i).clone(),
            points: p.iter().map(|v| (v.x, v.y)).collect(),
            // exact comparison: near-equal endpoints still get a closing segment
            closed: p[0] != p[p.len() - 1],
        })
        .collect();
    Drawing {
        width: grow(w),
        height: grow(h),
        stroke_width: style.stroke_width,
        strokes,
    }
}

/// SVG path data of one stroke: `M x y L x y ... [Z]`.
struct PathData<'a>(&'a Stroke);

impl fmt::Display for PathData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, (x, y)) in self.0.points.iter().enumerate() {
            if k == 0 {
                write!(f, "M {x} {y}")?;
            } else {
                write!(f, " L {x} {y}")?;
            }
        }
        if self.0.closed {
            f.write_str(" Z")?;
        }
        Ok(())
    }
}

impl Stroke {
    pub fn path_data(&self) -> String {
        PathData(self).to_string()
    }
}

/// The SVG document.
impl fmt::Display for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"utf-8\" ?>")?;
        write!(
            f,
            "<svg baseProfile=\"tiny\" height=\"{}\" version=\"1.2\" width=\"{}\" \
             xmlns=\"http://www.w3.org/2000/svg\"><g>",
            self.height, self.width
        )?;
        for s in &self.strokes {
            write!(
                f,
                "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />",
                PathData(s),
                s.color.name,
                self.stroke_width
            )?;
        }
        writeln!(f, "</g></svg>")
    }
}

impl Drawing {
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

pub fn write_svg(drawing: &Drawing, out: &Path) -> Result<()> {
    std::fs::write(out, drawing.to_svg()).with_context(|| format!("writing {}", out.display()))
}
