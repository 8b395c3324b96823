//! PNG rasterization of a `Drawing` with tiny-skia (white background).

use std::path::Path;

use anyhow::{Context, Result};

use crate::render::{Drawing, Stroke};

fn stroke_to_path(stroke: &Stroke) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    let mut pts = stroke.points.iter();
    let &(x0, y0) = pts.next()?;
    pb.move_to(x0 as f32, y0 as f32);
    for &(x, y) in pts {
        pb.line_to(x as f32, y as f32);
    }
    if stroke.closed {
        pb.close();
    }
    pb.finish()
}

/// Draw every stroke; strokes that collapse to nothing are skipped.
pub fn rasterize(drawing: &Drawing) -> Result<tiny_skia::Pixmap> {
    let mut pixmap = tiny_skia::Pixmap::new(drawing.width.max(1), drawing.height.max(1))
        .with_context(|| format!("allocating {}x{} pixmap", drawing.width, drawing.height))?;
    pixmap.fill(tiny_skia::Color::WHITE);
    let style = tiny_skia::Stroke {
        width: drawing.stroke_width as f32,
        ..tiny_skia::Stroke::default()
    };
    for (i, stroke) in drawing.strokes.iter().enumerate() {
        let Some(path) = stroke_to_path(stroke) else {
            tracing::debug!(stroke = i, "nothing to rasterize");
            continue;
        };
        let [r, g, b] = stroke.color.rgb;
        let mut paint = tiny_skia::Paint::default();
        paint.set_color_rgba8(r, g, b, 255);
        paint.anti_alias = true;
        pixmap.stroke_path(&path, &paint, &style, tiny_skia::Transform::identity(), None);
    }
    Ok(pixmap)
}

pub fn write_png(drawing: &Drawing, out: &Path) -> Result<()> {
    let pixmap = rasterize(drawing)?;
    pixmap
        .save_png(out)
        .with_context(|| format!("writing {}", out.display()))
}
