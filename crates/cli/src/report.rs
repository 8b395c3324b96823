//! Per-path report table (polars), written next to the rendered outputs.

use std::path::Path;

use anyhow::{Context, Result};
use curvereg::pipeline::PathReport;
use curvereg::symmetry::SymmetryKind;
use polars::prelude::*;

fn symmetry_label(kind: SymmetryKind) -> &'static str {
    match kind {
        SymmetryKind::ReflectionX => "reflection_x",
        SymmetryKind::ReflectionY => "reflection_y",
        SymmetryKind::Rotation => "rotation",
        SymmetryKind::None => "none",
    }
}

pub fn report_frame(reports: &[PathReport]) -> PolarsResult<DataFrame> {
    let col_u32 = |f: fn(&PathReport) -> usize| -> Vec<u32> {
        reports.iter().map(|r| f(r) as u32).collect()
    };
    let col_bool =
        |f: fn(&PathReport) -> bool| -> Vec<bool> { reports.iter().map(f).collect() };
    df!(
        "index" => col_u32(|r| r.index),
        "input_len" => col_u32(|r| r.input_len),
        "output_len" => col_u32(|r| r.output_len),
        "shape" => reports.iter().map(|r| r.shape.kind()).collect::<Vec<_>>(),
        "line_regularized" => col_bool(|r| r.line_regularized),
        "shape_regularized" => col_bool(|r| r.shape_regularized),
        "symmetry" => reports.iter().map(|r| symmetry_label(r.symmetry)).collect::<Vec<_>>(),
        "completed" => col_bool(|r| r.completed),
    )
}

pub fn write_report(reports: &[PathReport], out: &Path) -> Result<()> {
    let mut df = report_frame(reports)?;
    let mut file =
        std::fs::File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
