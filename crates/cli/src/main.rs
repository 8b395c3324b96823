use anyhow::Result;
use clap::{Parser, Subcommand};
use curvereg::api::{classify, GeomCfg, Pipeline, ShapeClassification};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod io;
mod provenance;
mod raster;
mod render;
mod report;

use config::RunConfig;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Regularize, complete, and render 2D curve fragments")]
struct Cmd {
    /// Optional JSON run configuration (tolerances, palette, style)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run the pipeline on coordinate files; write SVG, PNG, report, and provenance
    Run {
        #[arg(long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,
        #[arg(long)]
        out: PathBuf,
        /// Also canonicalize circles and rectangles
        #[arg(long)]
        fit_shapes: bool,
        /// Skip the PNG rasterization
        #[arg(long)]
        no_png: bool,
    },
    /// Print the shape classification of every path in one file
    Classify {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print the effective configuration
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = match &cmd.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    match cmd.action {
        Action::Run {
            input,
            out,
            fit_shapes,
            no_png,
        } => {
            let cfg = RunConfig {
                fit_shapes: cfg.fit_shapes || fit_shapes,
                ..cfg
            };
            std::fs::create_dir_all(&out)?;
            for file in &input {
                run(file, &out, &cfg, !no_png)?;
            }
            Ok(())
        }
        Action::Classify { input } => classify_file(&input, &cfg),
        Action::Report => report(&cfg),
    }
}

fn geom_json(g: &GeomCfg) -> Value {
    json!({
        "line_eps": g.line_eps,
        "circle_eps": g.circle_eps,
        "rect_eps": g.rect_eps,
        "curve_eq_eps": g.curve_eq_eps,
        "resample_count": g.resample_count,
        "rotation_steps": g.rotation_steps,
        "rotation_handle_deg": g.rotation_handle_deg,
        "fit_max_iter": g.fit_max_iter,
        "fit_tol": g.fit_tol,
        "degenerate_eps": g.degenerate_eps
    })
}

fn params_json(cfg: &RunConfig) -> Result<Value> {
    Ok(json!({
        "geom": geom_json(&cfg.geom_cfg()),
        "render": serde_json::to_value(&cfg.render)?,
        "fit_shapes": cfg.fit_shapes
    }))
}

fn run(input: &Path, out_dir: &Path, cfg: &RunConfig, png: bool) -> Result<()> {
    let paths = io::read_paths(input)?;
    let pipeline = Pipeline::new(cfg.geom_cfg()).with_shape_fitting(cfg.fit_shapes);
    let output = pipeline.run(&paths);
    let (lines, shapes, symmetric) = output.change_counts();
    let completed = output.reports.iter().filter(|r| r.completed).count();
    tracing::info!(
        input = %input.display(),
        paths = paths.len(),
        lines,
        shapes,
        symmetric,
        completed,
        "pipeline"
    );

    let name = input
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());
    let drawing = render::layout(&output.paths, &cfg.render);
    let mut outputs = Vec::new();

    let svg_path = out_dir.join(format!("{name}.svg"));
    render::write_svg(&drawing, &svg_path)?;
    outputs.push(svg_path);

    if png {
        let png_path = out_dir.join(format!("{name}.png"));
        raster::write_png(&drawing, &png_path)?;
        outputs.push(png_path);
    }

    let report_path = out_dir.join(format!("{name}.report.csv"));
    report::write_report(&output.reports, &report_path)?;
    outputs.push(report_path);

    let sidecar = provenance::write_sidecar(
        out_dir,
        provenance::Payload {
            input: input.to_path_buf(),
            params: params_json(cfg)?,
            outputs: outputs.clone(),
        },
    )?;
    tracing::info!(outputs = ?outputs, provenance = %sidecar.display(), "written");
    Ok(())
}

fn classification_json(index: usize, points: usize, class: &ShapeClassification) -> Value {
    let params = match class {
        ShapeClassification::Line { start, end } => {
            json!({"start": [start.x, start.y], "end": [end.x, end.y]})
        }
        ShapeClassification::Circle { center, radius } => {
            json!({"center": [center.x, center.y], "radius": radius})
        }
        ShapeClassification::Rectangle { corners } => {
            json!({"corners": corners.iter().map(|c| [c.x, c.y]).collect::<Vec<_>>()})
        }
        ShapeClassification::Irregular => Value::Null,
    };
    json!({"index": index, "points": points, "shape": class.kind(), "params": params})
}

fn classify_file(input: &Path, cfg: &RunConfig) -> Result<()> {
    let paths = io::read_paths(input)?;
    let geom = cfg.geom_cfg();
    let rows: Vec<Value> = paths
        .iter()
        .enumerate()
        .map(|(i, p)| classification_json(i, p.len(), &classify(p, &geom)))
        .collect();
    tracing::info!(input = %input.display(), paths = rows.len(), "classify");
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn report(cfg: &RunConfig) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "crate_version": curvereg::VERSION,
        "params": params_json(cfg)?
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
