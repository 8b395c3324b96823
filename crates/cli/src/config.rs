//! Run configuration: tolerance overrides, palette, and render style.
//!
//! Loaded from an optional JSON file; every field has a default so an empty
//! object `{}` is a valid config. CLI flags are applied on top by `main`.

use std::path::Path;

use anyhow::{Context, Result};
use curvereg::GeomCfg;
use serde::{Deserialize, Serialize};

/// Optional per-field overrides of `GeomCfg`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeomOverrides {
    pub line_eps: Option<f64>,
    pub circle_eps: Option<f64>,
    pub rect_eps: Option<f64>,
    pub curve_eq_eps: Option<f64>,
    pub resample_count: Option<usize>,
    pub rotation_steps: Option<usize>,
    pub rotation_handle_deg: Option<f64>,
    pub fit_max_iter: Option<usize>,
    pub fit_tol: Option<f64>,
}

impl GeomOverrides {
    pub fn apply(&self, base: GeomCfg) -> GeomCfg {
        GeomCfg {
            line_eps: self.line_eps.unwrap_or(base.line_eps),
            circle_eps: self.circle_eps.unwrap_or(base.circle_eps),
            rect_eps: self.rect_eps.unwrap_or(base.rect_eps),
            curve_eq_eps: self.curve_eq_eps.unwrap_or(base.curve_eq_eps),
            resample_count: self.resample_count.unwrap_or(base.resample_count),
            rotation_steps: self.rotation_steps.unwrap_or(base.rotation_steps),
            rotation_handle_deg: self.rotation_handle_deg.unwrap_or(base.rotation_handle_deg),
            fit_max_iter: self.fit_max_iter.unwrap_or(base.fit_max_iter),
            fit_tol: self.fit_tol.unwrap_or(base.fit_tol),
            ..base
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// SVG colour keyword or hex string written to the `stroke` attribute.
    pub name: String,
    /// Same colour for the rasterizer.
    pub rgb: [u8; 3],
}

impl PaletteColor {
    fn new(name: &str, rgb: [u8; 3]) -> Self {
        Self {
            name: name.to_string(),
            rgb,
        }
    }
}

/// Non-empty, ordered stroke palette; path `i` gets colour `i % len`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PaletteColor>", into = "Vec<PaletteColor>")]
pub struct Palette(Vec<PaletteColor>);

impl Palette {
    pub fn new(colors: Vec<PaletteColor>) -> Result<Self> {
        anyhow::ensure!(!colors.is_empty(), "palette must contain at least one colour");
        Ok(Self(colors))
    }

    #[inline]
    pub fn color(&self, index: usize) -> &PaletteColor {
        &self.0[index % self.0.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            PaletteColor::new("black", [0, 0, 0]),
            PaletteColor::new("red", [255, 0, 0]),
            PaletteColor::new("blue", [0, 0, 255]),
            PaletteColor::new("green", [0, 128, 0]),
            PaletteColor::new("purple", [128, 0, 128]),
            PaletteColor::new("orange", [255, 165, 0]),
        ])
    }
}

impl TryFrom<Vec<PaletteColor>> for Palette {
    type Error = String;
    fn try_from(colors: Vec<PaletteColor>) -> Result<Self, Self::Error> {
        Palette::new(colors).map_err(|e| e.to_string())
    }
}

impl From<Palette> for Vec<PaletteColor> {
    fn from(p: Palette) -> Self {
        p.0
    }
}

/// Stroke style shared by the SVG renderer and the rasterizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderStyle {
    pub palette: Palette,
    pub stroke_width: f64,
    /// Canvas grows by this fraction of the max x / max y coordinate.
    pub padding: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            stroke_width: 2.0,
            padding: 0.1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub geom: GeomOverrides,
    pub render: RenderStyle,
    pub fit_shapes: bool,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    #[inline]
    pub fn geom_cfg(&self) -> GeomCfg {
        self.geom.apply(GeomCfg::default())
    }
}
