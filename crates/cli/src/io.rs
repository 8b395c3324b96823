//! Coordinate reader: one path per line, a flat comma-separated list of
//! numbers grouped in (x, y) pairs. Blank lines are skipped.

use std::path::Path;

use anyhow::{bail, Context, Result};
use curvereg::{PathCollection, Vec2};

pub fn parse_paths(text: &str) -> Result<PathCollection> {
    let mut paths = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let nums = line
            .split(',')
            .map(|field| {
                let field = field.trim();
                field
                    .parse::<f64>()
                    .with_context(|| format!("line {}: invalid number {field:?}", lineno + 1))
            })
            .collect::<Result<Vec<f64>>>()?;
        if nums.len() % 2 != 0 {
            bail!(
                "line {}: expected an even count of numbers, found {}",
                lineno + 1,
                nums.len()
            );
        }
        paths.push(nums.chunks_exact(2).map(|xy| Vec2::new(xy[0], xy[1])).collect());
    }
    Ok(paths)
}

pub fn read_paths(path: &Path) -> Result<PathCollection> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading coordinates {}", path.display()))?;
    parse_paths(&text).with_context(|| format!("parsing {}", path.display()))
}
