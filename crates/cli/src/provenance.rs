//! Provenance sidecar for a processed input: git revision, callsite, the
//! effective configuration, and every artifact written for that input.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded in a sidecar.
pub struct Payload {
    pub input: PathBuf,
    pub params: Value,
    pub outputs: Vec<PathBuf>,
}

/// Write `<out_dir>/<input stem>.provenance.json`.
#[track_caller]
pub fn write_sidecar(out_dir: &Path, payload: Payload) -> Result<PathBuf> {
    let provenance_path = out_dir.join(sidecar_name(&payload.input));
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "crate_version": curvereg::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "input": payload.input.to_string_lossy(),
        "params": payload.params,
        "outputs": payload
            .outputs
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
    });
    std::fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn sidecar_name(input: &Path) -> String {
    let stem = input
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());
    format!("{stem}.provenance.json")
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_named_after_input_file() {
        assert_eq!(
            sidecar_name(Path::new("/data/frag0.csv")),
            "frag0.csv.provenance.json"
        );
    }

    #[test]
    fn write_sidecar_lists_outputs() {
        let dir = tempdir().unwrap();
        let svg = dir.path().join("frag0.csv.svg");
        let payload = Payload {
            input: PathBuf::from("frag0.csv"),
            params: json!({"fit_shapes": false}),
            outputs: vec![svg.clone()],
        };
        let prov_path = write_sidecar(dir.path(), payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&std::fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], svg.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["fit_shapes"], false);
    }
}
