use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: the subcommand, its input plan and parameters.
pub struct Payload {
    pub command: &'static str,
    pub input: Option<PathBuf>,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            input: None,
            params,
        }
    }

    pub fn with_input(mut self, input: &Path) -> Self {
        self.input = Some(input.to_path_buf());
        self
    }

    /// The provenance document for `outputs`, without a callsite.
    pub fn document(&self, outputs: &[&Path]) -> Value {
        json!({
            "code_rev": current_git_rev(),
            "engine_version": spacesyntax::VERSION,
            "command": self.command,
            "input": self.input.as_ref().map(|p| p.to_string_lossy().into_owned()),
            "params": self.params,
            "outputs": outputs.iter().map(|p| p.to_string_lossy().into_owned()).collect::<Vec<_>>()
        })
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: &Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = payload.document(&[artifact]);
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), "provenance written");
    Ok(provenance_path)
}

/// `<dir>/<stem>.provenance.json`, with `artifact` as the stem fallback.
fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_owned());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Code revision stamped into sidecars: `GIT_COMMIT` at build time, then at run
/// time, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    [
        option_env!("GIT_COMMIT").map(str::to_owned),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|rev| !rev.is_empty())
    .or_else(git_head)
    .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned()).filter(|r| !r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        let base = Path::new("/tmp/plans/office.heat.parquet");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/plans/office.heat.provenance.json")
        );
    }

    #[test]
    fn git_rev_is_never_empty() {
        assert!(!current_git_rev().is_empty());
    }

    #[test]
    fn write_sidecar_records_command_and_params() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("score.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new("score", json!({"connectivity_spacing": 0.5}))
            .with_input(Path::new("plan.ssn"));
        let prov_path = write_sidecar(&artifact, &payload).unwrap();
        assert_eq!(prov_path, dir.path().join("score.provenance.json"));
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "score");
        assert_eq!(parsed["input"], "plan.ssn");
        assert_eq!(parsed["params"]["connectivity_spacing"], 0.5);
        assert!(parsed["callsite"]["line"].as_u64().is_some());
    }
}
