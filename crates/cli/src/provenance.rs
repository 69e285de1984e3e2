//! Provenance sidecars for written artifacts.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parsed/rejected line counts of the input an artifact was built from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RecordCounts {
    pub parsed: usize,
    pub rejected: usize,
}

/// Metadata recorded next to an analysis artifact.
pub struct Payload {
    pub params: Value,
    /// Free-form run label from `--tag`.
    pub tag: Option<String>,
    pub records: RecordCounts,
}

impl Payload {
    pub fn new(params: Value, tag: Option<String>, records: RecordCounts) -> Self {
        Self {
            params,
            tag,
            records,
        }
    }
}

/// Write `<stem>.provenance.json` next to `artifact`: revision, callsite, run
/// tag, record counts, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let callsite = Location::caller();
    let sidecar = provenance_path(artifact);
    if let Some(dir) = sidecar.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating provenance dir {}", dir.display()))?;
    }
    let doc = json!({
        "code_rev": current_git_rev(),
        "crate_version": shapecalc::VERSION,
        "callsite": format!("{}:{}", callsite.file(), callsite.line()),
        "tag": payload.tag,
        "records": payload.records,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

/// Provenance block with no outputs, printed by `report`.
pub fn report_block(tag: Option<String>) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "crate_version": shapecalc::VERSION,
        "tolerance": shapecalc::EPSILON,
        "tag": tag,
        "params": {},
        "outputs": []
    })
}

/// `shapes.csv` -> `shapes.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Commit from `GIT_COMMIT` (build time, then run time), else `git rev-parse
/// HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
                .and_then(non_empty)
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/shapes.csv");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/shapes.provenance.json"));
        assert_eq!(
            provenance_path(Path::new("metrics")),
            Path::new("metrics.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_tag_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("metrics.csv");
        fs::write(&artifact, "id\n").unwrap();
        let records = RecordCounts {
            parsed: 3,
            rejected: 1,
        };
        let payload = Payload::new(json!({"input": "shapes.txt"}), Some("nightly".into()), records);
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["tag"], "nightly");
        assert_eq!(parsed["params"]["input"], "shapes.txt");
        assert_eq!(parsed["records"]["parsed"], 3);
        assert_eq!(parsed["records"]["rejected"], 1);
        assert!(parsed["callsite"]
            .as_str()
            .is_some_and(|c| c.contains("provenance.rs:")));
    }

    #[test]
    fn report_block_has_no_outputs() {
        let block = report_block(None);
        assert!(block["tag"].is_null());
        assert_eq!(block["outputs"].as_array().map(Vec::len), Some(0));
        assert_eq!(block["tolerance"], 1e-10);
    }
}
