//! Fragment output: staged writes into the includes directory.
//!
//! Every include is fully regenerated on every run. Each file is staged
//! through a temp file in the target directory and atomically persisted
//! over the destination, so an interrupted run never leaves a half-written
//! include behind.

use crate::render::Fragment;
use log::debug;
use serde_json::json;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Marker line prefixed to every generated file. `data_label` names the
/// source data file relative to the project root.
fn marker(data_label: &str) -> String {
    format!("<!-- AUTO-GENERATED from {} - DO NOT EDIT -->\n", data_label)
}

/// Write all fragments under `includes_dir`, creating it if needed.
pub fn write_fragments(
    includes_dir: &Path,
    data_label: &str,
    fragments: &[Fragment],
) -> Result<(), String> {
    fs::create_dir_all(includes_dir)
        .map_err(|e| format!("Failed to create {}: {}", includes_dir.display(), e))?;

    for fragment in fragments {
        let dest = includes_dir.join(fragment.filename);
        write_one(includes_dir, &dest, data_label, fragment)
            .map_err(|e| format!("Failed to write {}: {}", dest.display(), e))?;
        debug!("Wrote {} ({} bytes)", dest.display(), fragment.body.len());
    }

    Ok(())
}

fn write_one(
    dir: &Path,
    dest: &Path,
    data_label: &str,
    fragment: &Fragment,
) -> std::io::Result<()> {
    // Stage in the destination directory so persist() is a same-filesystem rename
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(marker(data_label).as_bytes())?;
    staged.write_all(fragment.body.as_bytes())?;
    staged.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

/// Build the machine-readable generation summary for `--json`.
pub fn json_summary(includes_dir: &Path, fragments: &[Fragment]) -> String {
    let files: Vec<_> = fragments
        .iter()
        .map(|f| json!({ "file": f.filename, "bytes": f.body.len() }))
        .collect();

    let report = json!({
        "includes_dir": includes_dir.display().to_string(),
        "fragment_count": fragments.len(),
        "fragments": files,
    });

    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
}
