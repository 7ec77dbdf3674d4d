/// Configuration resolution module
///
/// This module handles:
/// - Fixing the data-file and includes paths relative to the project root
/// - Validating that the data file exists before any work starts
use crate::cli::CliArgs;
use log::debug;
use std::path::PathBuf;

/// Location of the unified CV data file, relative to the project root.
pub const DATA_FILE: &str = "_data/cv.yml";

/// Location of the generated include fragments, relative to the project root.
pub const INCLUDES_DIR: &str = "_includes";

/// Fully resolved generation plan.
///
/// All paths are fixed here, upfront, so the renderer and writer receive an
/// immutable, validated plan.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    /// Absolute or root-relative path to the data file
    pub data_path: PathBuf,
    /// Directory the fragments are written to
    pub includes_dir: PathBuf,
    /// Label naming the data source in the auto-generated marker comment
    pub data_label: String,
    /// Render only; write nothing
    pub check_only: bool,
}

/// Build a RenderPlan from CLI arguments
pub fn build_render_plan(args: &CliArgs) -> Result<RenderPlan, String> {
    let data_path = args.root.join(DATA_FILE);
    debug!("Resolved data file {:?}", data_path);

    if !data_path.is_file() {
        return Err(format!("CV data file not found at {}", data_path.display()));
    }

    let includes_dir = args.root.join(INCLUDES_DIR);
    debug!("Resolved includes directory {:?}", includes_dir);

    Ok(RenderPlan {
        data_path,
        includes_dir,
        data_label: DATA_FILE.to_string(),
        check_only: args.check,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
