/// Tests for config module
#[cfg(test)]
mod tests {
    use crate::cli::CliArgs;
    use crate::config::{build_render_plan, DATA_FILE, INCLUDES_DIR};
    use std::fs;

    fn args_for(root: &std::path::Path) -> CliArgs {
        CliArgs { root: root.to_path_buf(), check: false, json: false }
    }

    #[test]
    fn test_plan_paths_are_rooted() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        fs::create_dir_all(dir.path().join("_data")).expect("Should create _data");
        fs::write(dir.path().join(DATA_FILE), "personal: {}\n").expect("Should write data file");

        let plan = build_render_plan(&args_for(dir.path())).expect("Should build plan");

        assert_eq!(plan.data_path, dir.path().join(DATA_FILE));
        assert_eq!(plan.includes_dir, dir.path().join(INCLUDES_DIR));
        assert_eq!(plan.data_label, DATA_FILE);
        assert!(!plan.check_only);
    }

    #[test]
    fn test_missing_data_file_is_a_config_error() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let err = build_render_plan(&args_for(dir.path())).expect_err("Should reject missing file");
        assert!(err.contains("not found"), "Error should say the file is missing: {}", err);
    }

    #[test]
    fn test_check_flag_carries_through() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        fs::create_dir_all(dir.path().join("_data")).expect("Should create _data");
        fs::write(dir.path().join(DATA_FILE), "personal: {}\n").expect("Should write data file");

        let mut args = args_for(dir.path());
        args.check = true;
        let plan = build_render_plan(&args).expect("Should build plan");
        assert!(plan.check_only);
    }
}
