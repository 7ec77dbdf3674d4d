mod cli;
mod config;
mod date;
mod document;
mod render;
mod ui;
mod writer;

use std::process;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        process::exit(1);
    }

    // Resolve all paths upfront
    let plan = match config::build_render_plan(&args) {
        Ok(p) => p,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            process::exit(1);
        }
    };

    // Load the CV document; a malformed file or missing mandatory field
    // aborts here, before anything is touched on disk
    let cv = match document::load_document(&plan.data_path) {
        Ok(doc) => doc,
        Err(e) => {
            ui::print_error(&e);
            process::exit(1);
        }
    };

    // Render every fragment in memory first, so a data fault in any
    // section leaves the includes directory untouched
    let fragments = match render::render_document(&cv) {
        Ok(f) => f,
        Err(e) => {
            ui::print_error(&format!("Data fault in {}: {}", plan.data_label, e));
            process::exit(1);
        }
    };

    if plan.check_only {
        for fragment in &fragments {
            ui::status(&format!(
                "OK: {}/{} ({} bytes)",
                config::INCLUDES_DIR,
                fragment.filename,
                fragment.body.len()
            ));
        }
    } else {
        if let Err(e) = writer::write_fragments(&plan.includes_dir, &plan.data_label, &fragments) {
            ui::print_error(&e);
            process::exit(1);
        }
        for fragment in &fragments {
            println!("Generated: {}/{}", config::INCLUDES_DIR, fragment.filename);
        }
    }

    if args.json {
        println!("{}", writer::json_summary(&plan.includes_dir, &fragments));
    }
}
