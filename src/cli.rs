use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "cvgen")]
#[command(about = "Regenerate Quarto include fragments from a unified CV data file")]
#[command(version)]
pub struct CliArgs {
    /// Project root containing _data/cv.yml; fragments go to _includes/
    #[arg(long, short = 'r', value_name = "PATH", default_value = ".")]
    pub root: PathBuf,

    /// Validate the data file and render everything without writing files
    #[arg(long)]
    pub check: bool,

    /// Print a JSON summary of the generated fragments to stdout
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate arguments before running
    pub fn validate(&self) -> Result<(), String> {
        if !self.root.exists() {
            return Err(format!("Project root {} does not exist", self.root.display()));
        }
        if !self.root.is_dir() {
            return Err(format!("Project root {} is not a directory", self.root.display()));
        }
        Ok(())
    }
}
