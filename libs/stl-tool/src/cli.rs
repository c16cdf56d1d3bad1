//! Command-line arguments for `stl-tool`.

use std::path::PathBuf;

use clap::Parser;
use stl_writer::StlFormat;

use crate::batch::BatchConfig;
use crate::error::ToolResult;

/// Generate primitive meshes and write them as STL files.
///
/// Without `--config` the built-in demo set is written: a cylinder, three
/// spheres, a cone, and a frustum.
#[derive(Debug, Parser)]
#[command(name = "stl-tool", version, long_about = None)]
pub struct Cli {
    /// JSON batch file listing the shapes to write
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory, overriding the batch file
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// STL flavour: binary or ascii
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<StlFormat>,

    /// Generate one file at a time instead of in parallel
    #[arg(long)]
    pub sequential: bool,
}

impl Cli {
    /// Loads the batch (or the demo set) and applies command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch file cannot be read or is invalid.
    pub fn into_config(self) -> ToolResult<BatchConfig> {
        let mut config = match &self.config {
            Some(path) => BatchConfig::load(path)?,
            None => BatchConfig::default(),
        };

        if let Some(out) = self.out {
            config.output_dir = out;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.sequential {
            config.parallel = false;
        }
        Ok(config)
    }
}
