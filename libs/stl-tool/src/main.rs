use std::process::ExitCode;

use clap::Parser;
use stl_tool::{run_batch, Cli, ToolResult};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Override with RUST_LOG (e.g. RUST_LOG=primitive_mesh=debug).
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ToolResult<()> {
    let config = cli.into_config()?;
    let reports = run_batch(&config)?;
    for report in &reports {
        info!(
            shape = report.shape,
            vertices = report.vertices,
            faces = report.faces,
            "wrote {}",
            report.path.display()
        );
    }
    Ok(())
}
