//! ApproachLayer CLI - Command-line interface
//!
//! This binary builds runway/ILS approach scenes from survey values and
//! exports them for an external map renderer.

use clap::{Parser, Subcommand};

use approachlayer::logging::{default_log_dir, default_log_file, init_logging};

mod commands;
mod error;

use commands::{export, project};
use error::CliError;

#[derive(Parser)]
#[command(name = "approachlayer")]
#[command(version = approachlayer::VERSION)]
#[command(about = "Runway and ILS approach geometry for map overlays", long_about = None)]
struct Cli {
    /// Skip log file setup (console output only, at RUST_LOG level)
    #[arg(long, global = true)]
    no_log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the approach scene and export it for a renderer
    Export(export::ExportArgs),
    /// Project a point along a bearing and distance
    Project(project::ProjectArgs),
}

fn main() {
    let cli = Cli::parse();

    // The guard must outlive command execution or file logging stops.
    let _logging_guard = if cli.no_log_file {
        None
    } else {
        match init_logging(default_log_dir(), default_log_file()) {
            Ok(guard) => Some(guard),
            Err(e) => CliError::LoggingInit(e).exit(),
        }
    };

    let result = match &cli.command {
        Command::Export(args) => export::run(args),
        Command::Project(args) => project::run(args),
    };

    if let Err(e) = result {
        e.exit();
    }
}
