//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and a single exit path.

use std::fmt;
use std::process;

use approachlayer::geo::GeoError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(std::io::Error),
    /// A survey or projection input was rejected
    Geo(GeoError),
    /// Failed to serialize the scene
    Serialize(serde_json::Error),
    /// Failed to write output file
    FileWrite { path: String, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Geo(_) = self {
            eprintln!();
            eprintln!("Check the survey inputs:");
            eprintln!("  - latitudes must be between -90 and 90 degrees");
            eprintln!("  - longitudes must be between -180 and 180 degrees");
            eprintln!("  - bearings and distances must be finite numbers");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(e) => write!(f, "Failed to initialize logging: {}", e),
            CliError::Geo(e) => write!(f, "Invalid survey input: {}", e),
            CliError::Serialize(e) => write!(f, "Failed to serialize scene: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
        }
    }
}

impl From<GeoError> for CliError {
    fn from(e: GeoError) -> Self {
        CliError::Geo(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialize(e)
    }
}
