//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handler.
//!
//! # Command Modules
//!
//! - [`export`] - Build the approach scene and export it for a renderer
//! - [`project`] - One-off bearing-and-distance projection

pub mod export;
pub mod project;
