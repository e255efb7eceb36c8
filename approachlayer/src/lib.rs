//! ApproachLayer - Runway and ILS approach geometry for map overlays
//!
//! This library derives the georeferenced points, lines, and polygons that
//! describe an airport runway and its ILS approach corridor from a handful
//! of surveyed values, and exports them as an ordered list of styled
//! geometries for an external map renderer.
//!
//! # High-Level API
//!
//! ```
//! use approachlayer::scene::{build_scene, SceneParams};
//! use approachlayer::survey::ApproachSurvey;
//!
//! let survey = ApproachSurvey::default();
//! let scene = build_scene(&survey, &SceneParams::default())?;
//!
//! // Hand the scene to a renderer, or serialize it for one.
//! let json = approachlayer::export::to_json(&scene)?;
//! # assert_eq!(scene.len(), 10);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod export;
pub mod geo;
pub mod logging;
pub mod scene;
pub mod survey;

/// Version of the ApproachLayer library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
