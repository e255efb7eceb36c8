//! Export command: build the approach scene and write it for a renderer.

use std::fs;

use clap::{Args, ValueEnum};
use tracing::info;

use approachlayer::config::defaults;
use approachlayer::export;
use approachlayer::geo::GeoPoint;
use approachlayer::scene::{build_scene, SceneParams};
use approachlayer::survey::{ApproachSurvey, IlsSpec, RunwaySpec};

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Flat array of {geometryKind, coordinates, styleId} records
    Records,
    /// GeoJSON FeatureCollection with styleId feature properties
    Geojson,
}

/// Arguments for the export command.
///
/// Survey flags default to the Montgomery Rgnl runway 15 reference survey;
/// override any subset to chart a different runway.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Runway front threshold latitude in decimal degrees
    #[arg(long, default_value_t = defaults::DEFAULT_RUNWAY_LAT)]
    pub runway_lat: f64,

    /// Runway front threshold longitude in decimal degrees
    #[arg(long, default_value_t = defaults::DEFAULT_RUNWAY_LON)]
    pub runway_lon: f64,

    /// Runway true bearing in degrees, front to back
    #[arg(long, default_value_t = defaults::DEFAULT_RUNWAY_BEARING_DEG)]
    pub runway_bearing: f64,

    /// Runway width in feet
    #[arg(long, default_value_t = defaults::DEFAULT_RUNWAY_WIDTH_FT)]
    pub runway_width_ft: f64,

    /// Runway length in feet
    #[arg(long, default_value_t = defaults::DEFAULT_RUNWAY_LENGTH_FT)]
    pub runway_length_ft: f64,

    /// ILS station latitude in decimal degrees
    #[arg(long, default_value_t = defaults::DEFAULT_ILS_LAT)]
    pub ils_lat: f64,

    /// ILS station longitude in decimal degrees
    #[arg(long, default_value_t = defaults::DEFAULT_ILS_LON)]
    pub ils_lon: f64,

    /// ILS final approach course in degrees true
    #[arg(long, default_value_t = defaults::DEFAULT_ILS_BEARING_DEG)]
    pub ils_bearing: f64,

    /// Export format
    #[arg(long, value_enum, default_value = "records")]
    pub format: ExportFormat,

    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub output: Option<String>,
}

impl ExportArgs {
    fn survey(&self) -> ApproachSurvey {
        ApproachSurvey::new(
            RunwaySpec::from_feet(
                GeoPoint::new(self.runway_lon, self.runway_lat),
                self.runway_bearing,
                self.runway_width_ft,
                self.runway_length_ft,
            ),
            IlsSpec::new(GeoPoint::new(self.ils_lon, self.ils_lat), self.ils_bearing),
        )
    }
}

/// Build the scene from the supplied survey and write the export.
pub fn run(args: &ExportArgs) -> Result<(), CliError> {
    let survey = args.survey();
    let scene = build_scene(&survey, &SceneParams::default())?;

    info!(
        entries = scene.len(),
        runway_bearing = survey.runway.bearing_deg,
        "Built approach scene"
    );

    let text = match args.format {
        ExportFormat::Records => export::to_json(&scene)?,
        ExportFormat::Geojson => export::to_geojson(&scene)?,
    };

    match &args.output {
        Some(path) => fs::write(path, &text).map_err(|error| CliError::FileWrite {
            path: path.clone(),
            error,
        })?,
        None => println!("{}", text),
    }

    Ok(())
}
