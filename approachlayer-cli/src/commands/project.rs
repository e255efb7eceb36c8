//! Project command: one-off bearing-and-distance projection.

use clap::Args;

use approachlayer::geo::{feet_to_meters, project_point, GeoPoint};

use crate::error::CliError;

/// Arguments for the project command.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Origin latitude in decimal degrees
    #[arg(long)]
    pub lat: f64,

    /// Origin longitude in decimal degrees
    #[arg(long)]
    pub lon: f64,

    /// Compass bearing in degrees, clockwise from true north
    #[arg(long)]
    pub bearing: f64,

    /// Distance in meters (negative projects behind the bearing)
    #[arg(long, allow_negative_numbers = true)]
    pub distance: Option<f64>,

    /// Distance in feet, converted before projection
    #[arg(long, conflicts_with = "distance", allow_negative_numbers = true)]
    pub distance_ft: Option<f64>,
}

/// Project the origin along the bearing and print the destination.
pub fn run(args: &ProjectArgs) -> Result<(), CliError> {
    let distance_m = match (args.distance, args.distance_ft) {
        (Some(m), _) => m,
        (None, Some(ft)) => feet_to_meters(ft),
        (None, None) => 0.0,
    };

    let origin = GeoPoint::new(args.lon, args.lat);
    let destination = project_point(origin, args.bearing, distance_m)?;

    println!(
        "{{\"lon\": {}, \"lat\": {}}}",
        destination.lon, destination.lat
    );

    Ok(())
}
