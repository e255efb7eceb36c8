//! Survey input types.
//!
//! These structs carry the handful of surveyed values everything else is
//! derived from: a runway centerline described from its front threshold, and
//! an ILS station with its final approach course. They are plain data passed
//! explicitly into scene construction; there is no ambient global survey.

use crate::geo::{feet_to_meters, GeoPoint};

/// A runway centerline described from its front (approach) threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunwaySpec {
    /// Front threshold position.
    pub front: GeoPoint,
    /// Centerline bearing in degrees true, front to back.
    pub bearing_deg: f64,
    /// Runway width in meters.
    pub width_m: f64,
    /// Runway length in meters.
    pub length_m: f64,
}

impl RunwaySpec {
    /// Create a runway spec with dimensions already in meters.
    pub const fn new(front: GeoPoint, bearing_deg: f64, width_m: f64, length_m: f64) -> Self {
        Self {
            front,
            bearing_deg,
            width_m,
            length_m,
        }
    }

    /// Create a runway spec from surveyed dimensions in feet, as published
    /// in airport facility directories.
    pub fn from_feet(front: GeoPoint, bearing_deg: f64, width_ft: f64, length_ft: f64) -> Self {
        Self {
            front,
            bearing_deg,
            width_m: feet_to_meters(width_ft),
            length_m: feet_to_meters(length_ft),
        }
    }
}

/// An ILS station and its final approach course.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IlsSpec {
    /// Station (localizer antenna) position.
    pub station: GeoPoint,
    /// Final approach course bearing in degrees true.
    pub bearing_deg: f64,
}

impl IlsSpec {
    /// Create an ILS spec.
    pub const fn new(station: GeoPoint, bearing_deg: f64) -> Self {
        Self {
            station,
            bearing_deg,
        }
    }
}

/// Complete survey input for one runway and its ILS approach.
///
/// `Default` yields the Montgomery Rgnl runway 15 reference survey
/// (see [`crate::config::defaults`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproachSurvey {
    /// The runway being approached.
    pub runway: RunwaySpec,
    /// The ILS serving that runway.
    pub ils: IlsSpec,
}

impl ApproachSurvey {
    /// Create a survey from its parts.
    pub const fn new(runway: RunwaySpec, ils: IlsSpec) -> Self {
        Self { runway, ils }
    }
}
