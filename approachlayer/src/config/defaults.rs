//! Default survey constants.
//!
//! Reference survey for Montgomery Rgnl (KMGM) runway 15 and its ILS,
//! used when no survey is supplied. Coordinates are decimal degrees;
//! published dimensions are in feet and converted at construction.

use crate::geo::GeoPoint;
use crate::survey::{ApproachSurvey, IlsSpec, RunwaySpec};

/// Runway 15 front threshold longitude.
pub const DEFAULT_RUNWAY_LON: f64 = -86.37309995479882;

/// Runway 15 front threshold latitude.
pub const DEFAULT_RUNWAY_LAT: f64 = 32.391347140073776;

/// Runway 15 true bearing in degrees.
pub const DEFAULT_RUNWAY_BEARING_DEG: f64 = 148.55;

/// Runway 15 published width in feet.
pub const DEFAULT_RUNWAY_WIDTH_FT: f64 = 150.0;

/// Runway 15 published length in feet.
pub const DEFAULT_RUNWAY_LENGTH_FT: f64 = 8008.0;

/// ILS localizer station longitude.
pub const DEFAULT_ILS_LON: f64 = -86.35692774318159;

/// ILS localizer station latitude.
pub const DEFAULT_ILS_LAT: f64 = 32.36898330040276;

/// ILS final approach course in degrees true.
pub const DEFAULT_ILS_BEARING_DEG: f64 = 148.0;

impl Default for ApproachSurvey {
    fn default() -> Self {
        ApproachSurvey::new(
            RunwaySpec::from_feet(
                GeoPoint::new(DEFAULT_RUNWAY_LON, DEFAULT_RUNWAY_LAT),
                DEFAULT_RUNWAY_BEARING_DEG,
                DEFAULT_RUNWAY_WIDTH_FT,
                DEFAULT_RUNWAY_LENGTH_FT,
            ),
            IlsSpec::new(
                GeoPoint::new(DEFAULT_ILS_LON, DEFAULT_ILS_LAT),
                DEFAULT_ILS_BEARING_DEG,
            ),
        )
    }
}
