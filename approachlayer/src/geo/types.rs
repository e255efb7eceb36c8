//! Geographic type definitions

/// Valid latitude range for projection inputs.
///
/// The meters-per-degree scale formulas are only meaningful for real
/// latitudes; projection rejects anything outside this range.
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range for projection inputs.
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A geographic position in decimal degrees.
///
/// Longitude-first to match the `[lon, lat]` coordinate order used by
/// map renderers. No altitude component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Longitude in decimal degrees (-180.0 to 180.0)
    pub lon: f64,
    /// Latitude in decimal degrees (-90.0 to 90.0)
    pub lat: f64,
}

impl GeoPoint {
    /// Create a point from longitude and latitude in decimal degrees.
    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns the point as a `[lon, lat]` pair for renderer export.
    #[inline]
    pub fn to_lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

/// Errors that can occur during geodetic computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    /// Latitude is outside valid range (-90.0 to 90.0)
    #[error("Invalid latitude: {0} (must be between {MIN_LAT} and {MAX_LAT})")]
    InvalidLatitude(f64),

    /// Longitude is outside valid range (-180.0 to 180.0)
    #[error("Invalid longitude: {0} (must be between {MIN_LON} and {MAX_LON})")]
    InvalidLongitude(f64),

    /// A coordinate, bearing, or distance was NaN or infinite
    #[error("Non-finite {field}: {value}")]
    NonFiniteInput {
        /// Which input was rejected (e.g. "latitude", "distance")
        field: &'static str,
        /// The offending value
        value: f64,
    },
}
