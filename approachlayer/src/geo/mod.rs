//! Geodetic projection module
//!
//! Provides the flat-earth bearing-and-distance projection used to derive
//! every displayed chart geometry from a handful of surveyed positions.
//!
//! The projection converts a distance along a compass bearing into local
//! north/east meter offsets, then scales those into degrees using empirical
//! meters-per-degree factors at the origin latitude. Accuracy degrades for
//! very long distances or near the poles; it is intended for approach-chart
//! scale distances (tens of kilometers).

mod types;

pub use types::{GeoError, GeoPoint, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use std::f64::consts::TAU;

/// Feet-to-meters conversion factor (exact by definition).
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Converts a length in feet to meters.
#[inline]
pub fn feet_to_meters(feet: f64) -> f64 {
    METERS_PER_FOOT * feet
}

/// Projects a point along a compass bearing for a given distance.
///
/// # Arguments
///
/// * `origin` - Starting position in decimal degrees
/// * `heading_deg` - Compass bearing in degrees, clockwise from true north;
///   any finite value is accepted and normalized into [0°, 360°)
/// * `distance_m` - Distance in meters; negative projects behind the bearing
///
/// # Returns
///
/// The destination position, or an error if any input is non-finite or the
/// origin is outside the valid latitude/longitude ranges.
///
/// # Example
///
/// ```
/// use approachlayer::geo::{project_point, GeoPoint};
///
/// let threshold = GeoPoint::new(-86.37309995479882, 32.391347140073776);
/// let departure_end = project_point(threshold, 148.55, 2440.8384)?;
/// assert!(departure_end.lat < threshold.lat);
/// # Ok::<(), approachlayer::geo::GeoError>(())
/// ```
pub fn project_point(
    origin: GeoPoint,
    heading_deg: f64,
    distance_m: f64,
) -> Result<GeoPoint, GeoError> {
    validate_point(origin)?;
    if !heading_deg.is_finite() {
        return Err(GeoError::NonFiniteInput {
            field: "heading",
            value: heading_deg,
        });
    }
    if !distance_m.is_finite() {
        return Err(GeoError::NonFiniteInput {
            field: "distance",
            value: distance_m,
        });
    }

    let lat_rad = origin.lat.to_radians();
    // True modulo into [0, 2π); sin/cos would accept any angle, but a
    // normalized heading keeps logged values readable.
    let heading_rad = heading_deg.to_radians().rem_euclid(TAU);

    let (m_per_deg_lat, m_per_deg_lon) = meters_per_degree(lat_rad);

    // Decompose the distance into local north/east meter offsets.
    let lat_delta_m = heading_rad.cos() * distance_m;
    let lon_delta_m = heading_rad.sin() * distance_m;

    let lat_delta_deg = lat_delta_m / m_per_deg_lat;
    let lon_delta_deg = lon_delta_m / m_per_deg_lon;

    Ok(GeoPoint::new(
        origin.lon + lon_delta_deg,
        origin.lat + lat_delta_deg,
    ))
}

/// Approximate planar distance in meters between two nearby points.
///
/// Inverse of [`project_point`]: converts the degree deltas back to meters
/// using the scale factors at the first point's latitude. Only valid over
/// the same short ranges as the forward projection.
pub fn planar_distance_m(a: GeoPoint, b: GeoPoint) -> Result<f64, GeoError> {
    validate_point(a)?;
    validate_point(b)?;

    let (m_per_deg_lat, m_per_deg_lon) = meters_per_degree(a.lat.to_radians());
    let north_m = (b.lat - a.lat) * m_per_deg_lat;
    let east_m = (b.lon - a.lon) * m_per_deg_lon;

    Ok(north_m.hypot(east_m))
}

/// Empirical meters-per-degree scale factors at a latitude (radians).
///
/// The latitude factor is the standard series expansion of meridian arc
/// length; the longitude factor is the equatorial value scaled by cos(lat).
#[inline]
fn meters_per_degree(lat_rad: f64) -> (f64, f64) {
    let m_per_deg_lat =
        111132.954 - 559.822 * (2.0 * lat_rad).cos() + 1.175 * (4.0 * lat_rad).cos();
    let m_per_deg_lon = 111132.954 * lat_rad.cos();
    (m_per_deg_lat, m_per_deg_lon)
}

fn validate_point(point: GeoPoint) -> Result<(), GeoError> {
    if !point.lat.is_finite() {
        return Err(GeoError::NonFiniteInput {
            field: "latitude",
            value: point.lat,
        });
    }
    if !point.lon.is_finite() {
        return Err(GeoError::NonFiniteInput {
            field: "longitude",
            value: point.lon,
        });
    }
    if !(MIN_LAT..=MAX_LAT).contains(&point.lat) {
        return Err(GeoError::InvalidLatitude(point.lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&point.lon) {
        return Err(GeoError::InvalidLongitude(point.lon));
    }
    Ok(())
}
