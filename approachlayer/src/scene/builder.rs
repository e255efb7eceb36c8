//! Scene builder: derives every chart geometry from the survey.
//!
//! All positions come out of repeated bearing-and-distance projections from
//! the surveyed runway threshold and ILS station. Scene order is fixed so
//! output is reproducible; z-order is the renderer's concern.

use tracing::debug;

use crate::geo::{project_point, GeoError};
use crate::survey::ApproachSurvey;

use super::{Geometry, Scene, StyleId, StyledGeometry};

/// Model parameters for derived geometry.
///
/// Defaults match a standard localizer service volume: a 10 NM (18 520 m)
/// corridor at ±1.5° around the course, with a 30 km centerline extension
/// past the runway for the inbound track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    /// Length of the ILS capture corridor wedge, in meters.
    pub corridor_length_m: f64,
    /// Half-angle of the corridor wedge either side of the course, degrees.
    pub corridor_half_angle_deg: f64,
    /// How far past the runway the extended centerline reaches, in meters.
    pub centerline_extension_m: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            corridor_length_m: 18_520.0,
            corridor_half_angle_deg: 1.5,
            centerline_extension_m: 30_000.0,
        }
    }
}

/// Build the approach scene for one surveyed runway and ILS.
///
/// Returns exactly ten styled geometries in a fixed order: the two runway
/// thresholds, the four runway edge corners, the ILS station, the corridor
/// wedge polygon, the extended runway centerline, and the extended ILS
/// course line.
///
/// Any invalid survey value (non-finite, or coordinates out of range) fails
/// the whole build; a partially derived approach chart would be misleading,
/// so no partial scene is ever returned.
pub fn build_scene(survey: &ApproachSurvey, params: &SceneParams) -> Result<Scene, GeoError> {
    let runway = &survey.runway;
    let ils = &survey.ils;

    let front = runway.front;
    let back = project_point(front, runway.bearing_deg, runway.length_m)?;
    // Extend behind the front threshold by adding the runway length so the
    // line reaches the configured distance past the far end of the runway.
    let extended = project_point(
        front,
        runway.bearing_deg - 180.0,
        runway.length_m + params.centerline_extension_m,
    )?;

    let front_right = project_point(front, runway.bearing_deg + 90.0, runway.width_m)?;
    let front_left = project_point(front, runway.bearing_deg - 90.0, runway.width_m)?;
    let back_right = project_point(back, runway.bearing_deg + 90.0, runway.width_m)?;
    let back_left = project_point(back, runway.bearing_deg - 90.0, runway.width_m)?;

    // Corridor vertices fan out from the station along the reciprocal of the
    // approach course, one projection per wedge edge plus the course itself.
    let outbound = ils.bearing_deg + 180.0;
    let corridor_right = project_point(
        ils.station,
        outbound + params.corridor_half_angle_deg,
        params.corridor_length_m,
    )?;
    let corridor_left = project_point(
        ils.station,
        outbound - params.corridor_half_angle_deg,
        params.corridor_length_m,
    )?;
    let course_extended = project_point(ils.station, outbound, params.corridor_length_m)?;

    debug!(
        runway_bearing = runway.bearing_deg,
        ils_bearing = ils.bearing_deg,
        back_lon = back.lon,
        back_lat = back.lat,
        "Derived approach scene geometry"
    );

    let entries = vec![
        StyledGeometry {
            geometry: Geometry::Point(front),
            style: StyleId::RunwayThreshold,
        },
        StyledGeometry {
            geometry: Geometry::Point(back),
            style: StyleId::RunwayThreshold,
        },
        StyledGeometry {
            geometry: Geometry::Point(front_right),
            style: StyleId::RunwayEdge,
        },
        StyledGeometry {
            geometry: Geometry::Point(front_left),
            style: StyleId::RunwayEdge,
        },
        StyledGeometry {
            geometry: Geometry::Point(back_right),
            style: StyleId::RunwayEdge,
        },
        StyledGeometry {
            geometry: Geometry::Point(back_left),
            style: StyleId::RunwayEdge,
        },
        StyledGeometry {
            geometry: Geometry::Point(ils.station),
            style: StyleId::IlsStation,
        },
        StyledGeometry {
            geometry: Geometry::Polygon(vec![
                ils.station,
                corridor_right,
                corridor_left,
                ils.station,
            ]),
            style: StyleId::IlsCorridorFill,
        },
        StyledGeometry {
            geometry: Geometry::LineString(vec![back, extended]),
            style: StyleId::RunwayCenterlineExtended,
        },
        StyledGeometry {
            geometry: Geometry::LineString(vec![ils.station, course_extended]),
            style: StyleId::IlsCenterlineExtended,
        },
    ];

    Ok(Scene::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{planar_distance_m, GeoPoint};
    use crate::survey::{IlsSpec, RunwaySpec};

    fn default_scene() -> Scene {
        build_scene(&ApproachSurvey::default(), &SceneParams::default()).unwrap()
    }

    #[test]
    fn test_scene_has_ten_entries_in_fixed_order() {
        let scene = default_scene();
        assert_eq!(scene.len(), 10);

        let styles: Vec<StyleId> = scene.entries().iter().map(|e| e.style).collect();
        assert_eq!(
            styles,
            vec![
                StyleId::RunwayThreshold,
                StyleId::RunwayThreshold,
                StyleId::RunwayEdge,
                StyleId::RunwayEdge,
                StyleId::RunwayEdge,
                StyleId::RunwayEdge,
                StyleId::IlsStation,
                StyleId::IlsCorridorFill,
                StyleId::RunwayCenterlineExtended,
                StyleId::IlsCenterlineExtended,
            ]
        );

        let kinds: Vec<&str> = scene
            .entries()
            .iter()
            .map(|e| e.geometry.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                "point",
                "point",
                "point",
                "point",
                "point",
                "point",
                "point",
                "polygon",
                "lineString",
                "lineString"
            ]
        );
    }

    #[test]
    fn test_corridor_wedge_is_closed_ring() {
        let scene = default_scene();
        let Geometry::Polygon(ring) = &scene.entries()[7].geometry else {
            panic!("Entry 7 should be the corridor polygon");
        };
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.first(), ring.last(), "Corridor ring must close");
    }

    #[test]
    fn test_edge_corners_equidistant_from_thresholds() {
        let scene = default_scene();
        let survey = ApproachSurvey::default();
        let entries = scene.entries();

        let point_at = |i: usize| -> GeoPoint {
            let Geometry::Point(p) = entries[i].geometry else {
                panic!("Entry {} should be a point", i);
            };
            p
        };

        // Front corners measured from front threshold, back corners from
        // back threshold; all four must sit one runway width away.
        let front = point_at(0);
        let back = point_at(1);
        for (threshold, corner) in [
            (front, point_at(2)),
            (front, point_at(3)),
            (back, point_at(4)),
            (back, point_at(5)),
        ] {
            let d = planar_distance_m(threshold, corner).unwrap();
            assert!(
                (d - survey.runway.width_m).abs() < 1e-6,
                "Corner distance {} differs from width {}",
                d,
                survey.runway.width_m
            );
        }
    }

    #[test]
    fn test_centerline_extension_starts_at_back_threshold() {
        let scene = default_scene();
        let entries = scene.entries();
        let Geometry::Point(back) = entries[1].geometry else {
            panic!("Entry 1 should be the back threshold");
        };
        let Geometry::LineString(line) = &entries[8].geometry else {
            panic!("Entry 8 should be the extended centerline");
        };
        assert_eq!(line[0], back);
        assert_eq!(line.len(), 2);
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(default_scene(), default_scene());
    }

    #[test]
    fn test_invalid_survey_fails_whole_build() {
        let survey = ApproachSurvey::new(
            RunwaySpec::new(GeoPoint::new(0.0, 95.0), 90.0, 45.0, 2000.0),
            IlsSpec::new(GeoPoint::new(0.0, 0.0), 90.0),
        );
        let result = build_scene(&survey, &SceneParams::default());
        assert_eq!(result, Err(GeoError::InvalidLatitude(95.0)));
    }

    #[test]
    fn test_corridor_length_parameter_scales_wedge() {
        let survey = ApproachSurvey::default();
        let short = SceneParams {
            corridor_length_m: 9_260.0,
            ..SceneParams::default()
        };
        let scene = build_scene(&survey, &short).unwrap();
        let Geometry::LineString(course) = &scene.entries()[9].geometry else {
            panic!("Entry 9 should be the extended course line");
        };
        let reach = planar_distance_m(course[0], course[1]).unwrap();
        assert!(
            (reach - 9_260.0).abs() < 1e-3,
            "Course line should reach the configured corridor length, got {}",
            reach
        );
    }
}
