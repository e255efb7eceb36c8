//! End-to-end scene construction against independently computed references.
//!
//! Reference coordinates were produced by evaluating the flat-earth
//! projection formula by hand for the default KMGM runway 15 survey.

use approachlayer::export::{scene_records, to_json};
use approachlayer::geo::GeoPoint;
use approachlayer::scene::{build_scene, Geometry, Scene, SceneParams, StyleId};
use approachlayer::survey::ApproachSurvey;

const TOLERANCE_DEG: f64 = 1e-9;

fn default_scene() -> Scene {
    build_scene(&ApproachSurvey::default(), &SceneParams::default())
        .expect("Default survey must build")
}

fn assert_point_near(actual: GeoPoint, expected_lon: f64, expected_lat: f64, label: &str) {
    assert!(
        (actual.lon - expected_lon).abs() < TOLERANCE_DEG,
        "{} longitude: expected {} got {}",
        label,
        expected_lon,
        actual.lon
    );
    assert!(
        (actual.lat - expected_lat).abs() < TOLERANCE_DEG,
        "{} latitude: expected {} got {}",
        label,
        expected_lat,
        actual.lat
    );
}

fn point_entry(scene: &Scene, index: usize) -> GeoPoint {
    match scene.entries()[index].geometry {
        Geometry::Point(p) => p,
        ref other => panic!("Entry {} should be a point, got {}", index, other.kind()),
    }
}

#[test]
fn default_scene_matches_reference_survey() {
    let scene = default_scene();
    assert_eq!(scene.len(), 10);

    // Thresholds.
    assert_point_near(
        point_entry(&scene, 0),
        -86.37309995479882,
        32.391347140073776,
        "front threshold",
    );
    assert_point_near(
        point_entry(&scene, 1),
        -86.3595290303249,
        32.37256997642943,
        "back threshold",
    );

    // Edge corners, front then back, right then left of the bearing.
    assert_point_near(
        point_entry(&scene, 2),
        -86.37351558624697,
        32.39113202768973,
        "front right corner",
    );
    assert_point_near(
        point_entry(&scene, 3),
        -86.37268432335067,
        32.391562252457824,
        "front left corner",
    );
    assert_point_near(
        point_entry(&scene, 4),
        -86.35994457539934,
        32.372354863403835,
        "back right corner",
    );
    assert_point_near(
        point_entry(&scene, 5),
        -86.35911348525045,
        32.37278508945503,
        "back left corner",
    );

    // ILS station.
    assert_point_near(
        point_entry(&scene, 6),
        -86.35692774318159,
        32.36898330040276,
        "ILS station",
    );
}

#[test]
fn corridor_wedge_matches_reference_survey() {
    let scene = default_scene();
    let Geometry::Polygon(ring) = &scene.entries()[7].geometry else {
        panic!("Entry 7 should be the corridor polygon");
    };
    assert_eq!(scene.entries()[7].style, StyleId::IlsCorridorFill);
    assert_eq!(ring.len(), 4);
    assert_eq!(ring[0], ring[3], "Wedge ring must close on the station");

    assert_point_near(ring[0], -86.35692774318159, 32.36898330040276, "wedge apex");
    assert_point_near(
        ring[1],
        -86.45706754641203,
        32.51288173544399,
        "wedge right edge",
    );
    assert_point_near(
        ring[2],
        -86.46582761191729,
        32.50824839298278,
        "wedge left edge",
    );
}

#[test]
fn extended_lines_match_reference_survey() {
    let scene = default_scene();

    let Geometry::LineString(centerline) = &scene.entries()[8].geometry else {
        panic!("Entry 8 should be the extended runway centerline");
    };
    assert_point_near(
        centerline[0],
        -86.3595290303249,
        32.37256997642943,
        "centerline start (back threshold)",
    );
    assert_point_near(
        centerline[1],
        -86.55346919505553,
        32.640911769750446,
        "centerline extension",
    );

    let Geometry::LineString(course) = &scene.entries()[9].geometry else {
        panic!("Entry 9 should be the extended ILS course");
    };
    assert_point_near(
        course[0],
        -86.35692774318159,
        32.36898330040276,
        "course start (station)",
    );
    assert_point_near(
        course[1],
        -86.46148340777958,
        32.510613597378864,
        "course extension",
    );
}

#[test]
fn exported_records_round_trip_through_json() {
    let scene = default_scene();
    let records = scene_records(&scene);
    let text = to_json(&scene).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), records.len());
    for (value, record) in array.iter().zip(&records) {
        assert_eq!(value["geometryKind"], record.geometry_kind);
        assert_eq!(value["styleId"], record.style_id);
        assert_eq!(
            value["coordinates"].as_array().unwrap().len(),
            record.coordinates.len()
        );
    }
}

#[test]
fn rebuilding_the_scene_is_reproducible() {
    // The scene is derived purely from the survey constants; two builds
    // must agree bit for bit, including order.
    assert_eq!(default_scene(), default_scene());
}
