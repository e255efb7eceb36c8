//! Scene model: styled geometric primitives for the renderer.
//!
//! A scene is an ordered, immutable list of geometries, each tagged with an
//! opaque style id. The renderer resolves style ids to concrete visual
//! parameters (color, radius, stroke width) and iterates the list in order
//! on each redraw; the core never recomputes or mutates a built scene.

mod builder;

pub use builder::{build_scene, SceneParams};

use crate::geo::GeoPoint;

/// A geometric primitive in geographic coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A single position.
    Point(GeoPoint),
    /// An open polyline.
    LineString(Vec<GeoPoint>),
    /// A single closed ring (first and last vertex identical).
    Polygon(Vec<GeoPoint>),
}

impl Geometry {
    /// The renderer-facing kind discriminator.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "point",
            Geometry::LineString(_) => "lineString",
            Geometry::Polygon(_) => "polygon",
        }
    }

    /// All vertices of this geometry, in order.
    pub fn vertices(&self) -> &[GeoPoint] {
        match self {
            Geometry::Point(p) => std::slice::from_ref(p),
            Geometry::LineString(points) => points,
            Geometry::Polygon(ring) => ring,
        }
    }
}

/// Opaque style token resolved by the renderer.
///
/// Geometry computation never touches colors or stroke widths; the renderer
/// maps each id to its own visual parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleId {
    /// Runway threshold marker points.
    RunwayThreshold,
    /// Runway edge corner points.
    RunwayEdge,
    /// The ILS station point.
    IlsStation,
    /// The ILS capture corridor wedge.
    IlsCorridorFill,
    /// Extended runway centerline for the inbound course.
    RunwayCenterlineExtended,
    /// Extended ILS course centerline.
    IlsCenterlineExtended,
}

impl StyleId {
    /// The stable string id the renderer keys its style table on.
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleId::RunwayThreshold => "runway-threshold",
            StyleId::RunwayEdge => "runway-edge",
            StyleId::IlsStation => "ils-station",
            StyleId::IlsCorridorFill => "ils-corridor-fill",
            StyleId::RunwayCenterlineExtended => "runway-centerline-extended",
            StyleId::IlsCenterlineExtended => "ils-centerline-extended",
        }
    }
}

/// One geometry paired with its style token.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledGeometry {
    /// The geometry to draw.
    pub geometry: Geometry,
    /// How the renderer should draw it.
    pub style: StyleId,
}

/// An ordered, immutable sequence of styled geometries.
///
/// Built once at startup; redraw callbacks only read it, so no locking is
/// needed to share it with a render loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    entries: Vec<StyledGeometry>,
}

impl Scene {
    pub(crate) fn new(entries: Vec<StyledGeometry>) -> Self {
        Self { entries }
    }

    /// The styled geometries in draw order.
    pub fn entries(&self) -> &[StyledGeometry] {
        &self.entries
    }

    /// Number of entries in the scene.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a StyledGeometry;
    type IntoIter = std::slice::Iter<'a, StyledGeometry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_kind_discriminators() {
        let p = GeoPoint::new(0.0, 0.0);
        assert_eq!(Geometry::Point(p).kind(), "point");
        assert_eq!(Geometry::LineString(vec![p, p]).kind(), "lineString");
        assert_eq!(Geometry::Polygon(vec![p, p, p]).kind(), "polygon");
    }

    #[test]
    fn test_style_ids_are_stable_strings() {
        assert_eq!(StyleId::RunwayThreshold.as_str(), "runway-threshold");
        assert_eq!(StyleId::RunwayEdge.as_str(), "runway-edge");
        assert_eq!(StyleId::IlsStation.as_str(), "ils-station");
        assert_eq!(StyleId::IlsCorridorFill.as_str(), "ils-corridor-fill");
        assert_eq!(
            StyleId::RunwayCenterlineExtended.as_str(),
            "runway-centerline-extended"
        );
        assert_eq!(
            StyleId::IlsCenterlineExtended.as_str(),
            "ils-centerline-extended"
        );
    }
}
