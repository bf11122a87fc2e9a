use serde::{Deserialize, Serialize};

use super::LineString;

/// A polygon with optional interior holes.
///
/// The first ring is the exterior boundary, any further rings are holes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    rings: Vec<LineString>,
}

impl Polygon {
    /// Creates a polygon from its rings, exterior first.
    pub fn new(rings: Vec<LineString>) -> Self {
        Self { rings }
    }

    /// Gets all rings.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// Gets the exterior ring.
    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// Gets the interior rings (holes).
    pub fn holes(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Valid when there is at least one ring and every ring is valid.
    pub fn is_valid(&self) -> bool {
        !self.rings.is_empty() && self.rings.iter().all(LineString::is_valid)
    }
}

/// A collection of polygons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Valid when non-empty and every polygon is valid.
    pub fn is_valid(&self) -> bool {
        !self.polygons.is_empty() && self.polygons.iter().all(Polygon::is_valid)
    }
}
