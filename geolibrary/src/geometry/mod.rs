//! Geometry value types.
//!
//! The variant set is closed: [`Point`], [`MultiPoint`], [`LineString`],
//! [`Polygon`] and [`MultiPolygon`], wrapped by the [`Geometry`] enum.
//! Values are plain owned data; the algebra and the writer never mutate them.

mod line_string;
mod multi_point;
mod point;
mod polygon;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

pub use line_string::LineString;
pub use multi_point::MultiPoint;
pub use point::{Coordinate, Point};
pub use polygon::{MultiPolygon, Polygon};

/// Discriminant of a geometry variant.
///
/// Displays as the WKT tag of the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    Polygon,
    MultiPolygon,
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            GeometryKind::Point => "POINT",
            GeometryKind::MultiPoint => "MULTIPOINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPolygon => "MULTIPOLYGON",
        };
        f.write_str(tag)
    }
}

/// Any geometry value.
///
/// Equality compares variants first; values of different variants are never
/// equal. Within a variant the comparison is member-wise and in order, using
/// the tolerant [`Point`] equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    /// Creates a point geometry.
    pub fn point(longitude: f64, latitude: f64) -> Self {
        Geometry::Point(Point::new(longitude, latitude))
    }

    /// Creates the uninitialized (always invalid) point geometry.
    pub fn empty_point() -> Self {
        Geometry::Point(Point::empty())
    }

    /// Creates a multipoint geometry.
    pub fn multi_point(points: Vec<Point>) -> Self {
        Geometry::MultiPoint(MultiPoint::new(points))
    }

    /// Gets the variant of this geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    /// Checks the validity rule of the underlying variant.
    pub fn is_valid(&self) -> bool {
        match self {
            Geometry::Point(p) => p.is_valid(),
            Geometry::MultiPoint(mp) => mp.is_valid(),
            Geometry::LineString(ls) => ls.is_valid(),
            Geometry::Polygon(p) => p.is_valid(),
            Geometry::MultiPolygon(mp) => mp.is_valid(),
        }
    }

    /// Returns true for an uninitialized point or an aggregate without members.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(p) => p.is_empty(),
            Geometry::MultiPoint(mp) => mp.is_empty(),
            Geometry::LineString(ls) => ls.is_empty(),
            Geometry::Polygon(p) => p.is_empty(),
            Geometry::MultiPolygon(mp) => mp.is_empty(),
        }
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Geometry::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_multi_point(&self) -> Option<&MultiPoint> {
        match self {
            Geometry::MultiPoint(mp) => Some(mp),
            _ => None,
        }
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Geometry::Point(point)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(multi_point: MultiPoint) -> Self {
        Geometry::MultiPoint(multi_point)
    }
}

impl From<LineString> for Geometry {
    fn from(line_string: LineString) -> Self {
        Geometry::LineString(line_string)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Geometry::Polygon(polygon)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(multi_polygon: MultiPolygon) -> Self {
        Geometry::MultiPolygon(multi_polygon)
    }
}
