//! WKT (Well-Known Text) serialization.
//!
//! Produces the canonical text of each variant:
//! - POINT (x y)
//! - MULTIPOINT (x y, x y, ...)
//! - LINESTRING (x y, x y, ...)
//! - POLYGON ((x y, ..., x y), (hole), ...)
//! - MULTIPOLYGON (((x y, ..., x y)), ((x y, ..., x y)), ...)
//!
//! Numbers use the shortest decimal form that round-trips (`10`, `10.5`),
//! never an exponent. Only valid geometries can be written.

use crate::errors::{GeometryError, GeometryResult};
use crate::geometry::{
    Geometry, GeometryKind, LineString, MultiPoint, MultiPolygon, Point, Polygon,
};

/// A geometry that can be written as WKT.
///
/// Text is only ever produced for valid geometries; there is no way to
/// render the body of an invalid one.
pub trait WktGeometry {
    /// Writes this geometry as WKT.
    ///
    /// # Errors
    /// Returns [`GeometryError::InvalidGeometry`] if the geometry is not valid.
    fn to_wkt(&self) -> GeometryResult<String>;
}

/// Writes geometries as WKT text.
///
/// ## Example
///
/// ```rust
/// use geolibrary::{Point, WktGeometry, WktWriter};
///
/// let point = Point::new(10.0, 20.0);
/// assert_eq!(WktWriter::write(&point).unwrap(), "POINT (10 20)");
/// assert_eq!(point.to_wkt().unwrap(), "POINT (10 20)");
///
/// let err = WktWriter::write(&Point::empty()).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid geometry");
/// ```
pub struct WktWriter;

impl WktWriter {
    /// Writes a geometry as WKT.
    ///
    /// # Errors
    /// Returns [`GeometryError::InvalidGeometry`] if the geometry is not valid.
    pub fn write<G: WktGeometry + ?Sized>(geometry: &G) -> GeometryResult<String> {
        geometry.to_wkt()
    }
}

impl WktGeometry for Point {
    fn to_wkt(&self) -> GeometryResult<String> {
        write_checked(GeometryKind::Point, self.is_valid(), |out| {
            write_point_body(out, self)
        })
    }
}

impl WktGeometry for MultiPoint {
    fn to_wkt(&self) -> GeometryResult<String> {
        write_checked(GeometryKind::MultiPoint, self.is_valid(), |out| {
            write_point_list(out, self.points())
        })
    }
}

impl WktGeometry for LineString {
    fn to_wkt(&self) -> GeometryResult<String> {
        write_checked(GeometryKind::LineString, self.is_valid(), |out| {
            write_point_list(out, self.points())
        })
    }
}

impl WktGeometry for Polygon {
    fn to_wkt(&self) -> GeometryResult<String> {
        write_checked(GeometryKind::Polygon, self.is_valid(), |out| {
            write_polygon_body(out, self)
        })
    }
}

impl WktGeometry for MultiPolygon {
    fn to_wkt(&self) -> GeometryResult<String> {
        write_checked(GeometryKind::MultiPolygon, self.is_valid(), |out| {
            write_list(out, self.polygons(), write_polygon_body)
        })
    }
}

impl WktGeometry for Geometry {
    fn to_wkt(&self) -> GeometryResult<String> {
        match self {
            Geometry::Point(p) => p.to_wkt(),
            Geometry::MultiPoint(mp) => mp.to_wkt(),
            Geometry::LineString(ls) => ls.to_wkt(),
            Geometry::Polygon(p) => p.to_wkt(),
            Geometry::MultiPolygon(mp) => mp.to_wkt(),
        }
    }
}

/// Writes `TAG body`, or fails before producing any text when `valid` is false.
fn write_checked<F>(kind: GeometryKind, valid: bool, write_body: F) -> GeometryResult<String>
where
    F: FnOnce(&mut String) -> GeometryResult<()>,
{
    if !valid {
        log::debug!("Refusing to write invalid {} geometry", kind);
        return Err(GeometryError::InvalidGeometry { kind });
    }

    let mut wkt = kind.to_string();
    wkt.push(' ');
    write_body(&mut wkt)?;
    log::trace!("Wrote {}", wkt);
    Ok(wkt)
}

/// Writes `(item, item, ...)` using `write_item` for each member.
fn write_list<T, F>(out: &mut String, items: &[T], mut write_item: F) -> GeometryResult<()>
where
    F: FnMut(&mut String, &T) -> GeometryResult<()>,
{
    out.push('(');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_item(out, item)?;
    }
    out.push(')');
    Ok(())
}

fn write_point_body(out: &mut String, point: &Point) -> GeometryResult<()> {
    out.push('(');
    write_coordinate(out, point)?;
    out.push(')');
    Ok(())
}

fn write_point_list(out: &mut String, points: &[Point]) -> GeometryResult<()> {
    write_list(out, points, write_coordinate)
}

fn write_polygon_body(out: &mut String, polygon: &Polygon) -> GeometryResult<()> {
    write_list(out, polygon.rings(), |out, ring| write_point_list(out, ring.points()))
}

fn write_coordinate(out: &mut String, point: &Point) -> GeometryResult<()> {
    let coordinate = point.coordinate().ok_or(GeometryError::InvalidGeometry {
        kind: GeometryKind::Point,
    })?;
    out.push_str(&format_number(coordinate.x));
    out.push(' ');
    out.push_str(&format_number(coordinate.y));
    Ok(())
}

fn format_number(value: f64) -> String {
    // -0.0 prints as "-0"
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
