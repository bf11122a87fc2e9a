//! # GeoLibrary - Geographic Geometry Values
//!
//! This crate models geographic geometries (points and aggregates of points)
//! with strict coordinate validity, tolerance-based equality, a small set
//! algebra and a canonical WKT writer.
//!
//! ## Features
//!
//! - **Validity**: longitudes in `[-180, 180]` and latitudes in `[-90, 90]`,
//!   widened by [`EPSILON`] to absorb rounding at the boundary
//! - **Tolerant Equality**: points compare equal when every axis differs by
//!   less than [`EPSILON`]
//! - **Set Algebra**: union, intersects test and intersection across
//!   [`Point`] and [`MultiPoint`], with invalid or empty operands acting as
//!   the empty set
//! - **WKT Output**: `POINT`, `MULTIPOINT`, `LINESTRING`, `POLYGON` and
//!   `MULTIPOLYGON` text
//!
//! ## Quick Start
//!
//! ```rust
//! use geolibrary::{Geometry, GeometryError, Point, WktGeometry};
//!
//! # fn main() -> Result<(), GeometryError> {
//! let a = Geometry::point(100.0, 50.0);
//! let b = Geometry::point(120.0, 60.0);
//!
//! let union = a.union(&b)?;
//! assert_eq!(union.to_wkt()?, "MULTIPOINT (100 50, 120 60)");
//!
//! assert!(a.is_intersects(&union)?);
//! assert_eq!(a.intersection(&b)?, None);
//!
//! // Invalid geometries never serialize
//! assert!(Point::empty().to_wkt().is_err());
//! # Ok(())
//! # }
//! ```

mod algebra;
pub mod constants;
pub mod errors;
pub mod geometry;
pub mod validator;
pub mod wkt_writer;

pub use constants::EPSILON;
pub use errors::{GeometryError, GeometryResult};
pub use geometry::{
    Coordinate, Geometry, GeometryKind, LineString, MultiPoint, MultiPolygon, Point, Polygon,
};
pub use validator::is_valid_coordinate;
pub use wkt_writer::{WktGeometry, WktWriter};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_geometry_types_are_send_sync() {
        assert_send_sync::<Point>();
        assert_send_sync::<MultiPoint>();
        assert_send_sync::<LineString>();
        assert_send_sync::<Polygon>();
        assert_send_sync::<MultiPolygon>();
        assert_send_sync::<Geometry>();
        assert_send_sync::<GeometryError>();
    }
}
