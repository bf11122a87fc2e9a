use geolibrary::{Geometry, LineString, MultiPoint, MultiPolygon, Point, Polygon};

/// Builds a multipoint from `(longitude, latitude)` pairs.
pub fn multi_point(coords: &[(f64, f64)]) -> MultiPoint {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Builds a line string (or ring) from `(longitude, latitude)` pairs.
pub fn line_string(coords: &[(f64, f64)]) -> LineString {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Builds a polygon, exterior ring first.
pub fn polygon(rings: &[&[(f64, f64)]]) -> Polygon {
    Polygon::new(rings.iter().map(|ring| line_string(ring)).collect())
}

pub fn multi_polygon(polygons: Vec<Polygon>) -> MultiPolygon {
    MultiPolygon::new(polygons)
}

/// A multipoint geometry, for algebra tests.
pub fn multi_point_geometry(coords: &[(f64, f64)]) -> Geometry {
    Geometry::from(multi_point(coords))
}
