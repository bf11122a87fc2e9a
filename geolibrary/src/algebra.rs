//! Set operations over geometry values.
//!
//! Rules are defined per pair of variants. Invalid and empty operands are
//! not errors: they act as the empty set, contributing nothing to a union and
//! never intersecting anything. Pairs without a rule fail with
//! [`GeometryError::UnsupportedCombination`].
//!
//! | left \ right | Point | MultiPoint | others |
//! |---|---|---|---|
//! | Point | yes | yes | unsupported |
//! | MultiPoint | yes | yes | unsupported |
//! | others | unsupported | unsupported | unsupported |

use crate::errors::{GeometryError, GeometryResult};
use crate::geometry::{Geometry, MultiPoint, Point};

impl Geometry {
    /// Computes the union of two geometries.
    ///
    /// - Equal points give a copy of the point, distinct points a multipoint
    ///   holding `self` then `other`.
    /// - A point and a multipoint give the multipoint, with the point appended
    ///   unless it is already a member.
    /// - Two multipoints give the members of `self` followed by the members of
    ///   `other` that are not present yet.
    ///
    /// # Errors
    /// Returns [`GeometryError::UnsupportedCombination`] when either operand is
    /// a line string, polygon or multipolygon.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geolibrary::Geometry;
    ///
    /// let a = Geometry::point(100.0, 50.0);
    /// let b = Geometry::point(120.0, 60.0);
    /// let union = a.union(&b).unwrap();
    /// assert_eq!(union.as_multi_point().map(|mp| mp.len()), Some(2));
    /// ```
    pub fn union(&self, other: &Geometry) -> GeometryResult<Geometry> {
        match (self, other) {
            (Geometry::Point(a), Geometry::Point(b)) => Ok(union_points(a, b)),
            (Geometry::Point(point), Geometry::MultiPoint(multi_point))
            | (Geometry::MultiPoint(multi_point), Geometry::Point(point)) => {
                let mut points = multi_point.points().to_vec();
                push_unique(&mut points, point);
                Ok(Geometry::multi_point(points))
            }
            (Geometry::MultiPoint(a), Geometry::MultiPoint(b)) => {
                let mut points = a.points().to_vec();
                for point in b {
                    push_unique(&mut points, point);
                }
                Ok(Geometry::multi_point(points))
            }
            (
                Geometry::LineString(_) | Geometry::Polygon(_) | Geometry::MultiPolygon(_),
                _,
            )
            | (
                _,
                Geometry::LineString(_) | Geometry::Polygon(_) | Geometry::MultiPolygon(_),
            ) => Err(unsupported("union", self, other)),
        }
    }

    /// Checks whether the two geometries share at least one point.
    ///
    /// Always false when either operand is invalid or empty.
    ///
    /// # Errors
    /// Same variant restrictions as [`Geometry::union`].
    pub fn is_intersects(&self, other: &Geometry) -> GeometryResult<bool> {
        self.intersection(other).map(|common| common.is_some())
    }

    /// Computes the points shared by two geometries.
    ///
    /// Returns `Ok(None)` when nothing is shared, which includes every case
    /// where an operand is invalid or empty. A single shared point comes back
    /// as a [`Geometry::Point`], several as a [`Geometry::MultiPoint`] in the
    /// order they appear in `self`.
    ///
    /// # Errors
    /// Same variant restrictions as [`Geometry::union`].
    pub fn intersection(&self, other: &Geometry) -> GeometryResult<Option<Geometry>> {
        match (self, other) {
            (Geometry::Point(a), Geometry::Point(b)) => {
                Ok((a == b).then(|| Geometry::Point(a.clone())))
            }
            (Geometry::Point(point), Geometry::MultiPoint(multi_point))
            | (Geometry::MultiPoint(multi_point), Geometry::Point(point)) => {
                Ok(multi_point
                    .contains(point)
                    .then(|| Geometry::Point(point.clone())))
            }
            (Geometry::MultiPoint(a), Geometry::MultiPoint(b)) => Ok(common_points(a, b)),
            (
                Geometry::LineString(_) | Geometry::Polygon(_) | Geometry::MultiPolygon(_),
                _,
            )
            | (
                _,
                Geometry::LineString(_) | Geometry::Polygon(_) | Geometry::MultiPolygon(_),
            ) => Err(unsupported("intersection", self, other)),
        }
    }
}

fn union_points(a: &Point, b: &Point) -> Geometry {
    match (a.is_valid(), b.is_valid()) {
        (true, true) if a == b => Geometry::Point(a.clone()),
        (true, true) => Geometry::multi_point(vec![a.clone(), b.clone()]),
        (true, false) => Geometry::Point(a.clone()),
        (false, true) => Geometry::Point(b.clone()),
        (false, false) => Geometry::Point(Point::empty()),
    }
}

/// Appends a copy of `point` unless it is invalid or already present.
fn push_unique(points: &mut Vec<Point>, point: &Point) {
    if point.is_valid() && !points.contains(point) {
        points.push(point.clone());
    }
}

fn common_points(a: &MultiPoint, b: &MultiPoint) -> Option<Geometry> {
    let mut common: Vec<Point> = Vec::new();
    a.iter()
        .filter(|p| b.contains(p))
        .for_each(|point| push_unique(&mut common, point));

    match common.len() {
        0 => None,
        1 => common.pop().map(Geometry::Point),
        _ => Some(Geometry::multi_point(common)),
    }
}

fn unsupported(operation: &str, left: &Geometry, right: &Geometry) -> GeometryError {
    log::debug!(
        "No {} rule for {} and {}",
        operation,
        left.kind(),
        right.kind()
    );
    GeometryError::UnsupportedCombination {
        left: left.kind(),
        right: right.kind(),
    }
}
