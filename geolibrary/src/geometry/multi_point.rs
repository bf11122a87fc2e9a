use serde::{Deserialize, Serialize};

use super::Point;

/// An ordered collection of points.
///
/// Construction keeps the points exactly as given, duplicates included.
/// Duplicates are only dropped when points are merged by
/// [`Geometry::union`](crate::Geometry::union).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint {
    points: Vec<Point>,
}

impl MultiPoint {
    /// Creates a multipoint from its members, in order.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Gets the member points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of member points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Checks whether some member equals `point` within tolerance.
    pub fn contains(&self, point: &Point) -> bool {
        self.points.iter().any(|p| p == point)
    }

    /// Valid when non-empty and every member is valid.
    pub fn is_valid(&self) -> bool {
        !self.points.is_empty() && self.points.iter().all(Point::is_valid)
    }
}

impl FromIterator<Point> for MultiPoint {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        MultiPoint::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MultiPoint {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
