use serde::{Deserialize, Serialize};

use super::Point;

/// A line string defined by an ordered sequence of points.
///
/// A closed line string (first and last points equal) is used as a polygon ring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    /// Creates a new line string. Any number of points is accepted.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Gets the points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Checks if the line string is closed (first point equals last point).
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Valid when non-empty and every point is valid.
    pub fn is_valid(&self) -> bool {
        !self.points.is_empty() && self.points.iter().all(Point::is_valid)
    }
}

impl FromIterator<Point> for LineString {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        LineString::new(iter.into_iter().collect())
    }
}
