use serde::{Deserialize, Serialize};

use crate::validator::{approx_eq, is_valid_coordinate};

/// A raw longitude/latitude pair (x = longitude, y = latitude).
///
/// `PartialEq` on a coordinate is exact; use [`Coordinate::approx_eq`] for the
/// tolerant comparison that [`Point`] equality is built on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Checks whether both axes are within tolerance of `other`.
    pub fn approx_eq(&self, other: &Coordinate) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }

    /// Checks whether this coordinate lies inside the geographic envelope.
    pub fn is_valid(&self) -> bool {
        is_valid_coordinate(self.x, self.y)
    }
}

/// A geographic point.
///
/// A point built with [`Point::empty`] (or `Default`) carries no coordinate
/// and is never valid. It stands for the empty set in the algebra.
///
/// Equality is tolerant: two points are equal when both are valid and each
/// axis differs by less than [`EPSILON`](crate::constants::EPSILON). An
/// invalid point is not equal to anything, itself included.
///
/// ## Example
///
/// ```rust
/// use geolibrary::Point;
///
/// let a = Point::new(100.000000003, 50.0);
/// let b = Point::new(100.0, 50.000000003);
/// assert_eq!(a, b);
/// assert!(!Point::empty().is_valid());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Point {
    coordinate: Option<Coordinate>,
}

impl Point {
    /// Creates a point at the given longitude and latitude.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            coordinate: Some(Coordinate::new(longitude, latitude)),
        }
    }

    /// Creates the uninitialized point.
    pub fn empty() -> Self {
        Self { coordinate: None }
    }

    /// Creates a point from a coordinate.
    pub fn from_coordinate(coordinate: Coordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
        }
    }

    /// Gets the coordinate, if one was given.
    pub fn coordinate(&self) -> Option<&Coordinate> {
        self.coordinate.as_ref()
    }

    /// Gets the longitude (x).
    pub fn longitude(&self) -> Option<f64> {
        self.coordinate.map(|c| c.x)
    }

    /// Gets the latitude (y).
    pub fn latitude(&self) -> Option<f64> {
        self.coordinate.map(|c| c.y)
    }

    /// Returns true for the uninitialized point.
    pub fn is_empty(&self) -> bool {
        self.coordinate.is_none()
    }

    /// A point is valid when it has a coordinate inside the envelope.
    pub fn is_valid(&self) -> bool {
        self.coordinate.is_some_and(|c| c.is_valid())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        match (self.coordinate, other.coordinate) {
            (Some(a), Some(b)) => a.is_valid() && b.is_valid() && a.approx_eq(&b),
            _ => false,
        }
    }
}

impl From<Coordinate> for Point {
    fn from(coordinate: Coordinate) -> Self {
        Point::from_coordinate(coordinate)
    }
}
