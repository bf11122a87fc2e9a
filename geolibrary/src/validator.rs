//! Coordinate validation and tolerant comparison.
//!
//! Every range check and every coordinate comparison in the crate goes
//! through this module so that [`EPSILON`] is applied the same way everywhere.

use crate::constants::{EPSILON, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};

/// Checks whether a longitude/latitude pair lies inside the geographic
/// envelope, widened by [`EPSILON`] on every side.
///
/// NaN and infinite values are never valid.
///
/// # Example
///
/// ```rust
/// use geolibrary::validator::is_valid_coordinate;
///
/// assert!(is_valid_coordinate(-170.1, 90.0));
/// assert!(is_valid_coordinate(180.000000001, -70.0));
/// assert!(!is_valid_coordinate(180.0001, -70.0));
/// ```
pub fn is_valid_coordinate(longitude: f64, latitude: f64) -> bool {
    within_envelope(longitude, MIN_LONGITUDE, MAX_LONGITUDE)
        && within_envelope(latitude, MIN_LATITUDE, MAX_LATITUDE)
}

/// Returns true when two values differ by strictly less than [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn within_envelope(value: f64, min: f64, max: f64) -> bool {
    value >= min - EPSILON && value <= max + EPSILON
}
