//! Tolerance and envelope constants shared by validation, equality and the algebra.

/// Tolerance for coordinate comparisons and for the envelope boundary.
///
/// Absorbs floating point rounding: `180.000000001` is still a legal
/// longitude and `100.000000003` compares equal to `100`.
pub const EPSILON: f64 = 1e-8;

/// Western edge of the longitude envelope, in degrees
pub const MIN_LONGITUDE: f64 = -180.0;

/// Eastern edge of the longitude envelope, in degrees
pub const MAX_LONGITUDE: f64 = 180.0;

/// Southern edge of the latitude envelope, in degrees
pub const MIN_LATITUDE: f64 = -90.0;

/// Northern edge of the latitude envelope, in degrees
pub const MAX_LATITUDE: f64 = 90.0;
