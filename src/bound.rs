//! Axis-aligned bounding rectangle over longitude/latitude points.
//!
//! Longitude is a plain real number here: a point set that straddles the
//! antimeridian yields a bound spanning the long way around.

use crate::point::Point;
use std::fmt;

/// Minimal enclosing rectangle of a set of points.
///
/// Always built from at least one point, so `min <= max` holds on both
/// axes (unless a NaN coordinate has been folded in).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub min: Point,
    pub max: Point,
}

impl Bound {
    /// Degenerate bound covering a single point.
    #[inline]
    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Returns the bound grown to also cover `p`.
    #[inline]
    #[must_use]
    pub fn extend(self, p: Point) -> Self {
        Self {
            min: Point::new(nan_min(self.min.lon, p.lon), nan_min(self.min.lat, p.lat)),
            max: Point::new(nan_max(self.max.lon, p.lon), nan_max(self.max.lat, p.lat)),
        }
    }

    /// The bound as `[min_lon, min_lat, max_lon, max_lat]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.min.lon, self.min.lat, self.max.lon, self.max.lat]
    }

    /// Closed boundary ring, counter-clockwise from the minimum corner.
    pub fn to_ring(&self) -> [Point; 5] {
        [
            self.min,
            Point::new(self.max.lon, self.min.lat),
            self.max,
            Point::new(self.min.lon, self.max.lat),
            self.min,
        ]
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.min.lon, self.min.lat, self.max.lon, self.max.lat
        )
    }
}

// IEEE minimum: NaN wins, and -0 is below +0.
#[inline]
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a == b {
        if a.is_sign_negative() {
            a
        } else {
            b
        }
    } else {
        a.min(b)
    }
}

// IEEE maximum: NaN wins, and +0 is above -0.
#[inline]
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a == b {
        if a.is_sign_positive() {
            a
        } else {
            b
        }
    } else {
        a.max(b)
    }
}
