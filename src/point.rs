//! Geographic point type.

use std::fmt;

/// A longitude/latitude pair, in the order the coordinates appear on input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub lon: f64,
    pub lat: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// The point as a `[lon, lat]` position.
    #[inline]
    pub fn position(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lon, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_keeps_input_order() {
        let p = Point::new(10.5, -20.25);
        assert_eq!(p.position(), [10.5, -20.25]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1.5, 2.0).to_string(), "1.5 2");
    }
}
