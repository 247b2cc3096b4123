//! GeoJSON output of a bound.
//!
//! The document shape is fixed:
//!
//! ```text
//! {"type":"Feature","bbox":[w,s,e,n],
//!  "geometry":{"type":"Polygon","coordinates":[[[w,s],[e,s],[e,n],[w,n],[w,s]]]},
//!  "properties":null}
//! ```

use crate::bound::Bound;
use crate::reader::{BboxError, Result};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::io::Write;

/// A single coordinate value. JSON has no NaN or infinity, so serializing a
/// non-finite value fails instead of writing `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ordinate(pub f64);

impl Serialize for Ordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if !self.0.is_finite() {
            return Err(S::Error::custom(format!("unsupported value: {}", self.0)));
        }
        serializer.serialize_f64(self.0)
    }
}

/// `[lon, lat]` position.
pub type Position = [Ordinate; 2];

/// Polygon geometry with a single exterior ring.
#[derive(Debug, Clone, Serialize)]
pub struct Polygon {
    #[serde(rename = "type")]
    kind: &'static str,
    pub coordinates: Vec<Vec<Position>>,
}

impl Polygon {
    pub fn new(exterior: Vec<Position>) -> Self {
        Self {
            kind: "Polygon",
            coordinates: vec![exterior],
        }
    }
}

/// GeoJSON feature carrying the bound as both `bbox` and geometry.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    pub bbox: [Ordinate; 4],
    pub geometry: Polygon,
    pub properties: Option<Map<String, Value>>,
}

impl Feature {
    /// Build the rectangle feature for `bound`.
    pub fn from_bound(bound: &Bound) -> Self {
        let ring = bound
            .to_ring()
            .iter()
            .map(|p| p.position().map(Ordinate))
            .collect();
        Self {
            kind: "Feature",
            bbox: bound.to_array().map(Ordinate),
            geometry: Polygon::new(ring),
            properties: None,
        }
    }

    /// Serialize to a single-line JSON document.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Write the feature for `bound` to `output`.
///
/// The document is fully serialized before anything is written, so a
/// serialization failure leaves `output` untouched. No trailing newline.
pub fn write_feature<W: Write>(output: &mut W, bound: &Bound) -> Result<()> {
    let json = Feature::from_bound(bound).to_json()?;
    output.write_all(&json).map_err(BboxError::Write)?;
    output.flush().map_err(BboxError::Write)?;
    Ok(())
}
