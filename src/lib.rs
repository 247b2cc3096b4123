//! geobbox: bounding box of longitude/latitude points
//!
//! Reads `<lon> <lat>` lines, folds them into the minimal enclosing
//! rectangle and writes that rectangle as a GeoJSON polygon feature.
//!
//! # Example
//!
//! ```rust
//! use geobbox::{commands::BboxCommand, PointReader};
//!
//! let input = "10 20\n-5 30\n";
//! let mut output = Vec::new();
//! let stats = BboxCommand::new()
//!     .run_streaming(PointReader::new(input.as_bytes()), &mut output)
//!     .unwrap();
//!
//! assert_eq!(stats.bound.unwrap().to_array(), [-5.0, 20.0, 10.0, 30.0]);
//! ```

pub mod bound;
pub mod commands;
pub mod feature;
pub mod parsing;
pub mod point;
pub mod reader;

// Re-export commonly used types
pub use bound::Bound;
pub use feature::{write_feature, Feature};
pub use parsing::{parse_point, FloatError, PointError};
pub use point::Point;
pub use reader::{parse_points, BboxError, PointReader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
