//! Command implementations for geobbox.

pub mod bbox;

pub use bbox::{BboxCommand, BboxStats};
