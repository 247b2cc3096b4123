//! Streaming bounding box over `<lon> <lat>` lines.
//!
//! # Algorithm
//!
//! 1. Read the first point; on empty input stop without writing anything
//! 2. Start from the degenerate bound at that point
//! 3. Extend the bound with every following point
//! 4. Write the bound as a GeoJSON polygon feature
//!
//! The first failing line aborts the run; nothing is written for the
//! points accumulated so far.
//!
//! # Memory Complexity
//!
//! O(1) - only the current bound and one line buffer are held.

use crate::bound::Bound;
use crate::feature::write_feature;
use crate::reader::{PointReader, Result};
use log::{debug, trace};
use std::fmt;
use std::io::{self, Read, Write};

/// Buffer size for reading stdin.
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Bounding box command.
#[derive(Debug, Clone, Default)]
pub struct BboxCommand;

impl BboxCommand {
    pub fn new() -> Self {
        Self
    }

    /// Execute on stdin, writing to `output`.
    pub fn run_stdin<W: Write>(&self, output: &mut W) -> Result<BboxStats> {
        let stdin = io::stdin();
        let reader = PointReader::with_capacity(stdin.lock(), READ_BUFFER_SIZE);
        self.run_streaming(reader, output)
    }

    /// Fold every point of `reader` into a bound and emit it.
    pub fn run_streaming<R: Read, W: Write>(
        &self,
        mut reader: PointReader<R>,
        output: &mut W,
    ) -> Result<BboxStats> {
        let bound = match self.accumulate(&mut reader)? {
            Some(bound) => bound,
            None => {
                debug!("empty input, nothing to emit");
                return Ok(BboxStats::default());
            }
        };

        write_feature(output, &bound)?;

        let stats = BboxStats {
            lines_read: reader.line_number(),
            bound: Some(bound),
        };
        debug!("{}", stats);
        Ok(stats)
    }

    /// Bound of all points in `reader`, or `None` if it holds no lines.
    pub fn accumulate<R: Read>(&self, reader: &mut PointReader<R>) -> Result<Option<Bound>> {
        let first = match reader.read_point()? {
            Some(p) => p,
            None => return Ok(None),
        };
        trace!("line {}: {}", reader.line_number(), first);

        let mut bound = Bound::from_point(first);
        while let Some(p) = reader.read_point()? {
            trace!("line {}: {}", reader.line_number(), p);
            bound = bound.extend(p);
        }
        Ok(Some(bound))
    }
}

/// Statistics from a bounding box run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BboxStats {
    /// Number of lines read
    pub lines_read: u64,
    /// Resulting bound, `None` for empty input
    pub bound: Option<Bound>,
}

impl fmt::Display for BboxStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.bound {
            Some(bound) => write!(f, "Read: {}, Bound: {}", self.lines_read, bound),
            None => write!(f, "Read: {}, Bound: none", self.lines_read),
        }
    }
}
