//! Streaming reader of `<lon> <lat>` lines.

use crate::parsing::{parse_point, PointError};
use crate::point::Point;
use std::io::{self, BufRead, BufReader, Read};
use thiserror::Error;

/// Errors that can end a run.
///
/// The `Display` form of the input variants is the exact diagnostic printed
/// on stderr: `<line>: <message>`, followed by the offending text when it is
/// available.
#[derive(Error, Debug)]
pub enum BboxError {
    #[error("{line}: {source}")]
    Read { line: u64, source: io::Error },

    #[error("{line}: {source}\n  [{text}]")]
    Parse {
        line: u64,
        source: PointError,
        text: String,
    },

    #[error("writing output: {0}")]
    Write(#[source] io::Error),

    #[error("serializing feature: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BboxError>;

/// A streaming point reader.
///
/// Lines end at `\n`; a single `\r` in front of it (or at the end of an
/// unterminated last line) is dropped as well.
pub struct PointReader<R: Read> {
    reader: BufReader<R>,
    line_number: u64,
    buffer: Vec<u8>,
}

impl<R: Read> PointReader<R> {
    /// Create a new point reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: Vec::with_capacity(256),
        }
    }

    /// Create a point reader with custom buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: Vec::with_capacity(256),
        }
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Read the next raw line, without its terminator.
    ///
    /// A read failure is attributed to the line being fetched, one past the
    /// last line returned.
    pub fn read_line(&mut self) -> Result<Option<&[u8]>> {
        self.buffer.clear();
        let bytes_read = self
            .reader
            .read_until(b'\n', &mut self.buffer)
            .map_err(|source| BboxError::Read {
                line: self.line_number + 1,
                source,
            })?;
        if bytes_read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
        }
        if self.buffer.last() == Some(&b'\r') {
            self.buffer.pop();
        }
        Ok(Some(self.buffer.as_slice()))
    }

    /// Read and parse the next point.
    pub fn read_point(&mut self) -> Result<Option<Point>> {
        if self.read_line()?.is_none() {
            return Ok(None);
        }
        let line = &self.buffer;
        match parse_point(line) {
            Ok(p) => Ok(Some(p)),
            Err(source) => Err(BboxError::Parse {
                line: self.line_number,
                source,
                text: String::from_utf8_lossy(line).into_owned(),
            }),
        }
    }

    /// Get an iterator over all points.
    pub fn points(self) -> PointIter<R> {
        PointIter { reader: self }
    }
}

/// Iterator over parsed points.
pub struct PointIter<R: Read> {
    reader: PointReader<R>,
}

impl<R: Read> Iterator for PointIter<R> {
    type Item = Result<Point>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_point().transpose()
    }
}

/// Parse points from a string (useful for testing).
pub fn parse_points(content: &str) -> Result<Vec<Point>> {
    PointReader::new(content.as_bytes()).points().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::FloatError;

    /// Yields `data`, then fails.
    struct FailingReader {
        data: &'static [u8],
        pos: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos < self.data.len() {
                let n = buf.len().min(self.data.len() - self.pos);
                buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
                self.pos += n;
                Ok(n)
            } else {
                Err(io::Error::other("device gone"))
            }
        }
    }

    #[test]
    fn test_parse_points() {
        let points = parse_points("1 2\n3 4\n").unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_unterminated_last_line() {
        let points = parse_points("1 2\n3 4").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], Point::new(3.0, 4.0));
    }

    #[test]
    fn test_crlf_stripped() {
        let points = parse_points("1 2\r\n3 4\r").unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_empty_input() {
        let mut reader = PointReader::new(&b""[..]);
        assert!(reader.read_point().unwrap().is_none());
        assert_eq!(reader.line_number(), 0);
    }

    #[test]
    fn test_parse_error_line_number() {
        let err = parse_points("1 2\n3 4\n5\n").unwrap_err();
        match err {
            BboxError::Parse { line, source, text } => {
                assert_eq!(line, 3);
                assert_eq!(source, PointError::MissingLatitude);
                assert_eq!(text, "5");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_error_display() {
        let err = parse_points("12.3.4 5\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "1: bad longitude (at column 1): invalid float literal\n  [12.3.4 5]"
        );
        assert!(matches!(err, BboxError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_blank_line_stops_reading() {
        let mut reader = PointReader::new("1 2\n\n3 4\n".as_bytes());
        assert_eq!(reader.read_point().unwrap(), Some(Point::new(1.0, 2.0)));
        let err = reader.read_point().unwrap_err();
        assert!(matches!(
            err,
            BboxError::Parse {
                line: 2,
                source: PointError::BlankLine,
                ..
            }
        ));
        assert_eq!(reader.line_number(), 2);
    }

    #[test]
    fn test_read_error_on_first_line() {
        let mut reader = PointReader::new(FailingReader { data: b"", pos: 0 });
        let err = reader.read_point().unwrap_err();
        assert!(matches!(err, BboxError::Read { line: 1, .. }));
        assert_eq!(err.to_string(), "1: device gone");
        assert_eq!(reader.line_number(), 0);
    }

    #[test]
    fn test_read_error_after_lines() {
        let reader = PointReader::new(FailingReader {
            data: b"1 2\n3 4\n",
            pos: 0,
        });
        let results: Vec<_> = reader.points().take(3).collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(matches!(results[2], Err(BboxError::Read { line: 3, .. })));
    }

    #[test]
    fn test_invalid_utf8_text_is_lossy() {
        let mut reader = PointReader::new(&b"1 \xff\n"[..]);
        match reader.read_point().unwrap_err() {
            BboxError::Parse { source, text, .. } => {
                assert_eq!(
                    source,
                    PointError::BadLatitude {
                        column: 3,
                        source: FloatError::Syntax
                    }
                );
                assert_eq!(text, "1 \u{fffd}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
