//! Byte-level parsing of `<lon> <lat>` lines.
//!
//! The scanner walks the line by index so that every reported column is the
//! 1-based byte offset seen by the scan. Only space and tab separate tokens;
//! any other byte (including `\r`, form feed or Unicode spaces) is part of a
//! token and ends up in front of the float parser.

use crate::point::Point;
use thiserror::Error;

/// Why a numeric token was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatError {
    #[error("invalid float literal")]
    Syntax,

    #[error("value out of range")]
    OutOfRange,
}

/// Errors that can occur while parsing a single line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointError {
    #[error("blank line")]
    BlankLine,

    #[error("bad longitude (at column {column}): {source}")]
    BadLongitude { column: usize, source: FloatError },

    #[error("missing latitude")]
    MissingLatitude,

    #[error("bad latitude (at column {column}): {source}")]
    BadLatitude { column: usize, source: FloatError },

    #[error("unexpected trailing text (at column {column})")]
    TrailingText { column: usize },
}

/// Token separator: space or tab, nothing else.
#[inline(always)]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

/// Parse one line (terminator already stripped) into a point.
///
/// The first token is the longitude and the second the latitude, matching
/// the textual order.
pub fn parse_point(line: &[u8]) -> Result<Point, PointError> {
    let len = line.len();
    let mut i = 0;

    while i < len && is_space(line[i]) {
        i += 1;
    }
    if i == len {
        return Err(PointError::BlankLine);
    }

    let mut j = token_end(line, i);
    let lon = parse_f64(&line[i..j]).map_err(|source| PointError::BadLongitude {
        column: i + 1,
        source,
    })?;

    // line[j] is the separator that ended the longitude, if any
    i = skip_spaces(line, j + 1);
    if i >= len {
        return Err(PointError::MissingLatitude);
    }

    j = token_end(line, i);
    let lat = parse_f64(&line[i..j]).map_err(|source| PointError::BadLatitude {
        column: i + 1,
        source,
    })?;

    i = skip_spaces(line, j + 1);
    if i < len {
        return Err(PointError::TrailingText { column: j + 1 });
    }

    Ok(Point::new(lon, lat))
}

/// Index one past the token that starts at `start` (a non-space byte).
#[inline]
fn token_end(line: &[u8], start: usize) -> usize {
    let mut j = start + 1;
    while j < line.len() && !is_space(line[j]) {
        j += 1;
    }
    j
}

/// First non-space index at or after `from`; may exceed `line.len()`.
#[inline]
fn skip_spaces(line: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < line.len() && is_space(line[i]) {
        i += 1;
    }
    i
}

/// Parse a float token.
///
/// Finite literals that overflow to infinity are rejected; `inf`/`infinity`
/// spelled out are accepted as-is. `nan` takes no sign.
pub fn parse_f64(token: &[u8]) -> Result<f64, FloatError> {
    let s = std::str::from_utf8(token).map_err(|_| FloatError::Syntax)?;
    let value: f64 = s.parse().map_err(|_| FloatError::Syntax)?;
    if value.is_nan() && s.starts_with(['+', '-']) {
        return Err(FloatError::Syntax);
    }
    if value.is_infinite() && !is_infinity_literal(s) {
        return Err(FloatError::OutOfRange);
    }
    Ok(value)
}

fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
