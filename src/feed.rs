//! Decoding and parsing of the coordinate feed.
//!
//! The server emits 8-bit Latin-1 text, one record per line:
//! `x,y,name` with optional whitespace around the commas. Lines whose first
//! character is `#` are comments. A single malformed line fails the whole
//! body: the caller must commit either every record or none.

use thiserror::Error;

/// A parse failure for one line of the feed. Aborts the whole cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: expected `x,y,name` but got {found} field(s)")]
    MissingFields { line: usize, found: usize },
    #[error("line {line}: {axis} coordinate `{value}` is not an integer")]
    BadCoordinate {
        line: usize,
        axis: &'static str,
        value: String,
    },
}

/// One parsed feed line: server-space coordinates plus a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointRecord {
    pub x: i32,
    pub y: i32,
    pub name: String,
}

/// Decode a response body as Latin-1: every byte maps to the Unicode scalar
/// of the same value. Byte-for-character, never lossy.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Parse a decoded feed body into records, preserving line order.
///
/// Skips empty lines and lines whose *first character* is `#` (a line with
/// whitespace before the `#` is not a comment; its x field then fails to
/// parse, which is the intended strictness). Each remaining line splits on
/// commas into at most three fields, so extra commas fold into the name.
/// Whitespace around the two delimiting commas is trimmed; nothing else is.
/// The name must be non-empty.
pub fn parse_feed(body: &str) -> Result<Vec<PointRecord>, ParseError> {
    let mut records = Vec::new();
    for (idx, line) in body.lines().enumerate() {
        let lineno = idx + 1;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.splitn(3, ',');
        let x_field = fields.next().unwrap_or_default();
        let (y_field, name_field) = match (fields.next(), fields.next()) {
            (Some(y), Some(name)) => (y, name),
            (y, _) => {
                return Err(ParseError::MissingFields {
                    line: lineno,
                    found: 1 + y.iter().count(),
                })
            }
        };

        // Only the whitespace hugging the commas is optional.
        let x_field = x_field.trim_end();
        let y_field = y_field.trim();
        let name = name_field.trim_start();
        if name.is_empty() {
            // `1,2,` carries no name; the record is incomplete.
            return Err(ParseError::MissingFields {
                line: lineno,
                found: 2,
            });
        }

        let x = x_field
            .parse::<i32>()
            .map_err(|_| ParseError::BadCoordinate {
                line: lineno,
                axis: "x",
                value: x_field.to_string(),
            })?;
        let y = y_field
            .parse::<i32>()
            .map_err(|_| ParseError::BadCoordinate {
                line: lineno,
                axis: "y",
                value: y_field.to_string(),
            })?;

        records.push(PointRecord {
            x,
            y,
            name: name.to_string(),
        });
    }
    Ok(records)
}
