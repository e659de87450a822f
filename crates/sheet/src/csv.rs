use crate::error::{Result, SheetError};
use crate::table::RawRows;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use std::path::Path;

/// Delimiter choice for one read attempt.
#[derive(Debug, Clone, Copy)]
enum Delimiter {
    /// Score the common delimiters on the first record line.
    Detect,
    Fixed(u8),
}

/// One `(delimiter, encoding)` configuration of the probing reader.
#[derive(Debug, Clone, Copy)]
struct ReadCandidate {
    delimiter: Delimiter,
    encoding: &'static Encoding,
}

/// Attempt order mirrors the common European CSV dialects: auto-detected
/// delimiter as UTF-8 (with optional BOM), then semicolon as UTF-8, then
/// semicolon as Windows-1252.
fn candidates() -> [ReadCandidate; 3] {
    [
        ReadCandidate {
            delimiter: Delimiter::Detect,
            encoding: UTF_8,
        },
        ReadCandidate {
            delimiter: Delimiter::Fixed(b';'),
            encoding: UTF_8,
        },
        ReadCandidate {
            delimiter: Delimiter::Fixed(b';'),
            encoding: WINDOWS_1252,
        },
    ]
}

/// Delimiters considered by auto-detection, in tie-break order.
const DETECTABLE: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Read a delimited text file into raw rows, trying each candidate
/// configuration in turn. The first candidate that decodes and parses wins;
/// exhausting all of them surfaces the last cause as `SheetError::Read`.
pub(crate) fn read_rows(path: &Path) -> Result<RawRows> {
    let bytes = std::fs::read(path)?;

    let mut last_error = String::new();
    for candidate in candidates() {
        match try_candidate(&bytes, candidate) {
            Ok(rows) => {
                tracing::debug!(
                    encoding = candidate.encoding.name(),
                    rows = rows.len(),
                    "parsed delimited file"
                );
                return Ok(rows);
            }
            Err(message) => {
                tracing::warn!(
                    encoding = candidate.encoding.name(),
                    "read attempt failed, trying next candidate: {message}"
                );
                last_error = message;
            }
        }
    }

    Err(SheetError::Read {
        path: path.to_path_buf(),
        message: last_error,
    })
}

fn try_candidate(bytes: &[u8], candidate: ReadCandidate) -> std::result::Result<RawRows, String> {
    let (text, had_errors) = candidate.encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(format!("invalid {} byte sequence", candidate.encoding.name()));
    }

    let delimiter = match candidate.delimiter {
        Delimiter::Detect => detect_delimiter(&text),
        Delimiter::Fixed(d) => d,
    };

    parse(&text, delimiter).map_err(|e| e.to_string())
}

/// Pick the delimiter with the most occurrences on the first non-empty line.
/// Ties go to the earlier candidate; absence falls back to the comma.
fn detect_delimiter(text: &str) -> u8 {
    let first_line = text.lines().find(|line| !line.trim().is_empty());
    let Some(line) = first_line else {
        return b',';
    };

    let mut best = (b',', 0);
    for delimiter in DETECTABLE {
        let count = line.bytes().filter(|b| *b == delimiter).count();
        if count > best.1 {
            best = (delimiter, count);
        }
    }
    best.0
}

/// Parse decoded text with the `csv` crate. Every field is kept as text;
/// empty fields become absent cells. Records with diverging field counts are
/// a parse error, which sends the caller to the next candidate.
fn parse(text: &str, delimiter: u8) -> std::result::Result<RawRows, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_reader(text.as_bytes());

    let mut rows: RawRows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        None
                    } else {
                        Some(field.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(rows)
}
