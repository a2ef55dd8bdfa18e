//! TPS log parser
//!
//! Turns an uploaded blob into an ordered sequence of [`Sample`]s in a single
//! linear pass. The expected layout is one header line followed by data lines:
//!
//! ```text
//! timestamp,tps,players
//! 2024-01-01 00:00:00,19.5,alice;bob
//! 2024-01-01 00:00:01,4.0,bob
//! 2024-01-01 00:00:02,20.0,
//! ```
//!
//! Delimiters cannot be escaped; a participant name containing `,` or `;`
//! is not representable.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::Sample;

/// Separator between the top-level fields of a line.
pub const FIELD_DELIMITER: char = ',';

/// Separator between participant names inside the third field.
pub const PARTICIPANT_DELIMITER: char = ';';

/// Per-line problem that does not abort the parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseWarning {
    /// 1-based line number in the uploaded blob (the header is line 1).
    pub line: usize,
    #[serde(flatten)]
    pub kind: ParseWarningKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseWarningKind {
    /// The value field was missing, not a number, or not finite.
    NonNumericValue { raw: String },
    /// The line carried fields beyond the third; they were ignored.
    ExtraFields { count: usize },
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ParseWarningKind::NonNumericValue { raw } => {
                write!(f, "line {}: non-numeric TPS value {:?}", self.line, raw)
            }
            ParseWarningKind::ExtraFields { count } => {
                write!(f, "line {}: ignored {} extra field(s)", self.line, count)
            }
        }
    }
}

/// Output of [`parse_log`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLog {
    pub samples: Vec<Sample>,
    pub warnings: Vec<ParseWarning>,
}

/// Parse a raw uploaded blob.
///
/// Fails only when the blob is unreadable (not UTF-8) or has no header line.
/// A header without data lines is a valid, empty log.
pub fn parse_log(bytes: &[u8]) -> Result<ParsedLog> {
    let text = std::str::from_utf8(bytes).map_err(|e| Error::InvalidUtf8 {
        offset: e.valid_up_to(),
    })?;
    parse_text(text)
}

/// Parse already-decoded text. See [`parse_log`].
pub fn parse_text(text: &str) -> Result<ParsedLog> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::parse("input is empty: expected a header line"));
    }
    // Blank lines before the header are skipped but still count for line numbers.
    let skipped_lines = text[..text.len() - text.trim_start().len()]
        .matches('\n')
        .count();

    let mut lines = trimmed.split('\n');
    // The header carries column names only.
    lines.next();

    let mut log = ParsedLog::default();
    for (index, raw_line) in lines.enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        let line_number = skipped_lines + index + 2;
        let sample = parse_line(index, line_number, line, &mut log.warnings);
        log.samples.push(sample);
    }

    if log.samples.is_empty() {
        tracing::info!("TPS log has a header but no data lines");
    }

    Ok(log)
}

fn parse_line(
    index: usize,
    line_number: usize,
    line: &str,
    warnings: &mut Vec<ParseWarning>,
) -> Sample {
    let mut fields = line.split(FIELD_DELIMITER);
    let timestamp = fields.next().unwrap_or_default().to_string();
    let raw_value = fields.next().unwrap_or_default();
    let participants = fields
        .next()
        .map(parse_participants)
        .unwrap_or_default();

    let extra = fields.count();
    if extra > 0 {
        warnings.push(ParseWarning {
            line: line_number,
            kind: ParseWarningKind::ExtraFields { count: extra },
        });
    }

    let value = match raw_value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            tracing::debug!("Line {}: non-numeric TPS value {:?}", line_number, raw_value);
            warnings.push(ParseWarning {
                line: line_number,
                kind: ParseWarningKind::NonNumericValue {
                    raw: raw_value.to_string(),
                },
            });
            f64::NAN
        }
    };

    Sample {
        index,
        timestamp,
        value,
        participants,
    }
}

fn parse_participants(field: &str) -> Vec<String> {
    field
        .split(PARTICIPANT_DELIMITER)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
