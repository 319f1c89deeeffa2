// File: src/parsers/bracketed.rs

use crate::error::ParseError;
use crate::parsers::LogEntry;
use crate::time::parse_timestamp;
use regex::Regex;
use std::sync::OnceLock;

/// First `[...]` run without nested brackets. Compiled once.
fn timestamp_regex() -> &'static Regex {
    static TIMESTAMP_REGEX: OnceLock<Regex> = OnceLock::new();
    TIMESTAMP_REGEX.get_or_init(|| Regex::new(r"\[[^\[\]]*\]").expect("Invalid timestamp regex"))
}

/// Parses one `[TIMESTAMP] EVENT_TYPE MESSAGE` line.
///
/// `line_number` is only used to label the error.
pub fn parse_log_line(line: &str, line_number: usize) -> Result<LogEntry, ParseError> {
    // 1. Timestamp: the first bracketed run, wherever it sits in the line
    let bracketed = timestamp_regex()
        .find(line)
        .ok_or(ParseError::TimestampFormat { line: line_number })?;

    let token = bracketed.as_str();
    let raw_time = &token[1..token.len() - 1];
    let timestamp =
        parse_timestamp(raw_time).ok_or(ParseError::TimestampFormat { line: line_number })?;

    // 2. Exactly one separator after ']'
    let rest = line[bracketed.end()..]
        .strip_prefix(' ')
        .ok_or(ParseError::FieldCount { line: line_number })?;

    // 3. EVENT_TYPE, then everything else is the message
    let (event_type, message) =
        split_once_char(rest, ' ').ok_or(ParseError::FieldCount { line: line_number })?;
    if event_type.is_empty() || message.trim().is_empty() {
        return Err(ParseError::FieldCount { line: line_number });
    }

    Ok(LogEntry::new(timestamp, event_type, message))
}

// --- Helpers ---

#[inline(always)]
fn split_once_char(s: &str, delimiter: char) -> Option<(&str, &str)> {
    let idx = s.find(delimiter)?;
    Some((&s[..idx], &s[idx + 1..]))
}
