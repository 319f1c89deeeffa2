// File: src/parsers/mod.rs

pub mod bracketed;

use crate::error::ParseError;
use chrono::{DateTime, Utc};
use log::{debug, trace, warn};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub use bracketed::parse_log_line;

/// A single parsed log record.
///
/// The event type is uppercased and the message trimmed when the entry is
/// built, so grouping downstream never has to normalize again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: DateTime<Utc>,
    event_type: String,
    message: String,
}

impl LogEntry {
    pub fn new(timestamp: DateTime<Utc>, event_type: &str, message: &str) -> Self {
        Self {
            timestamp,
            event_type: event_type.to_uppercase(),
            message: message.trim().to_string(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Renders the entry back into the line format it was parsed from.
impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {} {}", self.timestamp.to_rfc3339(), self.event_type, self.message)
    }
}

/// Parses every line in order. The first malformed line aborts the whole run.
pub fn parse_lines<'a, I>(lines: I) -> Result<Vec<LogEntry>, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    collect_entries(lines.into_iter().map(Ok))
}

/// Like [`parse_lines`], reading from any buffered source.
pub fn parse_log<R: BufRead>(reader: R) -> Result<Vec<LogEntry>, ParseError> {
    collect_entries(reader.lines().map(|line| line.map_err(ParseError::from)))
}

fn collect_entries<I, S>(lines: I) -> Result<Vec<LogEntry>, ParseError>
where
    I: IntoIterator<Item = Result<S, ParseError>>,
    S: AsRef<str>,
{
    let mut entries = Vec::new();
    for line in lines {
        let line = line?;
        entries.push(parse_next(line.as_ref(), entries.len() + 1)?);
    }
    Ok(entries)
}

/// Opens `path`, parses it to the end and closes it again.
pub fn load_log_file(path: impl AsRef<Path>) -> Result<Vec<LogEntry>, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_log(BufReader::new(file))?;
    debug!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

fn parse_next(line: &str, line_number: usize) -> Result<LogEntry, ParseError> {
    match parse_log_line(line, line_number) {
        Ok(entry) => {
            trace!("line {}: {}", line_number, entry);
            Ok(entry)
        }
        Err(e) => {
            warn!("Rejecting log data at line {}: {:?}", line_number, line);
            Err(e)
        }
    }
}
