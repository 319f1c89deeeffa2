// File: src/report.rs

//! Plain-text rendering of the two summaries.
//!
//! Writers take any `io::Write` sink so the binary can hand in stdout and
//! tests can hand in a `Vec<u8>`.

use crate::analysis::{EventCounts, MessageCount};
use std::io::{self, Write};

pub fn write_event_counts<W: Write>(out: &mut W, counts: &EventCounts) -> io::Result<()> {
    writeln!(out, "---- Event_Type Occurances ----")?;
    for (event_type, count) in counts.iter() {
        writeln!(out, "{}: {}", event_type, count)?;
    }
    Ok(())
}

pub fn write_top_messages<W: Write>(
    out: &mut W,
    event_type: &str,
    top: &[MessageCount],
) -> io::Result<()> {
    writeln!(
        out,
        "---- Most Frequent Message Phrase For {} Events ----",
        event_type.to_uppercase()
    )?;
    for phrase in top {
        writeln!(out, "{} occurance(s) of: \"{}\"", phrase.count, phrase.message)?;
    }
    Ok(())
}
