// File: src/prompt.rs

//! Interactive questions for the command line front end.

use std::io::{self, BufRead, Write};

/// Asks `question` until a non-blank answer arrives.
///
/// Returns `Ok(None)` once the input is exhausted.
pub fn prompt_non_empty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    loop {
        writeln!(output, "{}", question)?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }

        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(Some(answer.to_string()));
        }
    }
}

/// Asks for the log file path. Quotes pasted around the path are dropped.
pub fn prompt_log_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    loop {
        match prompt_non_empty(input, output, "Enter path to log file: ")? {
            None => return Ok(None),
            Some(path) => {
                let path = path.trim_matches('"');
                if !path.is_empty() {
                    return Ok(Some(path.to_string()));
                }
            }
        }
    }
}

pub fn prompt_event_type<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    prompt_non_empty(
        input,
        output,
        "Enter event type to get top 3 most frequent associated message phrases: ",
    )
}
