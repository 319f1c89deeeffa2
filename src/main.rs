use anyhow::{anyhow, Context, Result};
use log::info;
use logtally::analysis::{count_by_event_type, top_message_phrases};
use logtally::parsers::load_log_file;
use logtally::prompt::{prompt_event_type, prompt_log_path};
use logtally::report::{write_event_counts, write_top_messages};
use std::io::{self, Write};

fn main() -> Result<()> {
    // Diagnostics go to stderr; default to warnings only
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let path = prompt_log_path(&mut input, &mut out)?
        .ok_or_else(|| anyhow!("no log file path given"))?;
    let entries = load_log_file(&path).with_context(|| format!("could not load {}", path))?;
    info!("Parsed {} log entries", entries.len());

    write_event_counts(&mut out, &count_by_event_type(&entries))?;

    let event_type = prompt_event_type(&mut input, &mut out)?
        .ok_or_else(|| anyhow!("no event type given"))?;
    write_top_messages(&mut out, &event_type, &top_message_phrases(&entries, &event_type))?;

    out.flush()?;
    Ok(())
}
