pub mod analysis;
pub mod error;
pub mod parsers;
pub mod prompt;
pub mod report;
pub mod time;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export for easy access
pub use analysis::{
    count_by_event_type, top_message_phrases, top_messages, EventCounts, MessageCount,
};
pub use error::ParseError;
pub use parsers::{load_log_file, parse_log, parse_log_line, parse_lines, LogEntry};
