use wasm_bindgen::prelude::*;
use crate::analysis::{self, EventCounts, MessageCount};
use crate::parsers;

// Returned to the JavaScript frontend as a JSON string.
#[derive(serde::Serialize, Default)]
struct WasmResult {
    counts: EventCounts,
    top_messages: Vec<MessageCount>,
    error: Option<String>, // Parse errors, with the offending line number
}

#[wasm_bindgen]
pub fn analyze_log(log_text: &str, event_type: &str) -> String {
    let result = match parsers::parse_lines(log_text.lines()) {
        Ok(entries) => WasmResult {
            counts: analysis::count_by_event_type(&entries),
            top_messages: analysis::top_message_phrases(&entries, event_type),
            error: None,
        },
        // Fail-fast: nothing from a broken log is reported
        Err(e) => WasmResult {
            error: Some(e.to_string()),
            ..WasmResult::default()
        },
    };
    serde_json::to_string(&result).unwrap_or_default()
}
