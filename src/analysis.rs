// File: src/analysis.rs

use crate::parsers::LogEntry;
use log::debug;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// How many messages the phrase report lists.
pub const TOP_PHRASE_COUNT: usize = 3;

/// Entry counts per event type, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCounts {
    counts: Vec<(String, usize)>,
}

impl EventCounts {
    /// Count for one event type. The lookup is case-insensitive.
    pub fn get(&self, event_type: &str) -> Option<usize> {
        let wanted = event_type.to_uppercase();
        self.counts
            .iter()
            .find(|(kind, _)| *kind == wanted)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(kind, count)| (kind.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum over all event types.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

// Serialized as a JSON object keyed by event type.
impl Serialize for EventCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (kind, count) in &self.counts {
            map.serialize_entry(kind, count)?;
        }
        map.end()
    }
}

/// One distinct message and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MessageCount {
    pub message: String,
    pub count: usize,
}

impl MessageCount {
    pub fn new(message: impl Into<String>, count: usize) -> Self {
        Self { message: message.into(), count }
    }
}

/// Counts entries per (already uppercased) event type.
pub fn count_by_event_type(entries: &[LogEntry]) -> EventCounts {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        match index.get(entry.event_type()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(entry.event_type(), counts.len());
                counts.push((entry.event_type().to_string(), 1));
            }
        }
    }

    EventCounts { counts }
}

/// The `limit` most frequent messages logged under `event_type`.
///
/// The whole trimmed message is the phrase; messages are compared exactly.
/// Equal counts keep the order in which the messages were first seen.
pub fn top_messages(entries: &[LogEntry], event_type: &str, limit: usize) -> Vec<MessageCount> {
    let wanted = event_type.to_uppercase();

    let mut counts: Vec<MessageCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries.iter().filter(|e| e.event_type() == wanted) {
        match index.get(entry.message()) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(entry.message(), counts.len());
                counts.push(MessageCount::new(entry.message(), 1));
            }
        }
    }

    debug!("{} distinct messages for event type {}", counts.len(), wanted);

    // sort_by is stable, so ties stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// [`top_messages`] with the report's fixed size of [`TOP_PHRASE_COUNT`].
pub fn top_message_phrases(entries: &[LogEntry], event_type: &str) -> Vec<MessageCount> {
    top_messages(entries, event_type, TOP_PHRASE_COUNT)
}
