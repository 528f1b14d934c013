use crate::message::Message;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Read-only snapshot of one chat room's messages and annotations, fetched
/// per analysis request. The room-level totals the presentation layer shows
/// (total/annotated messages, annotator roster) are derived here rather than
/// stored, so they can never drift from the message list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub messages: Vec<Message>,
}

impl RoomSnapshot {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn total_messages(&self) -> usize {
        self.messages.len()
    }

    /// Messages carrying at least one annotation.
    pub fn annotated_messages(&self) -> usize {
        self.messages.iter().filter(|m| m.is_annotated()).count()
    }

    /// Sorted, de-duplicated list of every annotator seen in the room.
    pub fn annotators(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .messages
            .iter()
            .flat_map(|m| m.annotations.iter())
            .map(|a| a.annotator_email.as_str())
            .collect();
        set.into_iter().map(String::from).collect()
    }

    pub fn total_annotators(&self) -> usize {
        self.annotators().len()
    }

    /// Drop malformed annotation records across all messages.
    /// Returns how many records were removed.
    pub fn retain_valid_annotations(&mut self) -> usize {
        self.messages
            .iter_mut()
            .map(|m| m.retain_valid_annotations())
            .sum()
    }
}
