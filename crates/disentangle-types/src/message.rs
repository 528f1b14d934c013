use crate::annotation::Annotation;
use serde::{Deserialize, Serialize};

/// An immutable unit of conversation content, with every annotator's thread
/// assignment attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: String,

    /// Turn identifier from the source transcript (display only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_id: Option<String>,

    /// Author of the message inside the chat room (display only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    pub message_text: String,

    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Message {
    /// Create a message with no annotations
    pub fn new(message_id: impl Into<String>, message_text: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            turn_id: None,
            user_id: None,
            message_text: message_text.into(),
            annotations: Vec::new(),
        }
    }

    /// Create a message with annotations already attached
    pub fn with_annotations(
        message_id: impl Into<String>,
        message_text: impl Into<String>,
        annotations: Vec<Annotation>,
    ) -> Self {
        Self {
            message_id: message_id.into(),
            turn_id: None,
            user_id: None,
            message_text: message_text.into(),
            annotations,
        }
    }

    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// A message counts as annotated when at least one annotation is present.
    pub fn is_annotated(&self) -> bool {
        !self.annotations.is_empty()
    }

    /// Drop annotations missing an annotator identity or thread label.
    /// Returns how many records were removed.
    pub fn retain_valid_annotations(&mut self) -> usize {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.is_valid());
        before - self.annotations.len()
    }
}
