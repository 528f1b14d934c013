use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One annotator's thread assignment for one message.
///
/// `thread_id` is a free-text label chosen independently by each annotator;
/// it is only meaningful within that annotator's own labeling and must not be
/// compared across annotators without normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub annotator_email: String,
    pub thread_id: String,

    /// Display/ordering only; the analyzer ignores it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Annotation {
    /// Create an annotation without a timestamp
    pub fn new(annotator_email: impl Into<String>, thread_id: impl Into<String>) -> Self {
        Self {
            annotator_email: annotator_email.into(),
            thread_id: thread_id.into(),
            created_at: None,
        }
    }

    /// Create an annotation stamped with its creation time
    pub fn with_timestamp(
        annotator_email: impl Into<String>,
        thread_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            annotator_email: annotator_email.into(),
            thread_id: thread_id.into(),
            created_at: Some(created_at),
        }
    }

    /// A record is usable only with a non-empty annotator identity and a
    /// non-empty thread label. Records failing this are dropped at ingest,
    /// before any analysis runs.
    pub fn is_valid(&self) -> bool {
        !self.annotator_email.trim().is_empty() && !self.thread_id.trim().is_empty()
    }
}
