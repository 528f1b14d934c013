//! Per-message concordance classification under a fixed equivalence map.

use crate::equivalence::EquivalenceMap;
use disentangle_types::Message;
use serde::Serialize;

/// Display status of one message, matching the badges the analysis view
/// renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Unannotated,
    Single,
    Concordant,
    Discordant,
}

/// True iff the message's annotators disagree after normalization.
///
/// Messages with zero or one annotation can never be discordant: there is
/// nothing to compare.
pub fn is_discordant(message: &Message, map: &EquivalenceMap) -> bool {
    if message.annotations.len() <= 1 {
        return false;
    }

    let mut normalized = message
        .annotations
        .iter()
        .map(|ann| map.normalize(&ann.thread_id));

    let Some(first) = normalized.next() else {
        return false;
    };
    normalized.any(|label| label != first)
}

pub fn classify(message: &Message, map: &EquivalenceMap) -> MessageStatus {
    match message.annotations.len() {
        0 => MessageStatus::Unannotated,
        1 => MessageStatus::Single,
        _ if is_discordant(message, map) => MessageStatus::Discordant,
        _ => MessageStatus::Concordant,
    }
}
