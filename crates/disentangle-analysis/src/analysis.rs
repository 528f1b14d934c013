//! Whole-room analysis with the post-normalization filtering contract.
//!
//! [`RoomAnalysis::new`] builds the equivalence map over the *full* snapshot
//! exactly once, before any filter can be applied. User-selected filters
//! (single annotator, discordant only) then select already-classified
//! messages; they can never change which labels count as equivalent. That
//! ordering is the invariant this type exists to enforce.

use crate::discordance::{classify, is_discordant, MessageStatus};
use crate::equivalence::{build_equivalence_map, EquivalenceMap};
use crate::stats::{compute_statistics, RoomStats};
use disentangle_types::{Message, RoomSnapshot};

/// View-level filters, applied after classification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisFilter {
    /// Keep only messages annotated by this annotator.
    pub annotator: Option<String>,
    /// Keep only discordant messages.
    pub discordant_only: bool,
}

/// Completed analysis of one chat room's annotation set.
///
/// Pure and idempotent for a fixed snapshot: safe to recompute on every
/// fetch or filter toggle, with no shared state between invocations.
#[derive(Debug, Clone)]
pub struct RoomAnalysis {
    snapshot: RoomSnapshot,
    map: EquivalenceMap,
    stats: RoomStats,
}

impl RoomAnalysis {
    /// Ingest a snapshot and run the full analysis.
    ///
    /// Malformed annotation records (empty annotator or label) are dropped
    /// before anything else; they would otherwise pollute the co-occurrence
    /// counts. This never fails: an empty room yields an empty map and
    /// all-zero statistics.
    pub fn new(mut snapshot: RoomSnapshot) -> Self {
        let dropped = snapshot.retain_valid_annotations();
        if dropped > 0 {
            tracing::warn!(dropped, "ignoring malformed annotation records");
        }

        let map = build_equivalence_map(&snapshot.messages);
        let stats = compute_statistics(&snapshot, &map);
        tracing::debug!(
            equivalences = map.len(),
            discordant = stats.discordant_count,
            annotated = stats.annotated_messages,
            "room analysis complete"
        );

        Self {
            snapshot,
            map,
            stats,
        }
    }

    pub fn snapshot(&self) -> &RoomSnapshot {
        &self.snapshot
    }

    pub fn equivalence_map(&self) -> &EquivalenceMap {
        &self.map
    }

    pub fn stats(&self) -> &RoomStats {
        &self.stats
    }

    pub fn status_of(&self, message: &Message) -> MessageStatus {
        classify(message, &self.map)
    }

    /// Messages matching the filter, in snapshot order. The equivalence map
    /// and statistics are untouched by filtering.
    pub fn filtered_messages(&self, filter: &AnalysisFilter) -> Vec<&Message> {
        self.snapshot
            .messages
            .iter()
            .filter(|m| match &filter.annotator {
                Some(email) => m
                    .annotations
                    .iter()
                    .any(|a| a.annotator_email == *email),
                None => true,
            })
            .filter(|m| !filter.discordant_only || is_discordant(m, &self.map))
            .collect()
    }
}
