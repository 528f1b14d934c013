//! Room-level summary statistics.

use crate::discordance::is_discordant;
use crate::equivalence::EquivalenceMap;
use disentangle_types::RoomSnapshot;
use serde::Serialize;

/// Aggregate figures for one chat room, under a fixed equivalence map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomStats {
    pub total_messages: usize,
    pub annotated_messages: usize,
    pub total_annotators: usize,
    pub discordant_count: usize,

    /// Percentage of annotated messages that are not discordant, rounded to
    /// one decimal. Zero when nothing is annotated.
    pub concordance_rate: f64,
}

pub fn compute_statistics(snapshot: &RoomSnapshot, map: &EquivalenceMap) -> RoomStats {
    let annotated_messages = snapshot.annotated_messages();
    let discordant_count = snapshot
        .messages
        .iter()
        .filter(|m| is_discordant(m, map))
        .count();

    let concordance_rate = if annotated_messages > 0 {
        let concordant = annotated_messages - discordant_count;
        round_one_decimal(concordant as f64 / annotated_messages as f64 * 100.0)
    } else {
        0.0
    };

    RoomStats {
        total_messages: snapshot.total_messages(),
        annotated_messages,
        total_annotators: snapshot.total_annotators(),
        discordant_count,
        concordance_rate,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
