//! Thread equivalence detection.
//!
//! Different annotators name threads independently: one labels a conversation
//! "T0" where another writes "A". Without normalization every such message
//! would be counted as a disagreement. This module detects which
//! differently-named labels denote the same thread by looking at how label
//! pairs co-occur on the same messages, per annotator pair:
//!
//! 1. For every message with two or more annotations, count each unordered
//!    cross-annotator label pair under its annotator pair.
//! 2. A label pair is declared equivalent iff it was seen at least
//!    [`MIN_PAIR_SUPPORT`] times and accounts for a strict majority of that
//!    annotator pair's observations.
//! 3. Both labels then map to the lexicographically smaller of the two.
//!
//! Detected pairs are mapped independently; there is no transitive closure
//! across chained pairs (if `x≡y` and `y≡z` are detected separately, `z` can
//! stay mapped to `y` while `y` maps to `x`). Closing the chains with a
//! union-find would change analysis output on real data, so the pairwise
//! behavior is kept deliberately.

use crate::pairs::{AnnotatorPair, LabelPair};
use disentangle_types::Message;
use serde::Serialize;
use std::collections::BTreeMap;

/// Minimum number of co-occurrences before a label pair can be merged.
/// Guards against one-off coincidences.
pub const MIN_PAIR_SUPPORT: usize = 2;

/// A declared pair must account for more than this share of its annotator
/// pair's observations (strict inequality: exactly half is not enough).
pub const MAJORITY_THRESHOLD: f64 = 0.5;

/// Mapping from raw thread label to canonical thread label.
///
/// Labels absent from the map are implicitly their own representative. The
/// map is a pure function of one room's annotation set: rebuilt from scratch
/// on every analysis, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EquivalenceMap {
    entries: BTreeMap<String, String>,
}

impl EquivalenceMap {
    /// Resolve a raw label to its canonical form. Total: unknown labels pass
    /// through unchanged.
    pub fn normalize<'a>(&'a self, label: &'a str) -> &'a str {
        self.entries.get(label).map(String::as_str).unwrap_or(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Raw labels grouped by canonical representative, for display. Only
    /// groups that actually merge anything (two or more members) are kept.
    pub fn groups(&self) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (raw, canonical) in self.iter() {
            groups
                .entry(canonical.to_string())
                .or_default()
                .push(raw.to_string());
        }
        groups.retain(|_, members| members.len() > 1);
        groups
    }

    fn insert(&mut self, raw: &str, canonical: &str) {
        self.entries.insert(raw.to_string(), canonical.to_string());
    }
}

/// Build the equivalence map for one room's full annotation set.
///
/// Must be invoked over the *unfiltered* message list: deriving the map from
/// a filtered subset changes which labels count as equivalent and is
/// incorrect.
pub fn build_equivalence_map(messages: &[Message]) -> EquivalenceMap {
    // Ordered maps keep iteration deterministic, so later merges overwrite
    // earlier ones in a stable order.
    let mut counts: BTreeMap<AnnotatorPair, BTreeMap<LabelPair, usize>> = BTreeMap::new();

    for message in messages {
        if message.annotations.len() < 2 {
            continue;
        }
        for i in 0..message.annotations.len() {
            for j in (i + 1)..message.annotations.len() {
                let a = &message.annotations[i];
                let b = &message.annotations[j];
                let Some(annotators) = AnnotatorPair::new(&a.annotator_email, &b.annotator_email)
                else {
                    continue;
                };
                let labels = LabelPair::new(&a.thread_id, &b.thread_id);
                *counts.entry(annotators).or_default().entry(labels).or_insert(0) += 1;
            }
        }
    }

    let mut map = EquivalenceMap::default();
    for (annotators, label_counts) in &counts {
        let total: usize = label_counts.values().sum();
        for (labels, &count) in label_counts {
            if labels.is_identity() {
                continue;
            }
            if count >= MIN_PAIR_SUPPORT && (count as f64) / (total as f64) > MAJORITY_THRESHOLD {
                tracing::debug!(
                    annotator_a = annotators.first(),
                    annotator_b = annotators.second(),
                    label_a = labels.first(),
                    label_b = labels.second(),
                    count,
                    total,
                    "declared thread labels equivalent"
                );
                // Canonical representative is the lexicographically smaller
                // label, so "T0"→"A" and "A"→"A" stay consistent.
                map.insert(labels.first(), labels.first());
                map.insert(labels.second(), labels.first());
            }
        }
    }

    map
}
