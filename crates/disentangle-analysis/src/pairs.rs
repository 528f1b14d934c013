//! Canonical unordered pair keys used by the co-occurrence counters.
//!
//! Both key types sort their two sides lexicographically on construction so
//! that `(A, B)` and `(B, A)` collide in a map. Comparison is plain string
//! comparison throughout; labels that look numeric ("5" vs "05") are still
//! distinct raw strings.

/// Unordered pair of two *distinct* annotator identities.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnnotatorPair {
    first: String,
    second: String,
}

impl AnnotatorPair {
    /// Returns `None` when both sides are the same annotator: duplicate
    /// annotations by one person on one message never count as evidence.
    pub fn new(a: &str, b: &str) -> Option<Self> {
        if a == b {
            return None;
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        Some(Self {
            first: first.to_string(),
            second: second.to_string(),
        })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

/// Unordered pair of two raw thread labels, scoped to one annotator pair.
///
/// Unlike [`AnnotatorPair`], identical labels are allowed: a pair of matching
/// labels still counts toward the annotator pair's observation total, it just
/// never produces an equivalence entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelPair {
    first: String,
    second: String,
}

impl LabelPair {
    pub fn new(a: &str, b: &str) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    /// Lexicographically smaller label; the canonical representative when the
    /// pair is declared equivalent.
    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn is_identity(&self) -> bool {
        self.first == self.second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotator_pair_is_order_insensitive() {
        let ab = AnnotatorPair::new("ana@x.com", "bob@x.com").unwrap();
        let ba = AnnotatorPair::new("bob@x.com", "ana@x.com").unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.first(), "ana@x.com");
    }

    #[test]
    fn test_annotator_pair_rejects_self() {
        assert!(AnnotatorPair::new("ana@x.com", "ana@x.com").is_none());
    }

    #[test]
    fn test_label_pair_canonical_order() {
        let pair = LabelPair::new("T0", "A");
        assert_eq!(pair.first(), "A");
        assert_eq!(pair.second(), "T0");
        assert_eq!(pair, LabelPair::new("A", "T0"));
    }

    #[test]
    fn test_label_pair_identity() {
        assert!(LabelPair::new("T0", "T0").is_identity());
        assert!(!LabelPair::new("T0", "T1").is_identity());
    }

    #[test]
    fn test_label_pair_numeric_looking_labels_stay_distinct() {
        assert!(!LabelPair::new("5", "05").is_identity());
    }
}
