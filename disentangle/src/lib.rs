//! # Disentangle - Chat-Thread Annotation Analysis
//!
//! Disentangle analyzes chat rooms whose messages were independently tagged
//! with thread labels by multiple annotators:
//!
//! - **Thread equivalence detection** (which differently-named labels denote
//!   the same conversation)
//! - **Discordance classification** (which messages the annotators disagree
//!   on, after normalization)
//! - **Room statistics** (concordance rate, discordant counts, annotator
//!   roster)
//!
//! ## Quick Start
//!
//! ```rust
//! use disentangle::prelude::*;
//!
//! let snapshot = RoomSnapshot::new(vec![
//!     Message::with_annotations("1", "any plans tonight?", vec![
//!         Annotation::new("ana@example.com", "A"),
//!         Annotation::new("bob@example.com", "T0"),
//!     ]),
//!     Message::with_annotations("2", "table for four at 8", vec![
//!         Annotation::new("ana@example.com", "A"),
//!         Annotation::new("bob@example.com", "T0"),
//!     ]),
//! ]);
//!
//! let analysis = RoomAnalysis::new(snapshot);
//!
//! // "T0" and "A" were detected as the same thread.
//! assert_eq!(analysis.equivalence_map().normalize("T0"), "A");
//! assert_eq!(analysis.stats().discordant_count, 0);
//! assert_eq!(analysis.stats().concordance_rate, 100.0);
//! ```
//!
//! ## Architecture
//!
//! Disentangle consists of two composable crates:
//!
//! - **disentangle-types**: the data model (`Message`, `Annotation`,
//!   `RoomSnapshot`) in the aggregated wire shape the backend serves
//! - **disentangle-analysis**: the analyzer (equivalence map construction,
//!   per-message classification, room statistics, post-map filtering)
//!
//! The analyzer is a pure, synchronous computation over an in-memory
//! snapshot: no I/O, no shared state, idempotent for a fixed input. It is
//! safe to re-run on every fetch or filter toggle.

// Re-export all public APIs
pub use disentangle_analysis as analysis;
pub use disentangle_types as types;

// Re-export commonly used types
pub use disentangle_analysis::{
    build_equivalence_map, classify, compute_statistics, is_discordant, AnalysisFilter,
    EquivalenceMap, MessageStatus, RoomAnalysis, RoomStats,
};
pub use disentangle_types::{Annotation, Message, RoomSnapshot};

/// Convenient prelude with commonly used types
pub mod prelude {
    pub use crate::analysis::{AnalysisFilter, EquivalenceMap, MessageStatus, RoomAnalysis, RoomStats};
    pub use crate::types::{Annotation, Message, RoomSnapshot};
}
