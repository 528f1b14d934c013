pub mod analysis;
pub mod discordance;
pub mod equivalence;
pub mod pairs;
pub mod stats;

pub use analysis::{AnalysisFilter, RoomAnalysis};
pub use discordance::{classify, is_discordant, MessageStatus};
pub use equivalence::{build_equivalence_map, EquivalenceMap, MAJORITY_THRESHOLD, MIN_PAIR_SUPPORT};
pub use pairs::{AnnotatorPair, LabelPair};
pub use stats::{compute_statistics, RoomStats};
