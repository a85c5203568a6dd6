//! Domain Services
//!
//! Pure analysis logic over domain entities. Nothing here touches the file
//! system; the application layer feeds in text and paths.

mod cleanup_planner;
mod detector;
pub mod extraction;
mod purpose_analyzer;
mod scorer;

pub use cleanup_planner::{confidence, plan_cleanup};
pub use detector::{alignment_percentage, MisalignmentDetector};
pub use extraction::FactExtractor;
pub use purpose_analyzer::PurposeAnalyzer;
pub use scorer::AlignmentScorer;
