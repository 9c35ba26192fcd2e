//! Client record types and score-table ingestion

mod data;
pub mod loader;

pub use data::{ClientRecord, ProfitClass, RiskTier, Segment, SizeClass};
pub use loader::{load_scores, load_scores_from_reader, LoadError};
