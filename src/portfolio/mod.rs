//! Portfolio aggregations: benchmarks, summaries, filters

mod benchmark;
mod filter;
mod summary;

pub use benchmark::BenchmarkStats;
pub use filter::{find_client, PortfolioFilter};
pub use summary::{portfolio_summary, segment_summary, PortfolioSummary, SegmentSummary};
