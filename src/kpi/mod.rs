//! KPI reference data and client-vs-benchmark assessment

mod assessment;
mod definitions;

pub use assessment::{assess_kpi, assess_value, Comparison, KpiAssessment, KpiStatus};
pub use definitions::{Dimension, Direction, FeatureGroup, Kpi, KpiDefinition};
