//! KPI reference data: dimensions, directions, display metadata, feature groups

use serde::{Deserialize, Serialize};

/// Sub-dimension of the composite IVI score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Health,
    Experience,
    Utilization,
}

impl Dimension {
    /// Single-letter code used throughout the score tables (H / E / U)
    pub fn code(&self) -> &'static str {
        match self {
            Dimension::Health => "H",
            Dimension::Experience => "E",
            Dimension::Utilization => "U",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Health => "Health",
            Dimension::Experience => "Experience",
            Dimension::Utilization => "Cost/Utilization",
        }
    }
}

/// Whether a larger KPI value is good, bad, or neither
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    HigherIsBetter,
    HigherIsWorse,
    Neutral,
}

/// The KPIs surfaced for client-vs-benchmark comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kpi {
    UtilizationRate,
    DiagnosesPerUtilizer,
    AvgClaimAmount,
    LossRatio,
    CostPerMember,
    CallsPerMember,
    AvgResolutionDays,
    RejectionRate,
    ApprovalRate,
}

/// Display metadata for one KPI
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KpiDefinition {
    /// Score-table column name
    pub column: &'static str,
    /// Human-readable display name
    pub name: &'static str,
    /// One-line description for tooltips and reports
    pub description: &'static str,
    /// IVI sub-dimension the KPI belongs to
    pub dimension: Dimension,
    /// Interpretation direction
    pub direction: Direction,
}

impl Kpi {
    /// All comparison KPIs in display order
    pub const ALL: [Kpi; 9] = [
        Kpi::UtilizationRate,
        Kpi::DiagnosesPerUtilizer,
        Kpi::AvgClaimAmount,
        Kpi::LossRatio,
        Kpi::CostPerMember,
        Kpi::CallsPerMember,
        Kpi::AvgResolutionDays,
        Kpi::RejectionRate,
        Kpi::ApprovalRate,
    ];

    /// Static display metadata for this KPI
    pub fn definition(&self) -> KpiDefinition {
        match self {
            Kpi::UtilizationRate => KpiDefinition {
                column: "UTILIZATION_RATE",
                name: "Utilization Rate",
                description: "Percentage of members who used healthcare services",
                dimension: Dimension::Health,
                direction: Direction::Neutral,
            },
            Kpi::DiagnosesPerUtilizer => KpiDefinition {
                column: "DIAGNOSES_PER_UTILIZER",
                name: "Diagnoses per Utilizer",
                description: "Average number of unique diagnoses per member who used services",
                dimension: Dimension::Health,
                direction: Direction::HigherIsWorse,
            },
            Kpi::AvgClaimAmount => KpiDefinition {
                column: "AVG_CLAIM_AMOUNT",
                name: "Average Claim Amount",
                description: "Average amount per claim (SAR)",
                dimension: Dimension::Health,
                direction: Direction::HigherIsWorse,
            },
            Kpi::LossRatio => KpiDefinition {
                column: "LOSS_RATIO",
                name: "Loss Ratio",
                description: "Claims paid divided by premium earned (>1 = unprofitable)",
                dimension: Dimension::Utilization,
                direction: Direction::HigherIsWorse,
            },
            Kpi::CostPerMember => KpiDefinition {
                column: "COST_PER_MEMBER",
                name: "Cost per Member",
                description: "Total claims divided by total members (SAR)",
                dimension: Dimension::Utilization,
                direction: Direction::HigherIsWorse,
            },
            Kpi::CallsPerMember => KpiDefinition {
                column: "CALLS_PER_MEMBER",
                name: "Calls per Member",
                description: "Average number of support calls per member",
                dimension: Dimension::Experience,
                direction: Direction::HigherIsWorse,
            },
            Kpi::AvgResolutionDays => KpiDefinition {
                column: "AVG_RESOLUTION_DAYS",
                name: "Resolution Days",
                description: "Average days to resolve support tickets",
                dimension: Dimension::Experience,
                direction: Direction::HigherIsWorse,
            },
            Kpi::RejectionRate => KpiDefinition {
                column: "REJECTION_RATE",
                name: "Pre-auth Rejection Rate",
                description: "Percentage of pre-authorization requests rejected",
                dimension: Dimension::Experience,
                direction: Direction::HigherIsWorse,
            },
            Kpi::ApprovalRate => KpiDefinition {
                column: "APPROVAL_RATE",
                name: "Pre-auth Approval Rate",
                description: "Percentage of pre-authorization requests approved",
                dimension: Dimension::Experience,
                direction: Direction::HigherIsBetter,
            },
        }
    }

    /// Score-table column name
    pub fn column(&self) -> &'static str {
        self.definition().column
    }
}

/// Feature groups used by the upstream model, kept for report grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureGroup {
    Health,
    Experience,
    Utilization,
    Demographics,
    Seasonal,
    Provider,
}

impl FeatureGroup {
    pub const ALL: [FeatureGroup; 6] = [
        FeatureGroup::Health,
        FeatureGroup::Experience,
        FeatureGroup::Utilization,
        FeatureGroup::Demographics,
        FeatureGroup::Seasonal,
        FeatureGroup::Provider,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeatureGroup::Health => "H_HEALTH",
            FeatureGroup::Experience => "E_EXPERIENCE",
            FeatureGroup::Utilization => "U_UTILIZATION",
            FeatureGroup::Demographics => "DEMOGRAPHICS",
            FeatureGroup::Seasonal => "SEASONAL",
            FeatureGroup::Provider => "PROVIDER",
        }
    }

    /// Score-table columns belonging to this group
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            FeatureGroup::Health => &[
                "MEMBERS_WITH_CLAIMS",
                "UNIQUE_DIAGNOSES",
                "DIAGNOSES_PER_UTILIZER",
                "CLAIM_LINES",
                "UNIQUE_CLAIMS",
                "CLAIMS_PER_UTILIZER",
                "TOTAL_BILLED",
                "AVG_CLAIM_AMOUNT",
                "MAX_CLAIM_AMOUNT",
                "P90_CLAIM_AMOUNT",
                "STD_CLAIM_AMOUNT",
                "UTILIZATION_RATE",
            ],
            FeatureGroup::Experience => &[
                "TOTAL_CALLS",
                "UNIQUE_CALLS",
                "UNIQUE_CALLERS",
                "CALLS_PER_MEMBER",
                "AVG_RESOLUTION_DAYS",
                "MEDIAN_RESOLUTION_DAYS",
                "CALL_CATEGORIES",
                "PREAUTH_EPISODES",
                "PREAUTH_ITEMS",
                "MEMBERS_WITH_PREAUTH",
                "APPROVAL_RATE",
                "REJECTION_RATE",
                "PREAUTH_PER_MEMBER",
                "WEEKEND_CALLS",
                "WEEKDAY_CALLS",
            ],
            FeatureGroup::Utilization => &[
                "LOSS_RATIO",
                "COST_PER_MEMBER",
                "COST_PER_UTILIZER",
                "TOTAL_EST_AMOUNT",
                "AVG_EST_AMOUNT",
                "MAX_EST_AMOUNT",
                "WRITTEN_PREMIUM",
                "EARNED_PREMIUM",
                "AVG_PREMIUM_PER_MEMBER",
                "CLAIM_LINES_PER_MEMBER",
                "PROVIDERS_PER_UTILIZER",
            ],
            FeatureGroup::Demographics => &[
                "TOTAL_MEMBERS",
                "PLAN_COUNT",
                "MALE_COUNT",
                "FEMALE_COUNT",
                "MALE_RATIO",
                "NATIONALITY_COUNT",
            ],
            FeatureGroup::Seasonal => &[
                "Q1_CLAIMS",
                "Q2_CLAIMS",
                "Q3_CLAIMS",
                "Q4_CLAIMS",
                "Q1_CALLS",
                "Q2_CALLS",
                "Q3_CALLS",
                "Q4_CALLS",
                "QUARTER_CONCENTRATION",
                "ACTIVE_MONTHS",
                "ACTIVE_CALL_MONTHS",
                "ACTIVE_PREAUTH_MONTHS",
                "YEAR_COVERAGE",
            ],
            FeatureGroup::Provider => &[
                "UNIQUE_PROVIDERS",
                "PREAUTH_PROVIDERS",
                "PRACTICE_TYPE_COUNT",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_columns_unique() {
        let mut columns: Vec<_> = Kpi::ALL.iter().map(|k| k.column()).collect();
        columns.sort_unstable();
        columns.dedup();
        assert_eq!(columns.len(), Kpi::ALL.len());
    }

    #[test]
    fn test_approval_rate_is_higher_is_better() {
        // The single KPI where a larger value is good
        assert_eq!(
            Kpi::ApprovalRate.definition().direction,
            Direction::HigherIsBetter
        );
        for kpi in Kpi::ALL {
            if kpi != Kpi::ApprovalRate {
                assert_ne!(kpi.definition().direction, Direction::HigherIsBetter);
            }
        }
    }

    #[test]
    fn test_feature_groups_cover_comparison_kpis() {
        let all_columns: Vec<_> = FeatureGroup::ALL
            .iter()
            .flat_map(|g| g.columns().iter().copied())
            .collect();
        for kpi in Kpi::ALL {
            assert!(
                all_columns.contains(&kpi.column()),
                "missing column {}",
                kpi.column()
            );
        }
    }
}
