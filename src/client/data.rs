//! Client record structures matching the materialized IVI score table

use serde::{Deserialize, Serialize};

/// Risk tier assigned by the upstream scoring model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    HighRisk,
    ModerateRisk,
    LowRisk,
}

impl RiskTier {
    /// Parse the score-table label (e.g. "HIGH_RISK")
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "HIGH_RISK" => Some(RiskTier::HighRisk),
            "MODERATE_RISK" => Some(RiskTier::ModerateRisk),
            "LOW_RISK" => Some(RiskTier::LowRisk),
            _ => None,
        }
    }

    /// Get the string representation matching the score-table format
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::HighRisk => "HIGH_RISK",
            RiskTier::ModerateRisk => "MODERATE_RISK",
            RiskTier::LowRisk => "LOW_RISK",
        }
    }
}

/// Size class of a contract (member count relative to the portfolio split)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Large,
    Small,
}

/// Profitability class of a contract (loss ratio above or below break-even)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfitClass {
    Profitable,
    Unprofitable,
}

/// Client segment: the cross of risk tier, size class, and profitability
/// class assigned upstream. Twelve combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    HighRiskLargeUnprofitable,
    HighRiskLargeProfitable,
    HighRiskSmallUnprofitable,
    HighRiskSmallProfitable,
    ModerateRiskLargeUnprofitable,
    ModerateRiskLargeProfitable,
    ModerateRiskSmallUnprofitable,
    ModerateRiskSmallProfitable,
    LowRiskLargeUnprofitable,
    LowRiskLargeProfitable,
    LowRiskSmallUnprofitable,
    LowRiskSmallProfitable,
}

impl Segment {
    /// All twelve segments in attention order (rank 1 first)
    pub const ALL: [Segment; 12] = [
        Segment::HighRiskLargeUnprofitable,
        Segment::HighRiskLargeProfitable,
        Segment::HighRiskSmallUnprofitable,
        Segment::HighRiskSmallProfitable,
        Segment::ModerateRiskLargeUnprofitable,
        Segment::ModerateRiskLargeProfitable,
        Segment::ModerateRiskSmallUnprofitable,
        Segment::ModerateRiskSmallProfitable,
        Segment::LowRiskLargeUnprofitable,
        Segment::LowRiskLargeProfitable,
        Segment::LowRiskSmallUnprofitable,
        Segment::LowRiskSmallProfitable,
    ];

    /// Compose a segment from its three classification axes
    pub fn from_parts(risk: RiskTier, size: SizeClass, profit: ProfitClass) -> Self {
        use ProfitClass::*;
        use RiskTier::*;
        use SizeClass::*;
        match (risk, size, profit) {
            (HighRisk, Large, Unprofitable) => Segment::HighRiskLargeUnprofitable,
            (HighRisk, Large, Profitable) => Segment::HighRiskLargeProfitable,
            (HighRisk, Small, Unprofitable) => Segment::HighRiskSmallUnprofitable,
            (HighRisk, Small, Profitable) => Segment::HighRiskSmallProfitable,
            (ModerateRisk, Large, Unprofitable) => Segment::ModerateRiskLargeUnprofitable,
            (ModerateRisk, Large, Profitable) => Segment::ModerateRiskLargeProfitable,
            (ModerateRisk, Small, Unprofitable) => Segment::ModerateRiskSmallUnprofitable,
            (ModerateRisk, Small, Profitable) => Segment::ModerateRiskSmallProfitable,
            (LowRisk, Large, Unprofitable) => Segment::LowRiskLargeUnprofitable,
            (LowRisk, Large, Profitable) => Segment::LowRiskLargeProfitable,
            (LowRisk, Small, Unprofitable) => Segment::LowRiskSmallUnprofitable,
            (LowRisk, Small, Profitable) => Segment::LowRiskSmallProfitable,
        }
    }

    /// Parse the score-table label (e.g. "HIGH_RISK_LARGE_UNPROFITABLE")
    pub fn from_label(label: &str) -> Option<Self> {
        Segment::ALL.iter().copied().find(|s| s.as_str() == label)
    }

    /// Get the string representation matching the score-table format
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::HighRiskLargeUnprofitable => "HIGH_RISK_LARGE_UNPROFITABLE",
            Segment::HighRiskLargeProfitable => "HIGH_RISK_LARGE_PROFITABLE",
            Segment::HighRiskSmallUnprofitable => "HIGH_RISK_SMALL_UNPROFITABLE",
            Segment::HighRiskSmallProfitable => "HIGH_RISK_SMALL_PROFITABLE",
            Segment::ModerateRiskLargeUnprofitable => "MODERATE_RISK_LARGE_UNPROFITABLE",
            Segment::ModerateRiskLargeProfitable => "MODERATE_RISK_LARGE_PROFITABLE",
            Segment::ModerateRiskSmallUnprofitable => "MODERATE_RISK_SMALL_UNPROFITABLE",
            Segment::ModerateRiskSmallProfitable => "MODERATE_RISK_SMALL_PROFITABLE",
            Segment::LowRiskLargeUnprofitable => "LOW_RISK_LARGE_UNPROFITABLE",
            Segment::LowRiskLargeProfitable => "LOW_RISK_LARGE_PROFITABLE",
            Segment::LowRiskSmallUnprofitable => "LOW_RISK_SMALL_UNPROFITABLE",
            Segment::LowRiskSmallProfitable => "LOW_RISK_SMALL_PROFITABLE",
        }
    }

    /// Attention ordering across segments, 1 (most urgent) through 12
    pub fn attention_rank(&self) -> u8 {
        Segment::ALL.iter().position(|s| s == self).unwrap() as u8 + 1
    }

    /// Risk tier axis of the segment
    pub fn risk_tier(&self) -> RiskTier {
        match self.attention_rank() {
            1..=4 => RiskTier::HighRisk,
            5..=8 => RiskTier::ModerateRisk,
            _ => RiskTier::LowRisk,
        }
    }

    /// Size class axis of the segment
    pub fn size_class(&self) -> SizeClass {
        match self {
            Segment::HighRiskLargeUnprofitable
            | Segment::HighRiskLargeProfitable
            | Segment::ModerateRiskLargeUnprofitable
            | Segment::ModerateRiskLargeProfitable
            | Segment::LowRiskLargeUnprofitable
            | Segment::LowRiskLargeProfitable => SizeClass::Large,
            _ => SizeClass::Small,
        }
    }

    /// Profitability axis of the segment
    pub fn profit_class(&self) -> ProfitClass {
        match self {
            Segment::HighRiskLargeProfitable
            | Segment::HighRiskSmallProfitable
            | Segment::ModerateRiskLargeProfitable
            | Segment::ModerateRiskSmallProfitable
            | Segment::LowRiskLargeProfitable
            | Segment::LowRiskSmallProfitable => ProfitClass::Profitable,
            _ => ProfitClass::Unprofitable,
        }
    }
}

/// One contract-year row from the materialized score table
///
/// KPI fields are optional: the upstream pipeline leaves cells empty for
/// contracts with no activity in that dimension (e.g. no pre-auth episodes).
/// The recommendation engine treats absent KPIs as zero; it never fails on
/// sparse rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Contract identifier
    pub contract_no: String,

    /// Contract year label (e.g. "2022")
    pub year: String,

    /// Composite IVI score from the upstream model, 0-100
    pub ivi_score: f64,

    /// Risk tier derived from the IVI score
    pub ivi_risk: RiskTier,

    /// Assigned segment (risk x size x profitability)
    pub segment: Segment,

    /// Number of covered members
    pub total_members: u32,

    /// Written premium (SAR)
    pub written_premium: f64,

    /// Claims paid / premium earned; > 1.0 is unprofitable
    pub loss_ratio: Option<f64>,

    /// Total claims / total members (SAR)
    pub cost_per_member: Option<f64>,

    /// Share of members who used healthcare services
    pub utilization_rate: Option<f64>,

    /// Support calls per member
    pub calls_per_member: Option<f64>,

    /// Share of pre-authorization requests rejected
    pub rejection_rate: Option<f64>,

    /// Share of pre-authorization requests approved
    pub approval_rate: Option<f64>,

    /// Average days to resolve support tickets
    pub avg_resolution_days: Option<f64>,

    /// Unique diagnoses per member who used services
    pub diagnoses_per_utilizer: Option<f64>,

    /// Largest single claim (SAR)
    pub max_claim_amount: Option<f64>,

    /// Observed retention outcome (1.0 = retained), when known
    pub retained_next_year: Option<f64>,

    /// Region with the largest member share
    pub primary_region: Option<String>,
}

impl ClientRecord {
    /// Check whether the contract is running above break-even loss ratio
    pub fn is_unprofitable(&self) -> bool {
        self.loss_ratio.map_or(false, |lr| lr > 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_labels_round_trip() {
        for segment in Segment::ALL {
            assert_eq!(Segment::from_label(segment.as_str()), Some(segment));
        }
        assert_eq!(Segment::from_label("NOT_A_SEGMENT"), None);
    }

    #[test]
    fn test_segment_attention_rank() {
        assert_eq!(Segment::HighRiskLargeUnprofitable.attention_rank(), 1);
        assert_eq!(Segment::HighRiskLargeProfitable.attention_rank(), 2);
        assert_eq!(Segment::ModerateRiskLargeUnprofitable.attention_rank(), 5);
        assert_eq!(Segment::LowRiskSmallProfitable.attention_rank(), 12);
    }

    #[test]
    fn test_segment_axes() {
        let seg = Segment::ModerateRiskLargeProfitable;
        assert_eq!(seg.risk_tier(), RiskTier::ModerateRisk);
        assert_eq!(seg.size_class(), SizeClass::Large);
        assert_eq!(seg.profit_class(), ProfitClass::Profitable);

        assert_eq!(
            Segment::from_parts(RiskTier::LowRisk, SizeClass::Small, ProfitClass::Unprofitable),
            Segment::LowRiskSmallUnprofitable
        );
    }

    #[test]
    fn test_from_parts_matches_axes() {
        for segment in Segment::ALL {
            assert_eq!(
                Segment::from_parts(segment.risk_tier(), segment.size_class(), segment.profit_class()),
                segment
            );
        }
    }

    #[test]
    fn test_unprofitable_needs_a_loss_ratio() {
        let mut record = ClientRecord {
            contract_no: "C-1".to_string(),
            year: "2022".to_string(),
            ivi_score: 50.0,
            ivi_risk: RiskTier::ModerateRisk,
            segment: Segment::ModerateRiskSmallProfitable,
            total_members: 10,
            written_premium: 30_000.0,
            loss_ratio: None,
            cost_per_member: None,
            utilization_rate: None,
            calls_per_member: None,
            rejection_rate: None,
            approval_rate: None,
            avg_resolution_days: None,
            diagnoses_per_utilizer: None,
            max_claim_amount: None,
            retained_next_year: None,
            primary_region: None,
        };
        assert!(!record.is_unprofitable());
        record.loss_ratio = Some(1.0);
        assert!(!record.is_unprofitable());
        record.loss_ratio = Some(1.01);
        assert!(record.is_unprofitable());
    }

    #[test]
    fn test_risk_tier_labels() {
        assert_eq!(RiskTier::from_label("HIGH_RISK"), Some(RiskTier::HighRisk));
        assert_eq!(RiskTier::from_label("high_risk"), None);
        assert_eq!(RiskTier::ModerateRisk.as_str(), "MODERATE_RISK");
    }
}
