//! Attention ranking across a portfolio
//!
//! Scores every client with the priority formula and orders the result
//! descending, producing the account-management attention list. Per-client
//! scoring is independent, so callers ranking very large books can compute
//! scores in parallel and feed them through `rank_scored`.

use crate::client::{ClientRecord, RiskTier, Segment};
use crate::recommend::client_priority_score;
use serde::{Deserialize, Serialize};

/// One row of the attention list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedClient {
    pub contract_no: String,
    pub year: String,
    pub segment: Segment,
    pub ivi_risk: RiskTier,
    pub ivi_score: f64,
    pub total_members: u32,
    pub written_premium: f64,
    pub loss_ratio: Option<f64>,
    pub priority_score: f64,
}

impl RankedClient {
    /// Build a row from a score-table record
    pub fn from_record(record: &ClientRecord) -> Self {
        Self {
            contract_no: record.contract_no.clone(),
            year: record.year.clone(),
            segment: record.segment,
            ivi_risk: record.ivi_risk,
            ivi_score: record.ivi_score,
            total_members: record.total_members,
            written_premium: record.written_premium,
            loss_ratio: record.loss_ratio,
            priority_score: client_priority_score(record),
        }
    }
}

/// Score and rank clients by descending priority.
///
/// Ties break on premium descending, then contract number, so the ordering
/// is deterministic across runs.
pub fn rank_by_priority(records: &[ClientRecord]) -> Vec<RankedClient> {
    rank_scored(records.iter().map(RankedClient::from_record).collect())
}

/// Order pre-scored rows into the attention list
pub fn rank_scored(mut rows: Vec<RankedClient>) -> Vec<RankedClient> {
    rows.sort_by(|a, b| {
        b.priority_score
            .partial_cmp(&a.priority_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                b.written_premium
                    .partial_cmp(&a.written_premium)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| a.contract_no.cmp(&b.contract_no))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(contract: &str, ivi: f64, members: u32, premium: f64) -> ClientRecord {
        ClientRecord {
            contract_no: contract.to_string(),
            year: "2022".to_string(),
            ivi_score: ivi,
            ivi_risk: RiskTier::ModerateRisk,
            segment: Segment::ModerateRiskLargeProfitable,
            total_members: members,
            written_premium: premium,
            loss_ratio: Some(0.9),
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
        }
    }

    #[test]
    fn test_ranked_descending() {
        let records = vec![
            record("HEALTHY", 95.0, 100, 500_000.0),
            record("AT_RISK", 20.0, 100, 500_000.0),
            record("MIDDLING", 60.0, 100, 500_000.0),
        ];

        let ranked = rank_by_priority(&records);
        let order: Vec<&str> = ranked.iter().map(|r| r.contract_no.as_str()).collect();
        assert_eq!(order, vec!["AT_RISK", "MIDDLING", "HEALTHY"]);
        assert!(ranked[0].priority_score > ranked[1].priority_score);
    }

    #[test]
    fn test_deterministic_tie_break() {
        // Identical inputs differ only by contract number
        let records = vec![
            record("B", 50.0, 100, 250_000.0),
            record("A", 50.0, 100, 250_000.0),
            record("C", 50.0, 100, 300_000.0),
        ];

        let ranked = rank_by_priority(&records);
        let order: Vec<&str> = ranked.iter().map(|r| r.contract_no.as_str()).collect();
        // C wins on premium, then A/B on contract number
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_missing_loss_ratio_scores_as_break_even() {
        let mut rec = record("X", 50.0, 100, 250_000.0);
        rec.loss_ratio = None;
        let ranked = rank_by_priority(&[rec]);

        let expected =
            crate::recommend::calculate_priority_score(50.0, 250_000.0, 1.0, 100);
        assert_eq!(ranked[0].priority_score, expected);
    }
}
