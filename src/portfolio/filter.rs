//! Portfolio filters and contract lookup

use crate::client::{ClientRecord, RiskTier};

/// Filter criteria applied to the score table before aggregation or ranking
///
/// Mirrors the account-review workflow: restrict to one contract year, drop
/// contracts below a member floor (the upstream model is trained on 5+
/// member contracts), and optionally narrow to specific risk tiers.
#[derive(Debug, Clone, Default)]
pub struct PortfolioFilter {
    /// Keep only this contract year; `None` keeps all years
    pub year: Option<String>,
    /// Minimum member count (inclusive)
    pub min_members: u32,
    /// Keep only these risk tiers; empty keeps all tiers
    pub risk_tiers: Vec<RiskTier>,
}

impl PortfolioFilter {
    /// Check whether a record passes the filter
    pub fn matches(&self, record: &ClientRecord) -> bool {
        if let Some(year) = &self.year {
            if &record.year != year {
                return false;
            }
        }
        if record.total_members < self.min_members {
            return false;
        }
        if !self.risk_tiers.is_empty() && !self.risk_tiers.contains(&record.ivi_risk) {
            return false;
        }
        true
    }

    /// Apply the filter, borrowing the matching records
    pub fn apply<'a>(&self, records: &'a [ClientRecord]) -> Vec<&'a ClientRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Look up a single contract-year row
pub fn find_client<'a>(
    records: &'a [ClientRecord],
    contract_no: &str,
    year: &str,
) -> Option<&'a ClientRecord> {
    records
        .iter()
        .find(|r| r.contract_no == contract_no && r.year == year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Segment;

    fn record(contract: &str, year: &str, tier: RiskTier, members: u32) -> ClientRecord {
        ClientRecord {
            contract_no: contract.to_string(),
            year: year.to_string(),
            ivi_score: 50.0,
            ivi_risk: tier,
            segment: Segment::ModerateRiskSmallProfitable,
            total_members: members,
            written_premium: 75_000.0,
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
        }
    }

    #[test]
    fn test_filters_compose() {
        let records = vec![
            record("A", "2022", RiskTier::HighRisk, 100),
            record("B", "2022", RiskTier::LowRisk, 3),
            record("C", "2023", RiskTier::HighRisk, 200),
            record("D", "2022", RiskTier::ModerateRisk, 50),
        ];

        let filter = PortfolioFilter {
            year: Some("2022".to_string()),
            min_members: 5,
            risk_tiers: vec![RiskTier::HighRisk, RiskTier::ModerateRisk],
        };

        let kept = filter.apply(&records);
        let names: Vec<&str> = kept.iter().map(|r| r.contract_no.as_str()).collect();
        assert_eq!(names, vec!["A", "D"]);
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let records = vec![
            record("A", "2022", RiskTier::HighRisk, 1),
            record("B", "2023", RiskTier::LowRisk, 9999),
        ];
        assert_eq!(PortfolioFilter::default().apply(&records).len(), 2);
    }

    #[test]
    fn test_find_client_matches_year() {
        let records = vec![
            record("A", "2022", RiskTier::HighRisk, 100),
            record("A", "2023", RiskTier::LowRisk, 110),
        ];
        let found = find_client(&records, "A", "2023").expect("missing");
        assert_eq!(found.ivi_risk, RiskTier::LowRisk);
        assert!(find_client(&records, "A", "2024").is_none());
        assert!(find_client(&records, "Z", "2022").is_none());
    }
}
