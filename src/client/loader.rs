//! Load client records from the materialized score table CSV

use super::{ClientRecord, RiskTier, Segment};
use csv::Reader;
use log::debug;
use std::path::Path;
use thiserror::Error;

/// Error raised when the score table cannot be ingested
///
/// This is the only failure mode the crate surfaces: bad files and
/// unrecognized labels fail here, at the boundary. The scoring functions
/// themselves never error.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read score table: {0}")]
    Csv(#[from] csv::Error),

    #[error("record {record}: unknown {field} label '{value}'")]
    UnknownLabel {
        record: usize,
        field: &'static str,
        value: String,
    },
}

/// Raw CSV row matching the score-table columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "CONTRACT_NO")]
    contract_no: String,
    #[serde(rename = "YEAR")]
    year: String,
    #[serde(rename = "IVI_SCORE")]
    ivi_score: f64,
    #[serde(rename = "IVI_RISK")]
    ivi_risk: String,
    #[serde(rename = "SEGMENT")]
    segment: String,
    #[serde(rename = "TOTAL_MEMBERS")]
    total_members: u32,
    #[serde(rename = "WRITTEN_PREMIUM")]
    written_premium: f64,
    #[serde(rename = "LOSS_RATIO")]
    loss_ratio: Option<f64>,
    #[serde(rename = "COST_PER_MEMBER")]
    cost_per_member: Option<f64>,
    #[serde(rename = "UTILIZATION_RATE")]
    utilization_rate: Option<f64>,
    #[serde(rename = "CALLS_PER_MEMBER")]
    calls_per_member: Option<f64>,
    #[serde(rename = "REJECTION_RATE")]
    rejection_rate: Option<f64>,
    #[serde(rename = "APPROVAL_RATE")]
    approval_rate: Option<f64>,
    #[serde(rename = "AVG_RESOLUTION_DAYS")]
    avg_resolution_days: Option<f64>,
    #[serde(rename = "DIAGNOSES_PER_UTILIZER")]
    diagnoses_per_utilizer: Option<f64>,
    #[serde(rename = "MAX_CLAIM_AMOUNT")]
    max_claim_amount: Option<f64>,
    #[serde(rename = "RETAINED_NEXT_YEAR")]
    #[serde(default)]
    retained_next_year: Option<f64>,
    #[serde(rename = "PRIMARY_REGION")]
    #[serde(default)]
    primary_region: Option<String>,
}

impl CsvRow {
    fn to_client(self, record: usize) -> Result<ClientRecord, LoadError> {
        let ivi_risk = RiskTier::from_label(&self.ivi_risk).ok_or(LoadError::UnknownLabel {
            record,
            field: "IVI_RISK",
            value: self.ivi_risk.clone(),
        })?;

        let segment = Segment::from_label(&self.segment).ok_or(LoadError::UnknownLabel {
            record,
            field: "SEGMENT",
            value: self.segment.clone(),
        })?;

        Ok(ClientRecord {
            contract_no: self.contract_no,
            year: self.year,
            ivi_score: self.ivi_score,
            ivi_risk,
            segment,
            total_members: self.total_members,
            written_premium: self.written_premium,
            loss_ratio: self.loss_ratio,
            cost_per_member: self.cost_per_member,
            utilization_rate: self.utilization_rate,
            calls_per_member: self.calls_per_member,
            rejection_rate: self.rejection_rate,
            approval_rate: self.approval_rate,
            avg_resolution_days: self.avg_resolution_days,
            diagnoses_per_utilizer: self.diagnoses_per_utilizer,
            max_claim_amount: self.max_claim_amount,
            retained_next_year: self.retained_next_year,
            primary_region: self.primary_region,
        })
    }
}

/// Load all client records from a score-table CSV file
pub fn load_scores<P: AsRef<Path>>(path: P) -> Result<Vec<ClientRecord>, LoadError> {
    let reader = Reader::from_path(path.as_ref())?;
    let records = read_records(reader)?;
    debug!(
        "loaded {} client records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

/// Load client records from any reader (e.g. string buffer, network stream)
pub fn load_scores_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<ClientRecord>, LoadError> {
    read_records(Reader::from_reader(reader))
}

fn read_records<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<ClientRecord>, LoadError> {
    let mut records = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        records.push(row.to_client(idx + 1)?);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "CONTRACT_NO,YEAR,IVI_SCORE,IVI_RISK,SEGMENT,TOTAL_MEMBERS,WRITTEN_PREMIUM,LOSS_RATIO,COST_PER_MEMBER,UTILIZATION_RATE,CALLS_PER_MEMBER,REJECTION_RATE,APPROVAL_RATE,AVG_RESOLUTION_DAYS,DIAGNOSES_PER_UTILIZER,MAX_CLAIM_AMOUNT,RETAINED_NEXT_YEAR,PRIMARY_REGION";

    #[test]
    fn test_load_from_reader() {
        let csv = format!(
            "{HEADER}\n\
             C-1001,2022,42.5,HIGH_RISK,HIGH_RISK_LARGE_UNPROFITABLE,340,1250000,1.32,5200,0.61,0.41,0.28,0.72,12.5,3.1,85000,0,Central\n\
             C-1002,2022,81.0,LOW_RISK,LOW_RISK_SMALL_PROFITABLE,45,98000,0.62,2900,0.44,0.12,0.08,0.92,3.2,2.1,12000,1,Western\n"
        );

        let records = load_scores_from_reader(csv.as_bytes()).expect("load failed");
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.contract_no, "C-1001");
        assert_eq!(first.ivi_risk, RiskTier::HighRisk);
        assert_eq!(first.segment, Segment::HighRiskLargeUnprofitable);
        assert_eq!(first.total_members, 340);
        assert_eq!(first.loss_ratio, Some(1.32));
        assert_eq!(first.primary_region.as_deref(), Some("Central"));
    }

    #[test]
    fn test_empty_kpi_cells_are_none() {
        let csv = format!(
            "{HEADER}\n\
             C-2001,2023,55.0,MODERATE_RISK,MODERATE_RISK_SMALL_PROFITABLE,20,45000,,,,,,,,,,,\n"
        );

        let records = load_scores_from_reader(csv.as_bytes()).expect("load failed");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].loss_ratio, None);
        assert_eq!(records[0].rejection_rate, None);
        assert_eq!(records[0].max_claim_amount, None);
    }

    #[test]
    fn test_unknown_risk_label_fails() {
        let csv = format!(
            "{HEADER}\n\
             C-3001,2022,50.0,EXTREME_RISK,LOW_RISK_SMALL_PROFITABLE,10,20000,0.5,1000,0.3,0.1,0.05,0.95,2.0,1.5,5000,,\n"
        );

        let err = load_scores_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::UnknownLabel { record, field, value } => {
                assert_eq!(record, 1);
                assert_eq!(field, "IVI_RISK");
                assert_eq!(value, "EXTREME_RISK");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
