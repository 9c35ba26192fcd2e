//! Rule battery that turns client KPIs into prioritized recommendations
//!
//! Eight independent rules, each comparing one KPI against a fixed threshold
//! or against the cohort benchmark. Evaluation order is fixed and doubles as
//! the tie-break order after the priority sort. The generator is total: a
//! missing client KPI reads as zero and every benchmark lookup has a
//! hardcoded fallback, so no input can make it fail.

use crate::client::ClientRecord;
use crate::kpi::Dimension;
use crate::portfolio::BenchmarkStats;
use serde::{Deserialize, Serialize};

/// Severity of a recommendation, ordered HIGH < MEDIUM < LOW for sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: HIGH first
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

/// One actionable recommendation for an account manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub dimension: Dimension,
    /// Short issue label
    pub issue: &'static str,
    /// Explanation embedding the client value and the comparison point
    pub cause: String,
    /// Prescribed next step
    pub action: &'static str,
    /// Expected benefit
    pub impact: &'static str,
}

/// Benchmark fallbacks used when the cohort statistic is unavailable
const FALLBACK_REJECTION_RATE: f64 = 0.15;
const FALLBACK_RESOLUTION_DAYS: f64 = 5.0;
const FALLBACK_CALLS_PER_MEMBER: f64 = 0.2;
const FALLBACK_COST_PER_MEMBER: f64 = 4500.0;
const FALLBACK_UTILIZATION_RATE: f64 = 0.52;
const FALLBACK_DIAGNOSES_PER_UTILIZER: f64 = 2.8;

/// Generate prioritized recommendations for one client against a benchmark.
///
/// Returns zero to eight recommendations, stable-sorted HIGH, MEDIUM, LOW;
/// within a priority band the rule evaluation order is preserved.
pub fn generate_recommendations(
    client: &ClientRecord,
    benchmark: &BenchmarkStats,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    // Experience: pre-auth rejection
    let rejection_rate = client.rejection_rate.unwrap_or(0.0);
    if rejection_rate > 0.25 {
        let priority = if rejection_rate > 0.40 {
            Priority::High
        } else {
            Priority::Medium
        };
        let bench = benchmark.avg_rejection_rate.unwrap_or(FALLBACK_REJECTION_RATE);
        recommendations.push(Recommendation {
            priority,
            dimension: Dimension::Experience,
            issue: "High pre-authorization rejection rate",
            cause: format!(
                "Rejection rate {} vs {} benchmark",
                format_pct(rejection_rate),
                format_pct(bench)
            ),
            action: "Review rejection reasons, consider provider network expansion, assign dedicated pre-auth handler",
            impact: "Could improve E_SCORE by 15-20 points",
        });
    }

    // Experience: resolution time
    let resolution_days = client.avg_resolution_days.unwrap_or(0.0);
    if resolution_days > 10.0 {
        let priority = if resolution_days > 15.0 {
            Priority::High
        } else {
            Priority::Medium
        };
        let bench = benchmark.avg_resolution_days.unwrap_or(FALLBACK_RESOLUTION_DAYS);
        recommendations.push(Recommendation {
            priority,
            dimension: Dimension::Experience,
            issue: "Long ticket resolution time",
            cause: format!("Average {resolution_days:.1} days vs {bench:.1} day benchmark"),
            action: "Assign dedicated support representative, review escalation process, implement priority queuing",
            impact: "Improved E_SCORE and client satisfaction",
        });
    }

    // Experience: call volume
    let calls_per_member = client.calls_per_member.unwrap_or(0.0);
    if calls_per_member > 0.35 {
        let bench = benchmark.avg_calls_per_member.unwrap_or(FALLBACK_CALLS_PER_MEMBER);
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            dimension: Dimension::Experience,
            issue: "High support call volume",
            cause: format!("{calls_per_member:.2} calls/member vs {bench:.2} benchmark"),
            action: "Proactive communication, member education materials, digital self-service promotion",
            impact: "Reduced operational costs and improved member experience",
        });
    }

    // Cost: loss ratio
    let loss_ratio = client.loss_ratio.unwrap_or(0.0);
    if loss_ratio > 1.2 {
        let priority = if loss_ratio > 1.5 {
            Priority::High
        } else {
            Priority::Medium
        };
        recommendations.push(Recommendation {
            priority,
            dimension: Dimension::Utilization,
            issue: "Unprofitable loss ratio",
            cause: format!("Loss ratio {loss_ratio:.2} (break-even = 1.0)"),
            action: "Premium adjustment discussion, benefit redesign, cost-sharing increase, wellness program enrollment",
            impact: "Required for sustainable contract renewal",
        });
    }

    // Cost: cost per member, relative to the cohort
    let avg_cost = benchmark.avg_cost_per_member.unwrap_or(FALLBACK_COST_PER_MEMBER);
    let cost_per_member = client.cost_per_member.unwrap_or(0.0);
    if cost_per_member > avg_cost * 1.5 {
        let priority = if cost_per_member > avg_cost * 2.0 {
            Priority::High
        } else {
            Priority::Medium
        };
        recommendations.push(Recommendation {
            priority,
            dimension: Dimension::Utilization,
            issue: "High cost per member",
            cause: format!(
                "SAR {}/member vs SAR {} benchmark",
                format_sar(cost_per_member),
                format_sar(avg_cost)
            ),
            action: "Claims audit, chronic condition management program, provider steering incentives",
            impact: "Improved U_SCORE and profitability",
        });
    }

    // Health: utilization
    let utilization_rate = client.utilization_rate.unwrap_or(0.0);
    if utilization_rate > 0.75 {
        let bench = benchmark.avg_utilization_rate.unwrap_or(FALLBACK_UTILIZATION_RATE);
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            dimension: Dimension::Health,
            issue: "High healthcare utilization",
            cause: format!(
                "Utilization {} vs {} benchmark",
                format_pct(utilization_rate),
                format_pct(bench)
            ),
            action: "Wellness program introduction, preventive screening campaign, health education",
            impact: "Long-term cost reduction and improved H_SCORE",
        });
    }

    // Health: chronic condition burden
    let diagnoses = client.diagnoses_per_utilizer.unwrap_or(0.0);
    if diagnoses > 4.0 {
        let bench = benchmark
            .avg_diagnoses_per_utilizer
            .unwrap_or(FALLBACK_DIAGNOSES_PER_UTILIZER);
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            dimension: Dimension::Health,
            issue: "High chronic condition burden",
            cause: format!("{diagnoses:.1} diagnoses/utilizer vs {bench:.1} benchmark"),
            action: "Disease management programs, chronic care coordination, specialist referral optimization",
            impact: "Improved health outcomes and cost predictability",
        });
    }

    // Health: catastrophic claims
    let max_claim = client.max_claim_amount.unwrap_or(0.0);
    if max_claim > 100_000.0 {
        recommendations.push(Recommendation {
            priority: Priority::Low,
            dimension: Dimension::Health,
            issue: "Catastrophic claim exposure",
            cause: format!("Max claim SAR {}", format_sar(max_claim)),
            action: "Case management review, reinsurance consideration, large claim monitoring",
            impact: "Risk mitigation for future catastrophic events",
        });
    }

    // Stable sort keeps rule order within each priority band
    recommendations.sort_by_key(|r| r.priority.rank());
    recommendations
}

/// Format a rate as a percentage with one decimal (0.45 -> "45.0%")
fn format_pct(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Format a SAR amount rounded to whole units with thousands separators
fn format_sar(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
