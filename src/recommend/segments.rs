//! Fixed action plans for the twelve client segments
//!
//! This table is reference data agreed with account management; the strings
//! ship verbatim and must stay stable across releases so downstream reports
//! remain comparable.

use crate::client::Segment;
use serde::{Deserialize, Serialize};

/// Engagement priority tier for a segment's action plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl PlanPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanPriority::Critical => "CRITICAL",
            PlanPriority::High => "HIGH",
            PlanPriority::Medium => "MEDIUM",
            PlanPriority::Low => "LOW",
        }
    }
}

/// Pre-defined account plan for one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentPlan {
    pub priority: PlanPriority,
    /// Prescribed actions in execution order
    pub actions: &'static [&'static str],
    /// Narrative focus for the account team
    pub focus: &'static str,
}

/// Get the pre-defined action plan for a segment
pub fn segment_action_plan(segment: Segment) -> SegmentPlan {
    match segment {
        Segment::HighRiskLargeUnprofitable => SegmentPlan {
            priority: PlanPriority::Critical,
            actions: &[
                "Executive-level meeting to discuss contract renewal terms",
                "Premium adjustment negotiation required",
                "Review benefit design for cost optimization",
                "Conduct claims audit for potential fraud/misuse",
            ],
            focus: "Retain if profitable terms can be negotiated, otherwise consider non-renewal",
        },
        Segment::HighRiskLargeProfitable => SegmentPlan {
            priority: PlanPriority::High,
            actions: &[
                "Assign dedicated account manager",
                "Conduct service quality review",
                "Identify and address pain points (E-score drivers)",
                "Propose loyalty incentives or enhanced benefits",
            ],
            focus: "Retention is critical - valuable client at risk",
        },
        Segment::HighRiskSmallUnprofitable => SegmentPlan {
            priority: PlanPriority::Medium,
            actions: &[
                "Review pricing for renewal",
                "Consider benefit tier adjustment",
                "Standard renewal process with adjusted terms",
            ],
            focus: "Low priority - small impact, let natural churn occur or adjust pricing",
        },
        Segment::HighRiskSmallProfitable => SegmentPlan {
            priority: PlanPriority::Medium,
            actions: &[
                "Standard account outreach",
                "Identify quick wins for service improvement",
                "Consider pooling with similar clients for attention",
            ],
            focus: "Moderate effort retention - profitable but small",
        },
        Segment::ModerateRiskLargeUnprofitable => SegmentPlan {
            priority: PlanPriority::Medium,
            actions: &[
                "Wellness program introduction",
                "Cost management consultation",
                "Premium review for next renewal",
            ],
            focus: "Proactive cost management to improve profitability",
        },
        Segment::ModerateRiskLargeProfitable => SegmentPlan {
            priority: PlanPriority::Medium,
            actions: &[
                "Regular account check-ins",
                "Wellness program upsell",
                "Maintain service quality",
            ],
            focus: "Maintain relationship and monitor for risk changes",
        },
        Segment::ModerateRiskSmallUnprofitable => SegmentPlan {
            priority: PlanPriority::Low,
            actions: &[
                "Standard renewal with pricing adjustment",
                "Automated communication",
            ],
            focus: "Minimal effort - adjust pricing at renewal",
        },
        Segment::ModerateRiskSmallProfitable => SegmentPlan {
            priority: PlanPriority::Low,
            actions: &["Standard renewal process", "Automated wellness content"],
            focus: "Maintain current approach",
        },
        Segment::LowRiskLargeUnprofitable => SegmentPlan {
            priority: PlanPriority::Medium,
            actions: &[
                "Cost management review",
                "Benefit optimization discussion",
                "Preventive care programs",
            ],
            focus: "Loyal client but unprofitable - work on sustainability",
        },
        Segment::LowRiskLargeProfitable => SegmentPlan {
            priority: PlanPriority::Low,
            actions: &[
                "Relationship maintenance",
                "Upsell opportunities (dental, vision, wellness)",
                "Referral program engagement",
            ],
            focus: "Ideal client - maintain and grow relationship",
        },
        Segment::LowRiskSmallUnprofitable => SegmentPlan {
            priority: PlanPriority::Low,
            actions: &["Pricing adjustment at renewal", "Standard communication"],
            focus: "Adjust pricing to improve margins",
        },
        Segment::LowRiskSmallProfitable => SegmentPlan {
            priority: PlanPriority::Low,
            actions: &["Standard renewal process", "Automated engagement"],
            focus: "No action needed - healthy baseline",
        },
    }
}
