//! IVI System CLI
//!
//! Worked single-client example: scores a sample contract against default
//! benchmarks and prints the full account review to the console

use ivi_system::client::{ClientRecord, RiskTier, Segment};
use ivi_system::kpi::{assess_kpi, Kpi};
use ivi_system::portfolio::BenchmarkStats;
use ivi_system::recommend::{
    calculate_priority_score, generate_recommendations, segment_action_plan,
};

fn main() {
    env_logger::init();

    println!("IVI System v0.1.0");
    println!("=================\n");

    // Sample contract: large, unprofitable, service friction on several KPIs
    let client = ClientRecord {
        contract_no: "C-204417".to_string(),
        year: "2022".to_string(),
        ivi_score: 38.5,
        ivi_risk: RiskTier::HighRisk,
        segment: Segment::HighRiskLargeUnprofitable,
        total_members: 412,
        written_premium: 2_350_000.0,
        loss_ratio: Some(1.34),
        cost_per_member: Some(7_100.0),
        utilization_rate: Some(0.81),
        calls_per_member: Some(0.44),
        rejection_rate: Some(0.31),
        approval_rate: Some(0.69),
        avg_resolution_days: Some(12.4),
        diagnoses_per_utilizer: Some(3.2),
        max_claim_amount: Some(220_000.0),
        retained_next_year: None,
        primary_region: Some("Central".to_string()),
    };

    // Portfolio benchmark for comparison
    let benchmark = BenchmarkStats {
        avg_utilization_rate: Some(0.52),
        avg_loss_ratio: Some(0.94),
        avg_cost_per_member: Some(4_500.0),
        avg_calls_per_member: Some(0.20),
        avg_rejection_rate: Some(0.15),
        avg_approval_rate: Some(0.85),
        avg_resolution_days: Some(5.0),
        avg_diagnoses_per_utilizer: Some(2.8),
        p25_ivi_score: Some(48.0),
        p50_ivi_score: Some(63.0),
        p75_ivi_score: Some(77.0),
    };

    println!("Contract: {} ({})", client.contract_no, client.year);
    println!("  IVI Score: {:.0} ({})", client.ivi_score, client.ivi_risk.as_str());
    println!("  Segment: {}", client.segment.as_str());
    println!("  Members: {}", client.total_members);
    println!("  Premium: SAR {:.0}", client.written_premium);
    println!();

    // KPI assessment table
    println!("KPI Assessment:");
    println!("{:<28} {:>12} {:>12} {:>9} {:>10}", "KPI", "Client", "Benchmark", "Diff", "Status");
    println!("{}", "-".repeat(75));

    let kpi_values = [
        (Kpi::RejectionRate, client.rejection_rate, benchmark.avg_rejection_rate),
        (Kpi::ApprovalRate, client.approval_rate, benchmark.avg_approval_rate),
        (Kpi::AvgResolutionDays, client.avg_resolution_days, benchmark.avg_resolution_days),
        (Kpi::CallsPerMember, client.calls_per_member, benchmark.avg_calls_per_member),
        (Kpi::LossRatio, client.loss_ratio, benchmark.avg_loss_ratio),
        (Kpi::CostPerMember, client.cost_per_member, benchmark.avg_cost_per_member),
        (Kpi::UtilizationRate, client.utilization_rate, benchmark.avg_utilization_rate),
        (Kpi::DiagnosesPerUtilizer, client.diagnoses_per_utilizer, benchmark.avg_diagnoses_per_utilizer),
    ];

    for (kpi, client_value, benchmark_value) in kpi_values {
        let (Some(cv), Some(bv)) = (client_value, benchmark_value) else {
            continue;
        };
        let assessment = assess_kpi(kpi, cv, bv);
        println!(
            "{:<28} {:>12.2} {:>12.2} {:>8.0}% {:>10}",
            kpi.definition().name,
            cv,
            bv,
            assessment.pct_difference,
            assessment.status.as_str(),
        );
    }

    // Recommendations
    let recommendations = generate_recommendations(&client, &benchmark);
    println!("\nRecommendations ({}):", recommendations.len());
    for rec in &recommendations {
        println!(
            "  [{}] ({}) {}",
            rec.priority.as_str(),
            rec.dimension.code(),
            rec.issue
        );
        println!("      Cause:  {}", rec.cause);
        println!("      Action: {}", rec.action);
        println!("      Impact: {}", rec.impact);
    }

    // Segment action plan
    let plan = segment_action_plan(client.segment);
    println!("\nSegment Plan [{}]:", plan.priority.as_str());
    for action in plan.actions {
        println!("  - {action}");
    }
    println!("  Focus: {}", plan.focus);

    // Priority score
    let score = calculate_priority_score(
        client.ivi_score,
        client.written_premium,
        client.loss_ratio.unwrap_or(1.0),
        client.total_members,
    );
    println!("\nPriority Score: {score:.2}");
}
