//! Account review report for a single contract
//!
//! Looks up one contract-year in the score table, benchmarks it against the
//! portfolio (or its segment with --segment-benchmark), and prints the KPI
//! assessment, recommendations, action plan, and priority score.
//! Supports JSON output for API integration via --json flag.

use anyhow::{bail, Context};
use clap::Parser;
use ivi_system::client::{load_scores, ClientRecord};
use ivi_system::kpi::{assess_kpi, Kpi};
use ivi_system::portfolio::{find_client, BenchmarkStats, PortfolioFilter};
use ivi_system::recommend::{
    client_priority_score, generate_recommendations, segment_action_plan, Recommendation,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Print the account review report for one contract")]
struct Args {
    /// Path to the score table CSV
    input: PathBuf,

    /// Contract number to report on
    contract: String,

    /// Contract year
    #[arg(long, default_value = "2022")]
    year: String,

    /// Benchmark against the client's segment instead of the whole portfolio
    #[arg(long)]
    segment_benchmark: bool,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct KpiRow {
    kpi: &'static str,
    name: &'static str,
    client_value: f64,
    benchmark_value: f64,
    pct_difference: f64,
    status: &'static str,
    color: &'static str,
    comparison: &'static str,
}

#[derive(Serialize)]
struct ActionPlan {
    priority: &'static str,
    actions: &'static [&'static str],
    focus: &'static str,
}

#[derive(Serialize)]
struct ClientReport {
    contract_no: String,
    year: String,
    ivi_score: f64,
    ivi_risk: &'static str,
    segment: &'static str,
    total_members: u32,
    written_premium: f64,
    priority_score: f64,
    benchmark_cohort: String,
    assessments: Vec<KpiRow>,
    recommendations: Vec<Recommendation>,
    action_plan: ActionPlan,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let records = load_scores(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;

    let Some(client) = find_client(&records, &args.contract, &args.year) else {
        bail!("contract {} not found for year {}", args.contract, args.year);
    };

    // Benchmark cohort: same year, optionally narrowed to the client's segment
    let year_filter = PortfolioFilter {
        year: Some(args.year.clone()),
        ..Default::default()
    };
    let cohort: Vec<ClientRecord> = year_filter
        .apply(&records)
        .into_iter()
        .cloned()
        .collect();

    let (benchmark, cohort_label) = if args.segment_benchmark {
        (
            BenchmarkStats::for_segment(&cohort, client.segment),
            client.segment.as_str().to_string(),
        )
    } else {
        (BenchmarkStats::from_records(&cohort), "PORTFOLIO".to_string())
    };

    let report = build_report(client, &benchmark, cohort_label);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn build_report(client: &ClientRecord, benchmark: &BenchmarkStats, cohort: String) -> ClientReport {
    let kpi_pairs = [
        (Kpi::RejectionRate, client.rejection_rate, benchmark.avg_rejection_rate),
        (Kpi::ApprovalRate, client.approval_rate, benchmark.avg_approval_rate),
        (Kpi::AvgResolutionDays, client.avg_resolution_days, benchmark.avg_resolution_days),
        (Kpi::CallsPerMember, client.calls_per_member, benchmark.avg_calls_per_member),
        (Kpi::LossRatio, client.loss_ratio, benchmark.avg_loss_ratio),
        (Kpi::CostPerMember, client.cost_per_member, benchmark.avg_cost_per_member),
        (Kpi::UtilizationRate, client.utilization_rate, benchmark.avg_utilization_rate),
        (Kpi::DiagnosesPerUtilizer, client.diagnoses_per_utilizer, benchmark.avg_diagnoses_per_utilizer),
    ];

    let assessments = kpi_pairs
        .into_iter()
        .filter_map(|(kpi, client_value, benchmark_value)| {
            let (cv, bv) = (client_value?, benchmark_value?);
            let assessment = assess_kpi(kpi, cv, bv);
            Some(KpiRow {
                kpi: kpi.column(),
                name: kpi.definition().name,
                client_value: assessment.client_value,
                benchmark_value: assessment.benchmark_value,
                pct_difference: assessment.pct_difference,
                status: assessment.status.as_str(),
                color: assessment.status.color(),
                comparison: assessment.comparison.as_str(),
            })
        })
        .collect();

    let plan = segment_action_plan(client.segment);

    ClientReport {
        contract_no: client.contract_no.clone(),
        year: client.year.clone(),
        ivi_score: client.ivi_score,
        ivi_risk: client.ivi_risk.as_str(),
        segment: client.segment.as_str(),
        total_members: client.total_members,
        written_premium: client.written_premium,
        priority_score: client_priority_score(client),
        benchmark_cohort: cohort,
        assessments,
        recommendations: generate_recommendations(client, benchmark),
        action_plan: ActionPlan {
            priority: plan.priority.as_str(),
            actions: plan.actions,
            focus: plan.focus,
        },
    }
}

fn print_report(report: &ClientReport) {
    println!("Account Review: {} ({})", report.contract_no, report.year);
    println!("{}", "=".repeat(50));
    println!("  IVI Score: {:.0} ({})", report.ivi_score, report.ivi_risk);
    println!("  Segment: {}", report.segment);
    println!("  Members: {}", report.total_members);
    println!("  Premium: SAR {:.0}", report.written_premium);
    println!("  Priority Score: {:.2}", report.priority_score);
    println!("  Benchmark cohort: {}", report.benchmark_cohort);

    println!("\nKPI Assessment:");
    println!(
        "{:<28} {:>12} {:>12} {:>9} {:>10}",
        "KPI", "Client", "Benchmark", "Diff", "Status"
    );
    println!("{}", "-".repeat(75));
    for row in &report.assessments {
        println!(
            "{:<28} {:>12.2} {:>12.2} {:>8.0}% {:>10}",
            row.name, row.client_value, row.benchmark_value, row.pct_difference, row.status,
        );
    }

    println!("\nRecommendations ({}):", report.recommendations.len());
    for rec in &report.recommendations {
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

    println!("\nSegment Plan [{}]:", report.action_plan.priority);
    for action in report.action_plan.actions {
        println!("  - {action}");
    }
    println!("  Focus: {}", report.action_plan.focus);
}
