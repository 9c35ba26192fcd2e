//! Score an entire portfolio and produce the attention list
//!
//! Loads the materialized score table, applies the standard filters, scores
//! every contract in parallel, writes attention_list.csv, and prints the
//! top contracts plus a portfolio summary.

use anyhow::Context;
use clap::Parser;
use ivi_system::client::{load_scores, ClientRecord, RiskTier};
use ivi_system::portfolio::{portfolio_summary, PortfolioFilter};
use ivi_system::ranking::{rank_scored, RankedClient};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(about = "Rank portfolio contracts by account-management priority")]
struct Args {
    /// Path to the score table CSV
    input: PathBuf,

    /// Restrict to one contract year
    #[arg(long)]
    year: Option<String>,

    /// Minimum member count (the model is trained on 5+ member contracts)
    #[arg(long, default_value_t = 5)]
    min_members: u32,

    /// Risk tiers to include (repeatable); all tiers when omitted
    #[arg(long = "risk", value_parser = parse_risk_tier)]
    risk_tiers: Vec<RiskTier>,

    /// Number of contracts to print
    #[arg(long, default_value_t = 20)]
    top: usize,

    /// Output CSV path
    #[arg(long, default_value = "attention_list.csv")]
    output: PathBuf,
}

fn parse_risk_tier(label: &str) -> Result<RiskTier, String> {
    RiskTier::from_label(label)
        .ok_or_else(|| format!("unknown risk tier '{label}' (expected HIGH_RISK, MODERATE_RISK, or LOW_RISK)"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading score table from {}...", args.input.display());

    let records = load_scores(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    println!("Loaded {} contract-years in {:?}", records.len(), start.elapsed());

    let filter = PortfolioFilter {
        year: args.year.clone(),
        min_members: args.min_members,
        risk_tiers: args.risk_tiers.clone(),
    };
    let filtered: Vec<ClientRecord> = records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect();
    println!("{} contracts after filters", filtered.len());

    // Score in parallel, then order into the attention list
    let score_start = Instant::now();
    let scored: Vec<RankedClient> = filtered
        .par_iter()
        .map(RankedClient::from_record)
        .collect();
    let ranked = rank_scored(scored);
    println!("Scored in {:?}", score_start.elapsed());

    // Write output
    let mut file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    writeln!(
        file,
        "CONTRACT_NO,YEAR,PRIORITY_SCORE,IVI_SCORE,IVI_RISK,SEGMENT,TOTAL_MEMBERS,WRITTEN_PREMIUM,LOSS_RATIO"
    )?;

    for row in &ranked {
        writeln!(
            file,
            "{},{},{:.2},{:.1},{},{},{},{:.2},{}",
            row.contract_no,
            row.year,
            row.priority_score,
            row.ivi_score,
            row.ivi_risk.as_str(),
            row.segment.as_str(),
            row.total_members,
            row.written_premium,
            row.loss_ratio.map_or(String::new(), |lr| format!("{lr:.4}")),
        )?;
    }

    println!("Attention list written to {}", args.output.display());

    // Top contracts table
    println!("\nTop {} contracts by priority:", args.top.min(ranked.len()));
    println!(
        "{:>4} {:<12} {:>8} {:>6} {:>9} {:>14} {:<34}",
        "#", "Contract", "Score", "IVI", "Members", "Premium", "Segment"
    );
    println!("{}", "-".repeat(95));
    for (i, row) in ranked.iter().take(args.top).enumerate() {
        println!(
            "{:>4} {:<12} {:>8.2} {:>6.1} {:>9} {:>14.0} {:<34}",
            i + 1,
            row.contract_no,
            row.priority_score,
            row.ivi_score,
            row.total_members,
            row.written_premium,
            row.segment.as_str(),
        );
    }

    // Portfolio summary
    let summary = portfolio_summary(&filtered);
    println!("\nPortfolio Summary:");
    println!("  Contracts: {}", summary.total_contracts);
    println!("  Members: {}", summary.total_members);
    println!("  Premium: SAR {:.0}", summary.total_premium);
    if let Some(avg) = summary.avg_ivi_score {
        println!("  Avg IVI: {avg:.1}");
    }
    if let Some(median) = summary.median_ivi_score {
        println!("  Median IVI: {median:.1}");
    }
    println!(
        "  Risk mix: {} high / {} moderate / {} low",
        summary.high_risk_count, summary.moderate_risk_count, summary.low_risk_count
    );
    let unprofitable = filtered.iter().filter(|r| r.is_unprofitable()).count();
    println!("  Unprofitable contracts: {unprofitable}");
    if let Some(retention) = summary.retention_rate {
        println!("  Observed retention: {:.1}%", retention * 100.0);
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
