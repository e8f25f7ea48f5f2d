//! Run a chain-ladder reserve analysis for a triangle CSV
//!
//! Outputs per-origin ultimates and IBNR for comparison with the pricing
//! spreadsheet, and optionally a standalone Bornhuetter-Ferguson estimate.

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use reserving_system::reserves::bornhuetter_ferguson;
use reserving_system::run_chain_ladder;
use reserving_system::triangle::load_triangle;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "Chain-ladder reserve analysis over a claims triangle CSV")]
struct Args {
    /// Triangle CSV: one origin period per row, blank fields unobserved
    triangle: PathBuf,

    /// Evaluation date stamped on the report (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Write per-origin results to this CSV path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Reported loss for a standalone BF estimate
    #[arg(long)]
    bf_reported: Option<f64>,

    /// Earned premium for the BF estimate
    #[arg(long)]
    bf_premium: Option<f64>,

    /// Expected loss ratio for the BF estimate
    #[arg(long)]
    bf_elr: Option<f64>,

    /// Cumulative LDF to ultimate for the BF estimate
    #[arg(long)]
    bf_ldf: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading triangle from {}...", args.triangle.display());

    let triangle = load_triangle(&args.triangle)
        .map_err(|e| anyhow::anyhow!("loading {}: {}", args.triangle.display(), e))?;
    println!(
        "Loaded {} origin periods x {} development ages in {:?}",
        triangle.rows(),
        triangle.cols(),
        start.elapsed()
    );

    let report = run_chain_ladder(&triangle, args.as_of).context("chain-ladder run")?;

    println!("\nAverage development factors:");
    for (age, factor) in report.factors.iter().enumerate() {
        println!("  Age {} -> {}: {:.6}", age, age + 1, factor);
    }

    println!("\n{:>6} {:>10} {:>14} {:>14} {:>14}", "Origin", "LatestAge", "Reported", "Ultimate", "IBNR");
    println!("{}", "-".repeat(62));
    for origin in &report.origins {
        println!(
            "{:>6} {:>10} {:>14.2} {:>14.2} {:>14.2}",
            origin.origin, origin.latest_age, origin.reported, origin.ultimate, origin.ibnr
        );
    }

    println!("\nSummary:");
    if let Some(as_of) = report.as_of {
        println!("  As Of:          {}", as_of);
    }
    println!("  Total Reported: {:.2}", report.total_reported);
    println!("  Total Ultimate: {:.2}", report.total_ultimate);
    println!("  Total IBNR:     {:.2}", report.total_ibnr);

    if let Some(path) = &args.output {
        let mut file = File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        writeln!(file, "Origin,LatestAge,Reported,Ultimate,IBNR")?;
        for origin in &report.origins {
            writeln!(
                file,
                "{},{},{:.8},{:.8},{:.8}",
                origin.origin, origin.latest_age, origin.reported, origin.ultimate, origin.ibnr
            )?;
        }
        println!("\nPer-origin results written to: {}", path.display());
    }

    // Standalone BF estimate when all four inputs are supplied
    if let (Some(reported), Some(premium), Some(elr), Some(ldf)) =
        (args.bf_reported, args.bf_premium, args.bf_elr, args.bf_ldf)
    {
        let bf = bornhuetter_ferguson(reported, premium, elr, ldf, None)
            .context("Bornhuetter-Ferguson estimate")?;
        println!("\nBornhuetter-Ferguson:");
        println!("  Expected Loss: {:.2}", bf.expected_loss);
        println!("  BF Estimate:   {:.2}", bf.estimate);
    }

    println!("\nCompleted in {:?}", start.elapsed());
    Ok(())
}
