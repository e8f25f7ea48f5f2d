//! Reserving System CLI
//!
//! Demonstration run over a small claims triangle

use reserving_system::{bornhuetter_ferguson, run_chain_ladder, Triangle};

fn main() {
    env_logger::init();

    println!("Reserving System v0.1.0");
    println!("=======================\n");

    // Three accident years observed through the current diagonal
    let triangle = Triangle::new(vec![
        vec![Some(100.0), Some(120.0), Some(130.0)],
        vec![Some(110.0), Some(140.0), None],
        vec![Some(120.0), None, None],
    ])
    .expect("triangle construction");

    println!("Triangle: {} origin periods x {} development ages\n", triangle.rows(), triangle.cols());

    let report = run_chain_ladder(&triangle, None).expect("chain-ladder run");

    println!("Average development factors:");
    for (age, factor) in report.factors.iter().enumerate() {
        println!("  Age {} -> {}: {:.6}", age, age + 1, factor);
    }
    println!();

    println!("{:>6} {:>10} {:>12} {:>12} {:>12}", "Origin", "LatestAge", "Reported", "Ultimate", "IBNR");
    println!("{}", "-".repeat(56));
    for origin in &report.origins {
        println!(
            "{:>6} {:>10} {:>12.2} {:>12.2} {:>12.2}",
            origin.origin, origin.latest_age, origin.reported, origin.ultimate, origin.ibnr
        );
    }

    println!("\nSummary:");
    println!("  Total Reported: {:.2}", report.total_reported);
    println!("  Total Ultimate: {:.2}", report.total_ultimate);
    println!("  Total IBNR:     {:.2}", report.total_ibnr);

    // Bornhuetter-Ferguson alternative for an immature year
    let bf = bornhuetter_ferguson(100.0, 1000.0, 0.6, 2.0, None).expect("BF estimate");
    println!("\nBornhuetter-Ferguson (RL=100, premium=1000, ELR=0.60, LDF=2.0):");
    println!("  Expected Loss: {:.2}", bf.expected_loss);
    println!("  BF Estimate:   {:.2}", bf.estimate);
}
