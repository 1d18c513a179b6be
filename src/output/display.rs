//! Display functions for command results

use super::formatters::{create_progress_bar, format_result};
use crate::commands::{BatchResult, BatchSummary};
use colored::Colorize;

/// Print one result line per round, in input order
pub fn print_batch_result(result: &BatchResult) {
    for outcome in &result.outcomes {
        println!("{}", format_result(outcome.score()));
    }
}

/// Print the aggregate counts of a batch run
pub fn print_batch_summary(summary: &BatchSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let bar = create_progress_bar(summary.scored, summary.total, 30);

    println!("\n   Rounds:      {}", summary.total);
    println!(
        "   Scored:      [{}] {}",
        bar.green(),
        summary.scored.to_string().bright_yellow()
    );
    if summary.rejected > 0 {
        println!(
            "   Rejected:    {}",
            summary.rejected.to_string().red().bold()
        );
    } else {
        println!("   Rejected:    {}", "0".green());
    }
    println!("   Solved:      {}", summary.solved);
    println!("   Time taken:  {:.3}s", summary.duration.as_secs_f64());
}

/// Print the hint shown when the arguments cannot be understood
pub fn print_usage_hint() {
    println!(
        "{}",
        "Please use only integers between 1 and 9 (both inclusive), as in 2,5,4,4,9,3."
            .yellow()
    );
}
