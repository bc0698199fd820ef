//! Statistics reporting.

use console::style;

use crate::download::RunSummary;

/// Print the outcome tallies of a download run.
pub fn print_run_summary(summary: &RunSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Download Statistics:").bold());
    println!("  Queued:     {}", summary.queued);
    println!("  Downloaded: {}", style(summary.downloaded).green());
    println!("  Existing:   {} (skipped)", summary.skipped_existing);
    println!("  Duplicates: {} (skipped)", summary.duplicates);
    println!("  Invalid:    {} (skipped)", summary.skipped_invalid);
    if summary.failed > 0 {
        println!("  Failed:     {}", style(summary.failed).red());
    }
    println!("{}", style("═".repeat(50)).dim());
}
