//! Terminal output formatting.

use colored::Colorize;
use gia_core::IssueRequest;

/// Print an analysis under a header naming the issue.
pub fn print_analysis(request: &IssueRequest, analysis: &str) {
    println!();
    println!(
        "{} {}",
        issue_ref(request).cyan().bold(),
        "analysis".dimmed()
    );
    println!("{}", "─".repeat(60));
    println!("{}", analysis.trim_end());
    println!();
}

/// `owner/repo#number`
fn issue_ref(request: &IssueRequest) -> String {
    format!("{}/{}#{}", request.owner, request.repo, request.issue_number)
}
