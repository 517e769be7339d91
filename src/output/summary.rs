use crate::report::Report;
use crate::suggestions::FAILURE_PREFIX;

/// Print human-readable summary to stdout
pub fn print_summary(report: &Report, output_path: &str) {
    println!();
    println!("File: {}", report.target.path);

    if report.findings.is_empty() {
        println!("Status: ✅ no issues found");
    } else {
        println!("Status: ⚠️  {} issue(s) found", report.summary.findings_count);
        for (category, count) in &report.summary.by_category {
            println!("  {:<22} {}", category, count);
        }
    }

    if report.suggestions.starts_with(FAILURE_PREFIX) {
        println!("AI suggestions: unavailable ({})", truncate(&report.suggestions, 80));
    }

    println!("Report generated: {}", output_path);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}

/// Format summary as string (for testing)
pub fn format_summary(report: &Report) -> String {
    let mut output = String::new();

    output.push_str(&format!("File: {}\n", report.target.path));
    output.push_str(&format!("Findings: {}\n", report.summary.findings_count));

    for (category, count) in &report.summary.by_category {
        output.push_str(&format!("[{}] {}\n", category, count));
    }

    output
}
