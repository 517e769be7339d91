use crate::report::{Finding, Report};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

/// Render findings and suggestion text as a Markdown document.
///
/// Findings keep their order; the suggestion text is appended verbatim.
pub fn render_markdown(findings: &[Finding], suggestions: &str) -> String {
    let mut output = String::new();

    output.push_str("# Code Review Report\n\n");

    output.push_str("## Issues Found\n\n");
    for finding in findings {
        let _ = writeln!(
            output,
            "- Line {}: {} (Type: {})",
            finding.line, finding.description, finding.category
        );
    }

    output.push_str("\n## AI Suggestions\n\n");
    output.push_str(suggestions);

    output
}

/// Write report to Markdown file
pub fn write_markdown(report: &Report, path: &Path) -> Result<()> {
    let markdown = render_markdown(&report.findings, &report.suggestions);

    std::fs::write(path, markdown)
        .with_context(|| format!("Failed to write report to {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Category, Target};
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    #[test]
    fn test_render_layout() {
        let findings = vec![
            Finding::new(
                1,
                Category::NamingConvention,
                "Class names should start with uppercase letter (PascalCase)",
            ),
            Finding::new(
                3,
                Category::NullHandling,
                "Consider using Optional instead of returning null",
            ),
        ];

        let rendered = render_markdown(&findings, "Prefer records.");

        assert_eq!(
            rendered,
            "# Code Review Report\n\n\
             ## Issues Found\n\n\
             - Line 1: Class names should start with uppercase letter (PascalCase) (Type: naming_convention)\n\
             - Line 3: Consider using Optional instead of returning null (Type: null_handling)\n\
             \n## AI Suggestions\n\n\
             Prefer records."
        );
    }

    #[test]
    fn test_render_no_findings() {
        let rendered = render_markdown(&[], "");
        assert_eq!(
            rendered,
            "# Code Review Report\n\n## Issues Found\n\n\n## AI Suggestions\n\n"
        );
    }

    #[test]
    fn test_render_keeps_duplicates_and_order() {
        let finding = Finding::new(
            2,
            Category::AccessModifiers,
            "Consider using more restrictive access modifier",
        );
        let later = Finding::new(
            1,
            Category::DataStructures,
            "Use interface type instead of concrete HashMap implementation",
        );
        let rendered = render_markdown(&[finding.clone(), finding, later], "");

        let bullets: Vec<&str> = rendered.lines().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(bullets.len(), 3);
        assert!(bullets[0].starts_with("- Line 2"));
        assert!(bullets[2].starts_with("- Line 1"));
    }

    #[test]
    fn test_write_markdown_creates_file() {
        let mut report = Report::new(Target {
            repository: "local".to_string(),
            path: "A.java".to_string(),
        });
        report.suggestions = "AI Review failed: timeout".to_string();
        let temp = NamedTempFile::new().unwrap();

        write_markdown(&report, temp.path()).unwrap();

        let content = std::fs::read_to_string(temp.path()).unwrap();
        assert!(content.starts_with("# Code Review Report"));
        assert!(content.ends_with("## AI Suggestions\n\nAI Review failed: timeout"));
    }

    #[test]
    fn test_write_markdown_missing_directory_fails() {
        let report = Report::new(Target {
            repository: "local".to_string(),
            path: "A.java".to_string(),
        });
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.md");

        let err = write_markdown(&report, &path).unwrap_err();
        assert!(err.to_string().contains("Failed to write report"));
    }
}
