use super::Rule;
use crate::report::{Category, Finding};

const NULLABILITY_ANNOTATIONS: [&str; 2] = ["@Nullable", "@NonNull"];

/// Rule checking null handling practices
///
/// Three independent checks, so one window can yield up to three findings.
pub struct NullHandlingRule;

impl Rule for NullHandlingRule {
    fn id(&self) -> &'static str {
        "null_handling"
    }

    fn name(&self) -> &'static str {
        "Null Handling"
    }

    fn evaluate(&self, window: &str, line: usize) -> Vec<Finding> {
        let mut findings = Vec::new();

        if window.contains("return null") {
            findings.push(Finding::new(
                line,
                Category::NullHandling,
                "Consider using Optional instead of returning null",
            ));
        }

        let compares_null = window.contains("!= null") || window.contains("== null");
        if compares_null && !window.contains("Optional") {
            findings.push(Finding::new(
                line,
                Category::NullHandling,
                "Consider using Optional for null checking",
            ));
        }

        let annotated = NULLABILITY_ANNOTATIONS.iter().any(|a| window.contains(a));
        if window.contains("null") && !annotated {
            findings.push(Finding::new(
                line,
                Category::NullHandling,
                "Consider adding @Nullable or @NonNull annotations",
            ));
        }

        findings
    }
}
