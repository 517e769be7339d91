use super::Rule;
use crate::report::{Category, Finding};

/// Rule checking reference handling and mutable state exposure
pub struct ReferenceHandlingRule;

impl ReferenceHandlingRule {
    /// `this.field = param;` with no copy being made nearby
    fn assigns_collection_reference(window: &str) -> bool {
        regex!(r"this\.[a-zA-Z]+\s*=\s*[a-zA-Z]+\s*;").is_match(window)
            && !window.contains("new")
            && regex!(r"List|Set|Map|Collection").is_match(window)
    }

    /// Public accessor whose signature mentions a collection type
    fn exposes_collection(window: &str) -> bool {
        regex!(r"public.*?get.*?List|public.*?get.*?Set|public.*?get.*?Map").is_match(window)
            || regex!(
                r"public\s+(?:(?:static|final|synchronized)\s+)*[\w.]*(?:List|Set|Map|Collection)\b(?:<.*>)?\s+get\w*\s*\("
            )
            .is_match(window)
    }
}

impl Rule for ReferenceHandlingRule {
    fn id(&self) -> &'static str {
        "reference_handling"
    }

    fn name(&self) -> &'static str {
        "Reference Handling"
    }

    fn evaluate(&self, window: &str, line: usize) -> Vec<Finding> {
        let mut findings = Vec::new();

        if Self::assigns_collection_reference(window) {
            findings.push(Finding::new(
                line,
                Category::ReferenceHandling,
                "Create defensive copy when assigning collection references",
            ));
        }

        if Self::exposes_collection(window) {
            findings.push(Finding::new(
                line,
                Category::ReferenceHandling,
                "Avoid exposing internal mutable state, return defensive copy",
            ));
        }

        findings
    }
}
