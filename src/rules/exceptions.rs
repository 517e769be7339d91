use super::Rule;
use crate::report::{Category, Finding};

const GENERAL_CATCH: &str = "catch (Exception";
/// Lines scanned after a general catch for a more specific one
const ORDER_LOOKAHEAD_LINES: usize = 5;

/// Rule checking exception handling practices
pub struct ExceptionHandlingRule;

impl ExceptionHandlingRule {
    /// A specific catch following `catch (Exception` within the lookahead.
    ///
    /// Only the first general catch in the window is considered.
    fn general_before_specific(window: &str) -> bool {
        let Some(start) = window.find(GENERAL_CATCH) else {
            return false;
        };

        let following: Vec<&str> = window[start..]
            .split('\n')
            .take(ORDER_LOOKAHEAD_LINES)
            .collect();

        regex!(r"catch \([A-Za-z]+Exception").is_match(&following.join("\n"))
    }
}

impl Rule for ExceptionHandlingRule {
    fn id(&self) -> &'static str {
        "exception_handling"
    }

    fn name(&self) -> &'static str {
        "Exception Handling"
    }

    fn evaluate(&self, window: &str, line: usize) -> Vec<Finding> {
        let mut findings = Vec::new();

        if Self::general_before_specific(window) {
            findings.push(Finding::new(
                line,
                Category::ExceptionHandling,
                "Catch more specific exceptions before general Exception",
            ));
        }

        if regex!(r"(?s)catch.*?\{\s*\}").is_match(window) {
            findings.push(Finding::new(
                line,
                Category::ExceptionHandling,
                "Avoid empty catch blocks",
            ));
        }

        findings
    }
}
