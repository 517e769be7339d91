use super::Rule;
use crate::report::{Category, Finding};
use regex::Regex;

/// Rule flagging interfaces implemented by a single nearby class
///
/// Only sees the declaration and its implementation when both fall inside
/// the same window.
pub struct InterfaceDesignRule;

impl InterfaceDesignRule {
    fn declared_interface(window: &str) -> Option<&str> {
        regex!(r"interface\s+(\w+)")
            .captures(window)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn has_implementation(window: &str, interface: &str) -> bool {
        let pattern = format!(
            r"class\s+\w+\s+implements\s+{}\s*\{{",
            regex::escape(interface)
        );
        Regex::new(&pattern).map_or(false, |re| re.is_match(window))
    }
}

impl Rule for InterfaceDesignRule {
    fn id(&self) -> &'static str {
        "interface_design"
    }

    fn name(&self) -> &'static str {
        "Interface Design"
    }

    fn evaluate(&self, window: &str, line: usize) -> Vec<Finding> {
        if !window.contains("interface") {
            return vec![];
        }

        match Self::declared_interface(window) {
            Some(name) if Self::has_implementation(window, name) => vec![Finding::new(
                line,
                Category::InterfaceDesign,
                "Verify if this interface is necessary or could be simplified",
            )],
            _ => vec![],
        }
    }
}
