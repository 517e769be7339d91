use super::Rule;
use crate::report::{Category, Finding};

/// Rule checking that equals overrides come with hashCode
pub struct EqualsHashCodeRule;

impl Rule for EqualsHashCodeRule {
    fn id(&self) -> &'static str {
        "equals_hashcode"
    }

    fn name(&self) -> &'static str {
        "Equals and HashCode"
    }

    fn evaluate(&self, window: &str, line: usize) -> Vec<Finding> {
        if window.contains("@Override") && window.contains("equals") && !window.contains("hashCode")
        {
            vec![Finding::new(
                line,
                Category::EqualsHashcode,
                "Override hashCode method when overriding equals",
            )]
        } else {
            vec![]
        }
    }
}
