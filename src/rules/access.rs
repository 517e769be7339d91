use super::Rule;
use crate::report::{Category, Finding};

/// Markers that make a public method signature expected
const EXEMPTIONS: [&str; 4] = ["@Override", "@Test", "interface", "abstract"];

/// Rule flagging public methods that could be less visible
pub struct AccessModifierRule;

impl Rule for AccessModifierRule {
    fn id(&self) -> &'static str {
        "access_modifiers"
    }

    fn name(&self) -> &'static str {
        "Access Modifiers"
    }

    fn evaluate(&self, window: &str, line: usize) -> Vec<Finding> {
        let public_method = regex!(r"public\s+\w+\s+\w+\s*\([^)]*\)").is_match(window);
        let exempt = EXEMPTIONS.iter().any(|marker| window.contains(marker));

        if public_method && !exempt {
            vec![Finding::new(
                line,
                Category::AccessModifiers,
                "Consider using more restrictive access modifier",
            )]
        } else {
            vec![]
        }
    }
}
