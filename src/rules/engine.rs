use super::context::{split_lines, LineContext, Scope};
use super::{
    AccessModifierRule, DataStructureRule, EqualsHashCodeRule, ExceptionHandlingRule,
    InterfaceDesignRule, NamingConventionRule, NullHandlingRule, ReferenceHandlingRule,
    StreamsRule,
};
use crate::report::Finding;

/// Trait for implementing review rules
pub trait Rule: Send + Sync {
    /// Unique identifier for the rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Text the rule inspects
    fn scope(&self) -> Scope {
        Scope::Window
    }

    /// Evaluate the rule against `text`, anchoring findings at `line`
    fn evaluate(&self, text: &str, line: usize) -> Vec<Finding>;
}

/// Registry for managing and running rules
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty rule registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in rules in their fixed evaluation order
    pub fn with_default_rules() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(NamingConventionRule));
        registry.register(Box::new(StreamsRule));
        registry.register(Box::new(NullHandlingRule));
        registry.register(Box::new(ReferenceHandlingRule));
        registry.register(Box::new(ExceptionHandlingRule));
        registry.register(Box::new(DataStructureRule));
        registry.register(Box::new(AccessModifierRule));
        registry.register(Box::new(InterfaceDesignRule));
        registry.register(Box::new(EqualsHashCodeRule));
        registry
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Evaluate all rules against one line context
    pub fn evaluate_all(&self, ctx: &LineContext<'_>) -> Vec<Finding> {
        self.rules
            .iter()
            .flat_map(|rule| rule.evaluate(ctx.text(rule.scope()), ctx.line_number))
            .collect()
    }

    /// Analyze a whole source file.
    ///
    /// Findings come out in line order, and within a line in
    /// registration order. Nothing is deduplicated.
    pub fn analyze(&self, source: &str) -> Vec<Finding> {
        let lines = split_lines(source);

        (1..=lines.len())
            .flat_map(|line_number| {
                let ctx = LineContext::new(&lines, line_number);
                self.evaluate_all(&ctx)
            })
            .collect()
    }

    /// Get the number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Get list of registered rule IDs
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Get `(id, name)` pairs in evaluation order
    pub fn describe(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Category;

    // Mock rule for testing
    struct MockRule {
        should_trigger: bool,
        scope: Scope,
    }

    impl Rule for MockRule {
        fn id(&self) -> &'static str {
            "mock_rule"
        }

        fn name(&self) -> &'static str {
            "Mock Rule"
        }

        fn scope(&self) -> Scope {
            self.scope
        }

        fn evaluate(&self, text: &str, line: usize) -> Vec<Finding> {
            if self.should_trigger {
                vec![Finding::new(line, Category::NamingConvention, text)]
            } else {
                vec![]
            }
        }
    }

    fn mock(should_trigger: bool) -> Box<dyn Rule> {
        Box::new(MockRule {
            should_trigger,
            scope: Scope::Window,
        })
    }

    #[test]
    fn test_registry_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = RuleRegistry::new();
        registry.register(mock(false));

        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_evaluate_no_trigger() {
        let mut registry = RuleRegistry::new();
        registry.register(mock(false));

        assert!(registry.analyze("class A {}").is_empty());
    }

    #[test]
    fn test_registry_evaluate_trigger_per_line() {
        let mut registry = RuleRegistry::new();
        registry.register(mock(true));

        let findings = registry.analyze("a\nb\nc");
        let lines: Vec<usize> = findings.iter().map(|f| f.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_registry_multiple_rules() {
        let mut registry = RuleRegistry::new();
        registry.register(mock(true));
        registry.register(mock(true));

        assert_eq!(registry.analyze("x").len(), 2);
    }

    #[test]
    fn test_scope_controls_visible_text() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            should_trigger: true,
            scope: Scope::Line,
        }));
        registry.register(Box::new(MockRule {
            should_trigger: true,
            scope: Scope::Window,
        }));

        let findings = registry.analyze("a\nb");
        assert_eq!(findings[0].description, "a");
        assert_eq!(findings[1].description, "a\nb");
    }

    #[test]
    fn test_analyze_empty_source() {
        let registry = RuleRegistry::with_default_rules();
        assert!(registry.analyze("").is_empty());
    }

    #[test]
    fn test_default_rule_order() {
        let registry = RuleRegistry::with_default_rules();
        assert_eq!(
            registry.rule_ids(),
            vec![
                "naming_convention",
                "streams_and_lambdas",
                "null_handling",
                "reference_handling",
                "exception_handling",
                "data_structures",
                "access_modifiers",
                "interface_design",
                "equals_hashcode",
            ]
        );
    }

    #[test]
    fn test_describe_pairs_ids_with_names() {
        let registry = RuleRegistry::with_default_rules();
        let described = registry.describe();
        assert_eq!(described.len(), 9);
        assert_eq!(described[0], ("naming_convention", "Naming Conventions"));
    }
}
