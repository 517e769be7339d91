use super::{Rule, Scope};
use crate::report::{Category, Finding};

/// Rule checking Java naming conventions on a single line
pub struct NamingConventionRule;

impl Rule for NamingConventionRule {
    fn id(&self) -> &'static str {
        "naming_convention"
    }

    fn name(&self) -> &'static str {
        "Naming Conventions"
    }

    fn scope(&self) -> Scope {
        Scope::Line
    }

    fn evaluate(&self, line: &str, line_number: usize) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut flag = |description: &str| {
            findings.push(Finding::new(line_number, Category::NamingConvention, description));
        };

        if regex!(r"package\s+[A-Z]").is_match(line) {
            flag("Package names should be lowercase");
        }

        if regex!(r"class\s+[a-z]").is_match(line) {
            flag("Class names should start with uppercase letter (PascalCase)");
        }

        if regex!(r"static\s+final\s+[a-z]").is_match(line) {
            flag("Constants should be in UPPER_CASE");
        }

        // Any "class" on the line, even in a comment, suppresses this one.
        if regex!(r"(?:private|protected|public).*?[A-Z][\w\s=;]").is_match(line)
            && !line.contains("class")
        {
            flag("Variable names should be in camelCase");
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(line: &str) -> Vec<String> {
        NamingConventionRule
            .evaluate(line, 1)
            .into_iter()
            .map(|f| f.description)
            .collect()
    }

    #[test]
    fn test_lowercase_class_name() {
        let findings = NamingConventionRule.evaluate("class widget {", 4);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, Category::NamingConvention);
        assert_eq!(findings[0].line, 4);
        assert!(findings[0].description.contains("PascalCase"));
    }

    #[test]
    fn test_pascal_case_class_is_clean() {
        assert!(descriptions("class Widget {").is_empty());
    }

    #[test]
    fn test_uppercase_package() {
        assert_eq!(
            descriptions("package Com.acme;"),
            vec!["Package names should be lowercase"]
        );
        assert!(descriptions("package com.acme;").is_empty());
    }

    #[test]
    fn test_lowercase_constant() {
        let found = descriptions("static final int maxSize = 3;");
        assert!(found.contains(&"Constants should be in UPPER_CASE".to_string()));
    }

    #[test]
    fn test_capitalized_field() {
        assert_eq!(
            descriptions("    private String Name;"),
            vec!["Variable names should be in camelCase"]
        );
    }

    #[test]
    fn test_class_keyword_suppresses_variable_check() {
        // "public class Foo" would otherwise match the variable pattern
        assert!(descriptions("public class Foo {").is_empty());
        assert!(descriptions("private String Name; // classic").is_empty());
    }

    #[test]
    fn test_multiple_findings_on_one_line() {
        let found = descriptions("public static final int maxValue = 1;");
        assert_eq!(
            found,
            vec![
                "Constants should be in UPPER_CASE",
                "Variable names should be in camelCase",
            ]
        );
    }

    #[test]
    fn test_plain_line_is_clean() {
        assert!(descriptions("int count = 0;").is_empty());
        assert!(descriptions("").is_empty());
    }
}
