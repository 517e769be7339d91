use super::types::*;
use crate::rules::RuleRegistry;
use std::collections::BTreeMap;

/// Builder for constructing review reports
pub struct ReportBuilder {
    target: Target,
    findings: Vec<Finding>,
    suggestions: String,
}

impl ReportBuilder {
    /// Create a new report builder
    pub fn new(target: Target) -> Self {
        Self {
            target,
            findings: Vec::new(),
            suggestions: String::new(),
        }
    }

    /// Run rules over the source text and collect findings
    pub fn run_rules(&mut self, registry: &RuleRegistry, source: &str) -> &mut Self {
        self.findings.extend(registry.analyze(source));
        self
    }

    /// Attach suggestion text, kept verbatim
    pub fn with_suggestions(&mut self, suggestions: impl Into<String>) -> &mut Self {
        self.suggestions = suggestions.into();
        self
    }

    /// Build the final report
    pub fn build(self) -> Report {
        let mut report = Report::new(self.target);

        let mut by_category = BTreeMap::new();
        for finding in &self.findings {
            *by_category.entry(finding.category).or_insert(0) += 1;
        }

        report.summary = Summary {
            findings_count: self.findings.len(),
            by_category,
        };
        report.findings = self.findings;
        report.suggestions = self.suggestions;

        report
    }
}
