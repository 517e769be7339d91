use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Review report for a single source file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub report_version: String,
    pub report_id: String,
    pub generated_at: String,
    pub target: Target,
    pub summary: Summary,
    pub findings: Vec<Finding>,
    pub suggestions: String,
}

impl Report {
    pub fn new(target: Target) -> Self {
        Self {
            report_version: "1.0.0".to_string(),
            report_id: uuid::Uuid::new_v4().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            target,
            summary: Summary::default(),
            findings: Vec::new(),
            suggestions: String::new(),
        }
    }
}

/// Reviewed file (repository locator and path within it)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Target {
    pub repository: String,
    pub path: String,
}

/// Finding totals
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub findings_count: usize,
    pub by_category: BTreeMap<Category, usize>,
}

/// Finding from rule evaluation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    /// 1-based anchor line of the inspected line or window
    pub line: usize,
    pub category: Category,
    pub description: String,
}

impl Finding {
    pub fn new(line: usize, category: Category, description: impl Into<String>) -> Self {
        Self {
            line,
            category,
            description: description.into(),
        }
    }
}

/// Finding category, one per rule family
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NamingConvention,
    StreamsAndLambdas,
    NullHandling,
    ReferenceHandling,
    ExceptionHandling,
    DataStructures,
    AccessModifiers,
    InterfaceDesign,
    EqualsHashcode,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::NamingConvention => "naming_convention",
            Category::StreamsAndLambdas => "streams_and_lambdas",
            Category::NullHandling => "null_handling",
            Category::ReferenceHandling => "reference_handling",
            Category::ExceptionHandling => "exception_handling",
            Category::DataStructures => "data_structures",
            Category::AccessModifiers => "access_modifiers",
            Category::InterfaceDesign => "interface_design",
            Category::EqualsHashcode => "equals_hashcode",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
