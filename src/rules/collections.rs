use super::Rule;
use crate::report::{Category, Finding};
use regex::Regex;
use std::sync::OnceLock;

/// Concrete collection types that should be declared through an interface
const CONCRETE_COLLECTIONS: [&str; 4] = ["ArrayList", "LinkedList", "HashSet", "HashMap"];

/// `(type, "new <type>", "<type>\s*<")` per concrete collection
fn concrete_patterns() -> &'static [(&'static str, String, Regex)] {
    static PATTERNS: OnceLock<Vec<(&'static str, String, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        CONCRETE_COLLECTIONS
            .iter()
            .map(|name| {
                let generic = Regex::new(&format!(r"{}\s*<", name))
                    .expect("invalid built-in pattern");
                (*name, format!("new {}", name), generic)
            })
            .collect()
    })
}

/// Rule checking the choice of data structures
pub struct DataStructureRule;

impl Rule for DataStructureRule {
    fn id(&self) -> &'static str {
        "data_structures"
    }

    fn name(&self) -> &'static str {
        "Data Structures"
    }

    fn evaluate(&self, window: &str, line: usize) -> Vec<Finding> {
        let mut findings = Vec::new();

        if window.contains("Vector") {
            findings.push(Finding::new(
                line,
                Category::DataStructures,
                "Consider using ArrayList with Collections.synchronizedList instead of Vector",
            ));
        }

        for (name, construction, generic) in concrete_patterns() {
            if window.contains(construction.as_str()) && !generic.is_match(window) {
                findings.push(Finding::new(
                    line,
                    Category::DataStructures,
                    format!("Use interface type instead of concrete {} implementation", name),
                ));
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(window: &str) -> Vec<String> {
        DataStructureRule
            .evaluate(window, 1)
            .into_iter()
            .map(|f| f.description)
            .collect()
    }

    #[test]
    fn test_vector_flagged_once() {
        let found = descriptions("Vector v = new Vector();\nVector w = new Vector();");
        let vector_count = found.iter().filter(|d| d.contains("Vector")).count();
        assert_eq!(vector_count, 1);
    }

    #[test]
    fn test_raw_concrete_collection() {
        assert_eq!(
            descriptions("List items = new ArrayList();"),
            vec!["Use interface type instead of concrete ArrayList implementation"]
        );
    }

    #[test]
    fn test_generic_concrete_collection_is_clean() {
        assert!(descriptions("List<String> items = new ArrayList<>();").is_empty());
        assert!(
            descriptions("Map<String, Integer> m = new HashMap <String, Integer>();").is_empty()
        );
    }

    #[test]
    fn test_multiple_concrete_collections() {
        let found = descriptions("Set s = new HashSet();\nMap m = new HashMap();");
        assert_eq!(
            found,
            vec![
                "Use interface type instead of concrete HashSet implementation",
                "Use interface type instead of concrete HashMap implementation",
            ]
        );
    }

    #[test]
    fn test_vector_and_concrete_together() {
        let found = descriptions("Vector v = new Vector();\nList l = new LinkedList();");
        assert_eq!(found.len(), 2);
        assert!(found[0].contains("Vector"));
        assert!(found[1].contains("LinkedList"));
    }

    #[test]
    fn test_clean_window() {
        assert!(descriptions("int x = 1;").is_empty());
    }
}
