use super::Rule;
use crate::report::{Category, Finding};

/// Rule suggesting Stream API refactors for filtering loops
pub struct StreamsRule;

impl Rule for StreamsRule {
    fn id(&self) -> &'static str {
        "streams_and_lambdas"
    }

    fn name(&self) -> &'static str {
        "Streams and Lambdas"
    }

    fn evaluate(&self, window: &str, line: usize) -> Vec<Finding> {
        let has_loop = regex!(r"for\s*\([^)]+\)").is_match(window);
        // The conditional may span lines within the window
        let filters = regex!(r"(?s)if.*?add|if.*?collect|if.*?filter");

        if has_loop && filters.is_match(window) {
            vec![Finding::new(
                line,
                Category::StreamsAndLambdas,
                "Consider using Stream API with filter() instead of traditional for loop",
            )]
        } else {
            vec![]
        }
    }
}
