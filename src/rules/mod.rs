/// Compile a built-in pattern once and reuse it.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).expect("invalid built-in pattern"))
    }};
}

mod access;
mod collections;
mod context;
mod engine;
mod equals;
mod exceptions;
mod interfaces;
mod naming;
mod nulls;
mod references;
mod streams;

pub use access::AccessModifierRule;
pub use collections::DataStructureRule;
pub use context::{split_lines, LineContext, Scope};
pub use engine::{Rule, RuleRegistry};
pub use equals::EqualsHashCodeRule;
pub use exceptions::ExceptionHandlingRule;
pub use interfaces::InterfaceDesignRule;
pub use naming::NamingConventionRule;
pub use nulls::NullHandlingRule;
pub use references::ReferenceHandlingRule;
pub use streams::StreamsRule;
