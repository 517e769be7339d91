//! Heuristic review of Java sources.
//!
//! [`rules::RuleRegistry::analyze`] runs the built-in rules over a file's
//! text; [`pipeline`] wires it to the GitHub fetcher, the suggestion client
//! and the report writers.

pub mod cli;
pub mod config;
pub mod github;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod suggestions;
