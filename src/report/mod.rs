mod builder;
mod types;

pub use builder::ReportBuilder;
pub use types::{Category, Finding, Report, Summary, Target};
