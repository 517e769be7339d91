use crate::config::ReviewConfig;
use crate::github::{RepoRef, SourceFetcher, SourceFile};
use crate::output::{print_summary, report_file_name, OutputFormat};
use crate::report::{Report, ReportBuilder, Target};
use crate::rules::RuleRegistry;
use crate::suggestions::SuggestionProvider;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Analyze one file and attach suggestions for it
pub async fn review_source<S: SuggestionProvider>(
    registry: &RuleRegistry,
    suggester: &S,
    target: Target,
    source: &str,
) -> Report {
    let mut builder = ReportBuilder::new(target);
    builder.run_rules(registry, source);

    println!("Getting AI suggestions...");
    let suggestion = suggester.review(source).await;
    builder.with_suggestions(suggestion.into_text());

    builder.build()
}

/// Write a report and print its summary
pub fn emit_report(report: &Report, format: OutputFormat, path: &Path) -> Result<()> {
    format.write(report, path)?;
    print_summary(report, &path.display().to_string());
    Ok(())
}

/// Review every source file of the configured repository.
///
/// Files are handled one at a time. A fetch failure aborts the run before
/// any report is written; suggestion failures only show up in the reports.
pub async fn review_repository<F, S>(
    config: &ReviewConfig,
    fetcher: &F,
    suggester: &S,
) -> Result<Vec<PathBuf>>
where
    F: SourceFetcher,
    S: SuggestionProvider,
{
    let repo = RepoRef::parse(&config.repository)?;

    println!("Fetching Java files...");
    let files = fetcher
        .fetch_sources(&repo)
        .await
        .with_context(|| format!("Failed to fetch sources from {}", repo))?;
    info!(repository = %repo, files = files.len(), "Fetched sources");

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("Failed to create output directory {:?}", config.output_dir)
    })?;

    let registry = RuleRegistry::with_default_rules();
    let mut written = Vec::with_capacity(files.len());

    for SourceFile { path, content } in files {
        println!("\nAnalyzing {}...", path);

        let target = Target {
            repository: repo.to_string(),
            path: path.clone(),
        };
        let report = review_source(&registry, suggester, target, &content).await;
        info!(path = %path, findings = report.findings.len(), "Analyzed file");

        let output = config
            .output_dir
            .join(report_file_name(&path, config.format));
        emit_report(&report, config.format, &output)?;
        written.push(output);
    }

    Ok(written)
}
