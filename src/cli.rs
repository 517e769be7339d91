use crate::config::{GitHubConfig, ReviewConfig, SuggestionConfig};
use crate::github::{DEFAULT_API_BASE, DEFAULT_BRANCH};
use crate::output::{report_file_name, OutputFormat};
use crate::pipeline::{emit_report, review_repository, review_source};
use crate::report::Target;
use crate::rules::RuleRegistry;
use crate::suggestions::{DEFAULT_GROQ_API_BASE, DEFAULT_MODEL};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "java-review")]
#[command(about = "Heuristic review of Java sources with AI-assisted suggestions")]
#[command(version)]
pub struct Cli {
    /// Log filter when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Review every Java file of a GitHub repository
    Review(ReviewArgs),
    /// Review a local Java file
    Analyze(AnalyzeArgs),
    /// List the built-in rules
    Rules,
}

#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Repository URL or owner/name
    #[arg(long)]
    pub repo: String,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Branch to read
    #[arg(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub github_api: String,

    /// Directory receiving one report per file
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub ai: AiArgs,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Java source file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Report path (defaults to report_<file name> in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub ai: AiArgs,
}

#[derive(Args, Debug)]
pub struct AiArgs {
    #[arg(
        long,
        env = "GROQ_API_KEY",
        hide_env_values = true,
        required_unless_present = "no_ai"
    )]
    pub groq_api_key: Option<String>,

    /// Chat model used for suggestions
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, default_value = DEFAULT_GROQ_API_BASE)]
    pub groq_api: String,

    /// Skip AI suggestions
    #[arg(long)]
    pub no_ai: bool,
}

impl From<AiArgs> for SuggestionConfig {
    fn from(args: AiArgs) -> Self {
        match args.groq_api_key {
            Some(api_key) if !args.no_ai => SuggestionConfig::Groq {
                api_key,
                api_base: args.groq_api,
                model: args.model,
            },
            _ => SuggestionConfig::Disabled,
        }
    }
}

impl From<ReviewArgs> for ReviewConfig {
    fn from(args: ReviewArgs) -> Self {
        ReviewConfig {
            repository: args.repo,
            github: GitHubConfig {
                token: args.github_token,
                api_base: args.github_api,
                branch: args.branch,
            },
            suggestions: args.ai.into(),
            output_dir: args.output_dir,
            format: args.format,
        }
    }
}

/// Run a parsed command
pub async fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Review(args) => {
            let config = ReviewConfig::from(args);
            let fetcher = config.github.client();
            let suggester = config.suggestions.provider();
            review_repository(&config, &fetcher, &suggester).await?;
        }
        Command::Analyze(args) => analyze_file(args).await?,
        Command::Rules => {
            for (id, name) in RuleRegistry::with_default_rules().describe() {
                println!("{:<22} {}", id, name);
            }
        }
    }
    Ok(())
}

async fn analyze_file(args: AnalyzeArgs) -> Result<()> {
    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {:?}", args.file))?;

    let file_name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| args.file.display().to_string());
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(report_file_name(&file_name, args.format)));

    println!("Analyzing {}...", args.file.display());
    let suggester = SuggestionConfig::from(args.ai).provider();
    let target = Target {
        repository: "local".to_string(),
        path: args.file.display().to_string(),
    };
    let report = review_source(
        &RuleRegistry::with_default_rules(),
        &suggester,
        target,
        &source,
    )
    .await;

    emit_report(&report, args.format, &output)
}
