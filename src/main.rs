use anyhow::Result;
use clap::Parser;
use java_review::cli::{handle_command, Cli};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    java_review::logging::init(&cli.log_level);

    if let Err(e) = handle_command(cli.command).await {
        error!(error = %format!("{:#}", e), "Run failed");
        println!("Error: {:#}", e);
    }

    Ok(())
}
