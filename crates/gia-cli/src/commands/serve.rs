//! Web server command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use gia_core::IssueAnalyzer;
use gia_web::{state::AppState, ServerConfig};
use std::path::PathBuf;

use super::provider::ProviderArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "GIA_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "GIA_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Allowed CORS origin (repeatable); any origin when omitted
    #[arg(long = "cors-origin", env = "GIA_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to ./gia-serve.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = args.provider.into_config()?;
    let analyzer = IssueAnalyzer::from_config(&config).context("Failed to build analyzer")?;

    println!();
    println!("  {} {}", "GIA".cyan().bold(), "Issue Analyzer".bold());
    println!();
    println!(
        "  {}   POST http://{}:{}/analyze_issue/",
        "API".green(),
        args.host,
        args.port
    );
    println!(
        "  {}  GET  http://{}:{}/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!("  {}   {}", "Model".green(), config.model);
    if args.cors_origins.is_empty() {
        println!("  {}    {}", "CORS".green(), "any origin".dimmed());
    } else {
        println!("  {}    {}", "CORS".green(), args.cors_origins.join(", "));
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    let server = ServerConfig {
        host: args.host,
        port: args.port,
        cors_origins: args.cors_origins,
    };

    gia_web::run_server(AppState::new(analyzer), server).await
}
