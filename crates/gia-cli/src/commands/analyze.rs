//! One-shot issue analysis from the terminal.

use anyhow::Result;
use clap::Args;
use gia_core::{IssueAnalyzer, IssueRequest};

use super::provider::ProviderArgs;
use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Repository owner
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Issue number
    pub issue_number: u64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let config = args.provider.into_config()?;
    let analyzer = IssueAnalyzer::from_config(&config)?;
    let request = IssueRequest::new(args.owner, args.repo, args.issue_number);

    let analysis = analyzer.analyze(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        output::print_analysis(&request, &analysis.analysis);
    }

    Ok(())
}
