use anyhow::{anyhow, Context, Result};
use clap::Args;
use failure_taxonomy::{Failure, FailureKind};
use serde_json::Value;

use crate::output::{print_failure_markdown, print_failure_table, print_json, FailureRow, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// Failure kind name (e.g. not-found) or a default status code (e.g. 404)
    pub target: String,

    /// Override the status code
    #[arg(long)]
    pub code: Option<u16>,

    /// Context payload as JSON (e.g. '{"retryAfter":30}')
    #[arg(long)]
    pub data: Option<String>,
}

/// Resolves a kind from its name, or from the default status code when the
/// input is numeric.
pub fn resolve_kind(target: &str) -> Result<FailureKind> {
    let target = target.trim();
    if !target.is_empty() && target.bytes().all(|b| b.is_ascii_digit()) {
        let code: u16 = target
            .parse()
            .map_err(|_| anyhow!("status code {} out of range", target))?;
        return FailureKind::from_default_code(code)
            .ok_or_else(|| anyhow!("no failure kind defaults to status {}", code));
    }
    Ok(target.parse::<FailureKind>()?)
}

pub fn build_failure(args: &ShowArgs) -> Result<Failure<Value>> {
    let kind = resolve_kind(&args.target)?;
    let data = args
        .data
        .as_deref()
        .map(serde_json::from_str::<Value>)
        .transpose()
        .context("--data is not valid JSON")?;
    tracing::debug!(%kind, code = ?args.code, has_data = data.is_some(), "building failure");
    Ok(Failure::from_parts(kind, args.code, data)?)
}

pub fn run(args: &ShowArgs, format: &OutputFormat) -> Result<()> {
    let failure = build_failure(args)?;

    match format {
        OutputFormat::Table => print_failure_table(&failure),
        OutputFormat::Markdown => print_failure_markdown(&failure),
        OutputFormat::Json => print_json(&FailureRow::from(&failure)),
    }

    Ok(())
}
