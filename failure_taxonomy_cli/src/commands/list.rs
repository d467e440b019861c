use anyhow::{bail, Result};
use clap::Args;
use failure_taxonomy::FailureKind;

use crate::output::{print_json, print_kinds_markdown, print_kinds_table, KindRow, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    /// Only list kinds that carry a status code
    #[arg(long)]
    pub status_coded: bool,

    /// Only list kinds whose default code is in a class: 4xx or 5xx
    #[arg(long)]
    pub class: Option<String>,
}

/// Status-code class filter accepted by `--class`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeClass {
    Client,
    Server,
}

impl CodeClass {
    fn contains(self, code: u16) -> bool {
        match self {
            CodeClass::Client => (400..500).contains(&code),
            CodeClass::Server => (500..600).contains(&code),
        }
    }
}

pub fn parse_class(input: &str) -> Result<CodeClass> {
    match input.trim().to_ascii_lowercase().as_str() {
        "4xx" | "4" | "client" => Ok(CodeClass::Client),
        "5xx" | "5" | "server" => Ok(CodeClass::Server),
        other => bail!("invalid class '{}': expected 4xx or 5xx", other),
    }
}

/// Applies the `list` filters to the full kind table.
pub fn select_kinds(status_coded: bool, class: Option<CodeClass>) -> Vec<FailureKind> {
    FailureKind::ALL
        .iter()
        .copied()
        .filter(|kind| !status_coded || kind.is_status_coded())
        .filter(|kind| match class {
            Some(class) => kind.default_http_code().is_some_and(|code| class.contains(code)),
            None => true,
        })
        .collect()
}

pub fn run(args: &ListArgs, format: &OutputFormat) -> Result<()> {
    let class = args.class.as_deref().map(parse_class).transpose()?;
    let kinds = select_kinds(args.status_coded, class);
    tracing::debug!(count = kinds.len(), ?class, "selected failure kinds");

    match format {
        OutputFormat::Table => print_kinds_table(&kinds),
        OutputFormat::Markdown => print_kinds_markdown(&kinds),
        OutputFormat::Json => {
            let rows: Vec<KindRow> = kinds.iter().copied().map(KindRow::from).collect();
            print_json(&rows);
        }
    }

    Ok(())
}
