mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Default log filter. Events from this binary are tagged with its crate
/// name, which is the `[[bin]]` name, not the package name.
const LOG_DIRECTIVE: &str = concat!(env!("CARGO_CRATE_NAME"), "=info");

#[derive(Parser)]
#[command(name = "failures")]
#[command(about = "Inspect the client/server failure taxonomy")]
struct Cli {
    /// Output format: table, markdown or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every failure kind with its default status code
    List(commands::list::ListArgs),
    /// Build a failure by kind name or default status code and print it
    Show(commands::show::ShowArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    match &cli.command {
        Commands::List(args) => commands::list::run(args, &format)?,
        Commands::Show(args) => commands::show::run(args, &format)?,
    }

    Ok(())
}
