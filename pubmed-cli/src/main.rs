use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "pubmed-cli",
    about = "Inspect and export metadata from PubMed citation XML",
    long_about = "Reads PubMed EFetch XML files and prints or exports the publication \
                  metadata of each citation (authors, journal, dates, identifiers, MeSH)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a readable metadata block for each article
    Show(commands::show::Show),
    /// Export publication summaries as JSON or JSON Lines
    Export(commands::export::Export),
    /// List MeSH descriptor/qualifier pairs
    Mesh(commands::mesh::Mesh),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .init();

    match &cli.command {
        Commands::Show(cmd) => cmd.execute(),
        Commands::Export(cmd) => cmd.execute(),
        Commands::Mesh(cmd) => cmd.execute(),
    }
}
