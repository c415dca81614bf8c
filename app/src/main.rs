#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod clipboard;
mod command;
mod render;

use command::{
    CommandStrategy, CopyTarget, ExtractInput, ExtractStrategy, InfoStrategy, InitStrategy,
    VersionStrategy,
};
use parseinbox_config::OutputFormat;

#[derive(Parser)]
#[command(name = "parseinbox")]
#[command(about = "Extract access-provisioning details from request emails", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract general information and users from an email body
    Extract {
        /// File containing the email body (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Print a JSON report
        #[arg(long, conflicts_with = "text")]
        json: bool,

        /// Print a text report
        #[arg(long)]
        text: bool,

        /// Show details for the user at this zero-based row
        #[arg(short, long)]
        select: Option<usize>,

        /// Copy one value to the clipboard (e.g. contract-id, email)
        #[arg(short, long)]
        copy: Option<CopyTarget>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Extract {
            file,
            json,
            text,
            select,
            copy,
        } => {
            let format = if json {
                Some(OutputFormat::Json)
            } else if text {
                Some(OutputFormat::Text)
            } else {
                None
            };
            ExtractStrategy.execute(ExtractInput {
                file,
                format,
                select,
                copy,
            })
        }
        Commands::Init => InitStrategy.execute(()),
        Commands::Info => InfoStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
