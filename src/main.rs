use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use issue_xlsx::cli;
use issue_xlsx::error::ConvertError;
use issue_xlsx::excel::{ExportOptions, FormatRange};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "issue-xlsx")]
#[command(about = "Convert issue-tracker JSON exports to formatted Excel spreadsheets.")]
#[command(long_about = "issue-xlsx - Bitbucket issue export to Excel

Reads the JSON file produced by an issue-tracker export and writes one
worksheet with a row per issue: Title, Description, Date added, Kind,
Priority, Status.

COMMANDS:
  convert  - Write the spreadsheet
  check    - Validate the export without writing anything

EXAMPLES:
  issue-xlsx convert db-2.0.json issues.xlsx
  issue-xlsx convert db-2.0.json issues.xlsx --date-prefix
  issue-xlsx check db-2.0.json

Set RUST_LOG (e.g. RUST_LOG=issue_xlsx=debug) for diagnostic logging.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert an issue export to an Excel .xlsx file.

FORMATTING:
  Header row     bold white on navy, centered, wrapped
  Title/Desc     left aligned, wrapped, width 40
  Other columns  centered, wrapped, width 40
  Kind           'bug' red, 'enhancement' green (red wins if both)
  Priority       'critical' red, 'major' orange (red wins if both)
  Status         'resolved' green
  Zoom           120%

If the export has no 'issues' field, nothing is written.

EXAMPLE:
  issue-xlsx convert db-2.0.json issues.xlsx --date-prefix
  → writes 20240131_issues.xlsx")]
    /// Convert an issue export to an Excel .xlsx file
    Convert {
        /// Path to the JSON export
        input: PathBuf,

        /// Output Excel file path (.xlsx)
        output: PathBuf,

        /// Prefix the output file name with today's date (YYYYMMDD_)
        #[arg(long)]
        date_prefix: bool,

        /// Only color worksheet rows 2-12, like older exports
        #[arg(long)]
        legacy_range: bool,

        /// Write the header row without styling
        #[arg(long)]
        no_header_style: bool,

        /// Worksheet zoom in percent
        #[arg(long, default_value = "120", value_parser = clap::value_parser!(u16).range(10..=400))]
        zoom: u16,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate an issue export without writing a spreadsheet
    Check {
        /// Path to the JSON export
        input: PathBuf,

        /// List every parsed row
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Commands::Convert { verbose, .. } | Commands::Check { verbose, .. } => *verbose,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "issue_xlsx=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.verbose());

    let result = run(cli.command);
    if let Err(err) = &result {
        if let Some(convert_err) = err.downcast_ref::<ConvertError>() {
            eprintln!("{} {}", "❌".red(), convert_err.kind().red().bold());
        }
    }
    result
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Convert {
            input,
            output,
            date_prefix,
            legacy_range,
            no_header_style,
            zoom,
            verbose,
        } => {
            let options = ExportOptions {
                zoom,
                format_range: if legacy_range {
                    FormatRange::Legacy
                } else {
                    FormatRange::Written
                },
                header_style: !no_header_style,
                ..ExportOptions::default()
            };
            cli::convert(input.clone(), output, date_prefix, options, verbose)
                .with_context(|| format!("Failed to convert {}", input.display()))?;
        }

        Commands::Check { input, verbose } => {
            cli::check(input.clone(), verbose)
                .with_context(|| format!("Invalid issue export {}", input.display()))?;
        }
    }

    Ok(())
}
