mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::input::{InputError, InputSource};
use crate::model::SortOrder;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_totals::run_stage2;
use crate::pipeline::stage3_sort::run_stage3;
use crate::pipeline::stage4_report::{ReportError, Stage4Input, build_summary, write_reports};
use crate::report::json::render_summary_json;
use crate::report::text::render_views;

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

#[derive(Debug, Parser)]
#[command(
    name = "kira-marksrank",
    version,
    about = "Total student marks and rank entries by total score"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load, total, sort and render a marks table
    Run(RunArgs),
}

#[derive(Debug, clap::Args)]
struct RunArgs {
    /// Tab-separated marks file (name, then one column per subject). Defaults to the built-in sample
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory for report.txt, ranking.tsv and summary.json
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "descending")]
    order: OrderArg,

    /// Format of the standard output dump
    #[arg(long, value_enum, default_value = "text")]
    format: FormatArg,

    /// Do not print the dump to standard output
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    Descending,
    Ascending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunConfig {
    source: InputSource,
    out_dir: Option<PathBuf>,
    order: SortOrder,
    format: FormatArg,
    quiet: bool,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        Self {
            source: match args.input {
                Some(path) => InputSource::File(path),
                None => InputSource::Sample,
            },
            out_dir: args.out,
            order: match args.order {
                OrderArg::Descending => SortOrder::Descending,
                OrderArg::Ascending => SortOrder::Ascending,
            },
            format: args.format,
            quiet: args.quiet,
        }
    }
}

fn main() {
    crate::logging::init_tracing();
    let cli = Cli::parse();
    let config = match cli.command {
        Command::Run(args) => RunConfig::from(args),
    };
    if let Err(err) = run(&config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), RunError> {
    let mut table = run_stage1(&config.source)?;
    run_stage2(&mut table);
    run_stage3(&mut table, config.order);

    let input = Stage4Input {
        table: &table,
        input_label: config.source.label(),
        order: config.order,
        tool_name: "kira-marksrank".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    if !config.quiet {
        match config.format {
            FormatArg::Text => println!("{}", render_views(&table)),
            FormatArg::Json => {
                let json = render_summary_json(&build_summary(&input)).map_err(ReportError::from)?;
                print!("{json}");
            }
        }
    }

    if let Some(out_dir) = &config.out_dir {
        write_reports(&input, out_dir)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
