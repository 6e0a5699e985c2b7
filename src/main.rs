use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use report_scrub::batch::{self, BatchOptions};

/// Strip page numbers, running footers and boilerplate headings from
/// annual-report text files, writing lowercase copies to OUTPUT_DIR.
#[derive(Parser, Debug)]
#[command(name = "report-scrub", version, about)]
struct Cli {
    /// Directory holding the extracted report text files
    input_dir: PathBuf,

    /// Directory for the cleaned files (created if missing)
    output_dir: PathBuf,

    /// Worker threads (defaults to one per CPU)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Extension of the files to clean
    #[arg(long, default_value = "txt")]
    extension: String,

    /// Write a per-file CSV manifest of removed lines
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let opts = BatchOptions {
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
        extension: cli.extension.trim_start_matches('.').to_string(),
        jobs: cli.jobs,
        manifest: cli.manifest,
    };

    let summary = batch::run(&opts).context("cleaning reports")?;

    log::info!(
        "Cleaned {} file(s), removed {} line(s)",
        summary.len(),
        summary.lines_removed()
    );
    log::info!("Execution time: {:.2} seconds", summary.elapsed.as_secs_f64());

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("serializing summary")?;
        println!("{json}");
    }
    Ok(())
}
