// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};

use crate::config::consts::{BASE_URL, MIN_COLUMNS, PAD_VALUE, TIMEOUT_SECS};
use crate::config::options::{AppOptions, CellMode, ExportFormat, PartialPolicy};
use crate::core::net::HttpFetcher;
use crate::error::Result;
use crate::progress::LogProgress;
use crate::runner::{self, Completion};

/// Crawl the city job board and export every posting's detail table.
///
/// With no arguments: read all listing pages, fetch each posting, write jobs.csv.
#[derive(Parser, Debug)]
#[command(name = "job_scrape", version)]
pub struct Cli {
    /// Site root the search path and job links are appended to
    #[arg(long, env = "JOB_SCRAPE_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Output file, or directory with a trailing separator [default: jobs.<format>]
    #[arg(short, long, env = "JOB_SCRAPE_OUT")]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Rows with fewer values than this get one padding value
    #[arg(long, env = "JOB_SCRAPE_MIN_COLUMNS", default_value_t = MIN_COLUMNS)]
    pub min_columns: usize,

    #[arg(long, default_value = PAD_VALUE)]
    pub pad_value: String,

    /// Check TLS certificates (off by default)
    #[arg(long)]
    pub verify_tls: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// Take only the first th/td of each table row
    #[arg(long)]
    pub first_cell_only: bool,

    /// Keep cell text exactly as in the page
    #[arg(long)]
    pub raw_text: bool,

    /// Omit the leading row-index column
    #[arg(long)]
    pub no_index: bool,

    /// Fail instead of exporting when a posting cannot be read
    #[arg(long)]
    pub strict: bool,

    /// Print the job links and exit
    #[arg(long)]
    pub list_links: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn into_options(self) -> Result<AppOptions> {
        let mut opts = AppOptions::default();

        let s = &mut opts.scrape;
        s.set_base_url(&self.base_url)?;
        s.verify_tls = self.verify_tls;
        s.timeout = Duration::from_secs(self.timeout);
        s.min_columns = self.min_columns;
        s.pad_value = self.pad_value;
        s.raw_text = self.raw_text;
        s.cell_mode = if self.first_cell_only { CellMode::FirstCell } else { CellMode::AllCells };

        let e = &mut opts.export;
        e.out_path = self.out;
        e.format = self.format;
        e.include_index = !self.no_index;
        e.on_partial = if self.strict { PartialPolicy::Fail } else { PartialPolicy::ExportPartial };

        Ok(opts)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let list_only = cli.list_links;
    let opts = cli.into_options()?;
    let fetcher = HttpFetcher::new(&opts.scrape)?;
    let mut progress = LogProgress::default();

    if list_only {
        for link in runner::list_links(&opts, &fetcher, Some(&mut progress))? {
            println!("{link}");
        }
        return Ok(());
    }

    let summary = runner::run(&opts, &fetcher, Some(&mut progress))?;
    match &summary.completion {
        Completion::Complete => println!(
            "Wrote {} of {} job(s) to {}",
            summary.rows_written,
            summary.links_found,
            summary.file_written.display()
        ),
        Completion::Partial { failed_at, url, cause } => println!(
            "Wrote {} of {} job(s) to {} (stopped at job {}: {url}: {cause})",
            summary.rows_written,
            summary.links_found,
            summary.file_written.display(),
            failed_at + 1
        ),
    }
    Ok(())
}
