// src/runner.rs
use std::path::PathBuf;

use log::{info, warn};

use crate::{
    config::options::{AppOptions, PartialPolicy},
    core::net::Fetch,
    error::Result,
    file::write_export,
    progress::Progress,
    scrape::{self, BuildOutcome},
};

/// How the build ended, as far as the exported file is concerned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    Complete,
    /// Stopped at job `failed_at` (0-based); rows before it were exported.
    Partial { failed_at: usize, url: String, cause: String },
}

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub file_written: PathBuf,
    pub links_found: usize,
    pub rows_written: usize,
    pub completion: Completion,
}

/// Full crawl → extract → export.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    fetch: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let links = scrape::compile_links(fetch, &opts.scrape, reborrow(&mut progress))?;
    let outcome = scrape::build_table(fetch, &links, &opts.scrape, reborrow(&mut progress))?;

    let (table, completion) = match opts.export.on_partial {
        PartialPolicy::Fail => (outcome.into_complete()?, Completion::Complete),
        PartialPolicy::ExportPartial => match outcome {
            BuildOutcome::Complete(table) => (table, Completion::Complete),
            BuildOutcome::Partial { table, failed_at, url, cause } => {
                warn!("Exporting partial table: {} of {} job(s)", table.len(), links.len());
                (table, Completion::Partial { failed_at, url, cause: cause.to_string() })
            }
        },
    };

    let path = write_export(&table, &opts.export)?;
    info!("Wrote {} row(s) to {}", table.len(), path.display());

    Ok(RunSummary {
        file_written: path,
        links_found: links.len(),
        rows_written: table.len(),
        completion,
    })
}

/// Short-lived reborrow of an optional sink, so it can be handed to several stages.
fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    progress.as_deref_mut().map(|p| p as &mut dyn Progress)
}

/// Job links only, no posting pages fetched.
pub fn list_links(
    opts: &AppOptions,
    fetch: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<String>> {
    scrape::compile_links(fetch, &opts.scrape, progress)
}
