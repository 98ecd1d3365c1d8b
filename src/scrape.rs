// src/scrape.rs
//
// Fetch + parse orchestration. Everything here is sequential: one request in
// flight, each page fully read before the next is requested.

use log::{debug, info, warn};

use crate::{
    config::options::ScrapeOptions,
    core::net::Fetch,
    error::{Result, ScrapeError},
    progress::Progress,
    specs::{listing, pagination, posting::{self, TableRow}},
    table::ResultTable,
};

/// Fetch the search root and read its pagination block.
pub fn discover_pages(fetch: &dyn Fetch, opts: &ScrapeOptions) -> Result<Vec<String>> {
    let root = opts.search_url();
    let html = fetch.get_html(&root, opts.verify_tls)?;
    pagination::parse_pagination(&html, opts)
}

/// All job-detail URLs across every listing page: page order, then in-page order.
/// Any failure here aborts the run.
pub fn compile_links(
    fetch: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<String>> {
    let links = read_listing_pages(fetch, opts, &mut progress);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    let links = links?;
    info!("Collected {} job link(s)", links.len());
    Ok(links)
}

fn read_listing_pages(
    fetch: &dyn Fetch,
    opts: &ScrapeOptions,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<Vec<String>> {
    let pages = discover_pages(fetch, opts)?;
    info!("Found {} listing page(s)", pages.len());

    if let Some(p) = progress.as_deref_mut() {
        p.log("Collecting job links…");
        p.begin(pages.len());
    }

    let mut all_links = Vec::new();
    for (i, page) in pages.iter().enumerate() {
        let html = fetch.get_html(page, opts.verify_tls)?;
        let links = listing::parse_job_links(&html, opts)?;
        debug!("{page}: {} link(s)", links.len());
        all_links.extend(links);

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i, page);
        }
    }
    Ok(all_links)
}

/// Every `<tr>` on a job-detail page.
pub fn get_table(fetch: &dyn Fetch, url: &str, opts: &ScrapeOptions) -> Result<Vec<TableRow>> {
    let html = fetch.get_html(url, opts.verify_tls)?;
    posting::parse_rows(&html, opts.raw_text)
}

/// One padded job record whose width must match the header.
pub fn job_record(
    fetch: &dyn Fetch,
    url: &str,
    opts: &ScrapeOptions,
    width: usize,
) -> Result<Vec<String>> {
    let rows = get_table(fetch, url, opts)?;
    let mut record = posting::extract_row(&rows, opts.cell_mode)?;
    posting::pad_row(&mut record, opts.min_columns, &opts.pad_value);

    if record.len() != width {
        return Err(ScrapeError::ColumnMismatch {
            url: s!(url),
            expected: width,
            found: record.len(),
        });
    }
    Ok(record)
}

/// Result of a table build. A `Partial` table holds every row before the failing job.
#[derive(Debug)]
pub enum BuildOutcome {
    Complete(ResultTable),
    Partial {
        table: ResultTable,
        /// 0-based position of the job that failed
        failed_at: usize,
        url: String,
        cause: ScrapeError,
    },
}

impl BuildOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, BuildOutcome::Complete(_))
    }

    pub fn table(&self) -> &ResultTable {
        match self {
            BuildOutcome::Complete(t) | BuildOutcome::Partial { table: t, .. } => t,
        }
    }

    pub fn into_table(self) -> ResultTable {
        match self {
            BuildOutcome::Complete(t) | BuildOutcome::Partial { table: t, .. } => t,
        }
    }

    /// `Complete` → the table; `Partial` → `ScrapeError::Partial`.
    pub fn into_complete(self) -> Result<ResultTable> {
        match self {
            BuildOutcome::Complete(t) => Ok(t),
            BuildOutcome::Partial { failed_at, url, cause, .. } => {
                Err(ScrapeError::Partial { failed_at, url, cause: Box::new(cause) })
            }
        }
    }
}

/// Column names from the first link's table.
fn header_schema(fetch: &dyn Fetch, links: &[String], opts: &ScrapeOptions) -> Result<Vec<String>> {
    let first = links.first().ok_or(ScrapeError::NoPostings)?;
    let headers = posting::extract_headers(&get_table(fetch, first, opts)?, opts.cell_mode)?;
    info!("Header schema: {} column(s) from {first}", headers.len());
    Ok(headers)
}

/// Build the result table, one row per job link.
///
/// The header comes from the first link alone and is not checked against the
/// others. A failure while reading that header is returned as an error; a
/// failure on any job after that stops the loop and yields `Partial`.
pub fn build_table(
    fetch: &dyn Fetch,
    links: &[String],
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<BuildOutcome> {
    let headers = match header_schema(fetch, links, opts) {
        Ok(h) => h,
        Err(e) => {
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(e);
        }
    };

    let mut table = ResultTable::new(headers);
    let width = table.width();

    if let Some(p) = progress.as_deref_mut() {
        p.log("Reading job postings…");
        p.begin(links.len());
    }

    // The first link is fetched again here so every record goes through one path.
    for (i, link) in links.iter().enumerate() {
        match job_record(fetch, link, opts, width) {
            Ok(record) => {
                table.push_row(record);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(i, link);
                }
            }
            Err(cause) => {
                warn!(
                    "Stopping at job {} of {} ({link}): {cause}; keeping {} row(s)",
                    i + 1,
                    links.len(),
                    table.len()
                );
                if let Some(p) = progress.as_deref_mut() {
                    p.finish();
                }
                return Ok(BuildOutcome::Partial { table, failed_at: i, url: link.clone(), cause });
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(BuildOutcome::Complete(table))
}
