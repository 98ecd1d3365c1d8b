// src/specs/listing.rs
//
// Listing page → job-detail URLs, in document order.

use scraper::Html;

use crate::config::consts::JOB_TITLE_SELECTOR;
use crate::config::options::ScrapeOptions;
use crate::core::html::{selector, snippet};
use crate::error::{Result, ScrapeError};

/// One URL per `td.job-title` cell, taken from its first anchor.
/// A title cell without a linked anchor is an error.
pub fn parse_job_links(html: &str, opts: &ScrapeOptions) -> Result<Vec<String>> {
    let doc = Html::parse_document(html);
    let cell_sel = selector(JOB_TITLE_SELECTOR)?;
    let a_sel = selector("a")?;

    let mut links = Vec::new();
    for cell in doc.select(&cell_sel) {
        let href = cell
            .select(&a_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or_else(|| ScrapeError::MissingElement {
                what: "job link (a[href])",
                context: snippet(cell),
            })?;
        links.push(opts.absolute(href.trim()));
    }
    Ok(links)
}
