// src/specs/pagination.rs
//
// Search root → ordered list of listing pages.
//
// Every element carrying an `href` inside `div.pagination` counts as a page.
// Page 1 is not always linked from itself, so it is added unconditionally.

use std::collections::BTreeSet;

use log::debug;
use scraper::Html;

use crate::config::consts::PAGINATION_SELECTOR;
use crate::config::options::ScrapeOptions;
use crate::core::html::selector;
use crate::error::Result;

/// Listing-page URLs, deduplicated and sorted as plain strings.
///
/// Sorting is lexicographic, so `?page=10` comes before `?page=2`.
/// Order only affects the order rows end up in; every page is visited.
pub fn parse_pagination(html: &str, opts: &ScrapeOptions) -> Result<Vec<String>> {
    let doc = Html::parse_document(html);
    let sel = selector(PAGINATION_SELECTOR)?;

    let mut pages: BTreeSet<String> = doc
        .select(&sel)
        .filter_map(|el| el.value().attr("href"))
        .map(|href| opts.absolute(href.trim()))
        .collect();
    pages.insert(opts.first_page_url());

    debug!("pagination: {} page(s)", pages.len());
    Ok(pages.into_iter().collect())
}
