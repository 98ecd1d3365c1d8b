// tests/common/mod.rs
//
// Canned-page fetcher so the pipeline runs offline.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use job_scrape::config::options::{AppOptions, ScrapeOptions};
use job_scrape::core::net::Fetch;
use job_scrape::{Result, ScrapeError};

pub const BASE: &str = "https://jobs.example.org";

#[derive(Default)]
pub struct FakeFetch {
    pages: HashMap<String, String>,
    pub calls: RefCell<Vec<(String, bool)>>,
}

impl FakeFetch {
    pub fn new() -> Self { Self::default() }

    pub fn page(mut self, path: &str, html: impl Into<String>) -> Self {
        self.pages.insert(format!("{BASE}{path}"), html.into());
        self
    }

    pub fn urls_called(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(u, _)| u.clone()).collect()
    }
}

impl Fetch for FakeFetch {
    fn get_html(&self, url: &str, verify_tls: bool) -> Result<String> {
        self.calls.borrow_mut().push((url.to_string(), verify_tls));
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Status { url: url.to_string(), status: 404 })
    }
}

pub fn scrape_opts() -> ScrapeOptions {
    let mut o = ScrapeOptions::default();
    o.set_base_url(BASE).unwrap();
    o
}

pub fn app_opts(out: PathBuf) -> AppOptions {
    let mut o = AppOptions::default();
    o.scrape = scrape_opts();
    o.export.out_path = Some(out);
    o
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("job_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn pagination(hrefs: &[&str]) -> String {
    let links: String = hrefs.iter().map(|h| format!(r#"<a href="{h}">p</a>"#)).collect();
    format!(r#"<html><body><div class="pagination">{links}</div></body></html>"#)
}

pub fn listing(hrefs: &[&str]) -> String {
    let rows: String = hrefs
        .iter()
        .map(|h| format!(r#"<tr><td class="job-title"><a href="{h}">Job</a></td><td>Dept</td></tr>"#))
        .collect();
    format!("<html><body><table>{rows}</table></body></html>")
}

/// Key/value posting: one `<tr><th>k</th><td>v</td></tr>` per pair.
pub fn posting(pairs: &[(&str, &str)]) -> String {
    let rows: String = pairs
        .iter()
        .map(|(k, v)| format!("<tr><th>{k}</th><td>{v}</td></tr>"))
        .collect();
    format!("<html><body><table>{rows}</table></body></html>")
}

/// Horizontal posting: one header row, one data row.
pub fn horizontal(headers: &[&str], values: &[&str]) -> String {
    let th: String = headers.iter().map(|h| format!("<th>{h}</th>")).collect();
    let td: String = values.iter().map(|v| format!("<td>{v}</td>")).collect();
    format!("<html><body><table><tr>{th}</tr><tr>{td}</tr></table></body></html>")
}
