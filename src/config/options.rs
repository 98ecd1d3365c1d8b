// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use url::Url;

use super::consts::*;
use crate::error::ScrapeError;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// How many cells a single `<tr>` contributes to headers/values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CellMode {
    /// Every `<th>` / `<td>` of every row, in document order.
    #[default]
    AllCells,
    /// Exactly the first `<th>` / `<td>` of every row; a row without one is an error.
    FirstCell,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    base_url: String,
    pub verify_tls: bool,
    pub timeout: Duration,
    pub user_agent: String,
    pub cell_mode: CellMode,
    pub raw_text: bool,
    pub min_columns: usize,
    pub pad_value: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            verify_tls: VERIFY_TLS,
            timeout: Duration::from_secs(TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
            cell_mode: CellMode::default(),
            raw_text: false,
            min_columns: MIN_COLUMNS,
            pad_value: s!(PAD_VALUE),
        }
    }
}

impl ScrapeOptions {
    /// Base URL without a trailing slash; hrefs from the site are root-relative.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validate and store a new base URL. Only http(s) is accepted.
    pub fn set_base_url(&mut self, raw: &str) -> Result<(), ScrapeError> {
        let parsed = Url::parse(raw.trim())
            .map_err(|e| ScrapeError::Config(format!("invalid base URL {raw:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ScrapeError::Config(format!(
                "base URL must be http or https, got {:?}",
                parsed.scheme()
            )));
        }
        self.base_url = parsed.as_str().trim_end_matches('/').to_string();
        Ok(())
    }

    pub fn search_url(&self) -> String {
        join!(self.base_url.as_str(), SEARCH_PATH)
    }

    pub fn first_page_url(&self) -> String {
        join!(self.base_url.as_str(), SEARCH_PATH, FIRST_PAGE_QUERY)
    }

    /// Site hrefs are root-relative; plain prefixing matches what the site expects.
    pub fn absolute(&self, href: &str) -> String {
        join!(self.base_url.as_str(), href)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

/// What to do when the table build stopped early.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PartialPolicy {
    /// Export whatever was collected and warn.
    #[default]
    ExportPartial,
    /// Treat it as a failed run; nothing is written.
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// `None` → `jobs.<ext>` in the working directory
    pub out_path: Option<PathBuf>,
    pub include_index: bool,
    pub on_partial: PartialPolicy,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: None,
            include_index: true,
            on_partial: PartialPolicy::default(),
        }
    }
}
