// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.austincityjobs.org";
pub const SEARCH_PATH: &str = "/postings/search";
pub const FIRST_PAGE_QUERY: &str = "?page=1";
pub const VERIFY_TLS: bool = false;
pub const TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("job_scrape/", env!("CARGO_PKG_VERSION"));

// Page structure
pub const PAGINATION_SELECTOR: &str = "div.pagination [href]";
pub const JOB_TITLE_SELECTOR: &str = "td.job-title";

// Row shaping
pub const MIN_COLUMNS: usize = 22;
pub const PAD_VALUE: &str = "null";

// Export
pub const DEFAULT_OUT_FILE: &str = "jobs.csv";
