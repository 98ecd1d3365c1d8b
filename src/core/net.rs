// src/core/net.rs
// Blocking HTTP GET. One request at a time; the caller waits for each body.

use log::debug;
use reqwest::blocking::Client;

use crate::config::options::ScrapeOptions;
use crate::error::{Result, ScrapeError};

/// Anything that can turn a URL into an HTML body.
/// `HttpFetcher` is the real one; tests plug in canned pages.
pub trait Fetch {
    fn get_html(&self, url: &str, verify_tls: bool) -> Result<String>;
}

/// Two clients so callers can pick certificate checking per request.
pub struct HttpFetcher {
    verifying: Client,
    insecure: Client,
}

impl HttpFetcher {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        let build = |accept_invalid: bool| {
            Client::builder()
                .timeout(opts.timeout)
                .user_agent(opts.user_agent.as_str())
                .danger_accept_invalid_certs(accept_invalid)
                .build()
                .map_err(ScrapeError::Client)
        };
        Ok(Self { verifying: build(false)?, insecure: build(true)? })
    }
}

impl Fetch for HttpFetcher {
    /// GET `url` and return the body as text.
    ///
    /// Non-success statuses are errors rather than bodies to parse.
    fn get_html(&self, url: &str, verify_tls: bool) -> Result<String> {
        let client = if verify_tls { &self.verifying } else { &self.insecure };
        debug!("GET {url} (verify_tls={verify_tls})");

        let fetch_err = |source| ScrapeError::Fetch { url: s!(url), source };
        let resp = client.get(url).send().map_err(fetch_err)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(fetch_err)
    }
}
