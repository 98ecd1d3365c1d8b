// src/specs/mod.rs
//! # Page specs
//!
//! One module per kind of page on the jobs site. Each spec knows *where the
//! data lives in the HTML* and how to read it, and nothing else.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched bodies (`&str` in, values out).
//! - **Selector choice**: `div.pagination`, `td.job-title`, bare `<tr>` rows.
//! - **Light shaping**: absolute URLs, per-row cell texts, row padding.
//!
//! ## What does **not** live here
//! - **Fetching**: `scrape` calls `core::net` and hands bodies to the specs.
//! - **Accumulation and failure policy**: `scrape::build_table` and `runner`.
//! - **Export formatting**: `csv` / `file`.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::compile_links → specs::pagination / specs::listing
//!        → scrape::build_table   → specs::posting
//!        → file::write_export
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against inline HTML snippets.
pub mod listing;
pub mod pagination;
pub mod posting;
