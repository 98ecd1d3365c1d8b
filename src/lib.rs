// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod cli;
pub mod export;
pub mod file;
pub mod logging;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod table;

pub use error::{Result, ScrapeError};
