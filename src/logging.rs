// src/logging.rs
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env};
use log::LevelFilter;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger: `[elapsed][LEVEL] message`.
/// `RUST_LOG` wins over `verbosity` when set.
pub fn init(verbosity: u8) {
    start();
    let mut builder = Builder::new();
    builder
        .filter_level(level_for(verbosity))
        // reqwest/hyper are chatty at debug
        .filter_module("reqwest", LevelFilter::Warn)
        .filter_module("hyper_util", LevelFilter::Warn)
        .parse_env(Env::default())
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        });

    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
