// src/progress.rs
/// Lightweight progress reporting for the long-running stages (link compile, table build).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once a stage knows how many items it has.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One unit finished (a listing page or a job posting).
    fn item_done(&mut self, _index: usize, _url: &str) {}

    /// Called when a stage ends, successful or not, even if `begin` never ran.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards progress to the `log` facade. Used by the CLI.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        log::info!("{msg}");
    }

    fn item_done(&mut self, index: usize, url: &str) {
        log::info!("[{}/{}] {url}", index + 1, self.total);
    }
}
