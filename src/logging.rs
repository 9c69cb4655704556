// src/logging.rs
// File-backed sink for the `log` facade. The log file is truncated at start
// of each run (handy when eyeballing the last run) and flushed on shutdown.
// Injected from the binary, not set up ambiently by the library.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use log::{Level, LevelFilter, Metadata, Record};

pub struct FileLog {
    out: Mutex<BufWriter<File>>,
    start: Instant,
}

impl FileLog {
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?; // overwrite previous run's log
        Ok(Self {
            out: Mutex::new(BufWriter::new(file)),
            start: Instant::now(),
        })
    }
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

impl log::Log for FileLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(self.start.elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", record.level(), record.args());
        if let Ok(mut out) = self.out.lock() {
            let _ = out.write_all(line.as_bytes());
        }
    }

    fn flush(&self) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.flush();
        }
    }
}

/// Install the file logger for this run. Call once from the binary.
pub fn init(path: &Path) -> io::Result<()> {
    let logger = FileLog::create(path)?;
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}

/// Flush the installed logger. Safe to call when none is installed.
pub fn shutdown() {
    log::logger().flush();
}

/// Explicit call-logging wrapper for component boundaries: logs the
/// operation start, then runs it. The scraper composes this around each
/// pipeline stage instead of instrumenting every function implicitly.
pub fn traced<T>(op: &str, f: impl FnOnce() -> T) -> T {
    log::info!("starting {op}");
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_formatting() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(61_005), "00:01:01.005");
        assert_eq!(fmt_elapsed(3_600_000 + 123), "01:00:00.123");
    }

    #[test]
    fn traced_returns_inner_value() {
        assert_eq!(traced("noop", || 42), 42);
    }
}
