// src/error.rs

use std::io;

use thiserror::Error;

/// Everything that can abort a run. A lookup miss is not in here on
/// purpose: OMDb "not found" is modeled as `Ok(None)`, never as an error.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP transport failure, including non-2xx statuses. Not retried.
    #[error("network error: {0}")]
    Network(#[from] Box<ureq::Error>),

    /// Malformed document or selector. The HTML parser is lenient, so in
    /// practice this only fires for a broken CSS selector.
    #[error("parse error: {0}")]
    Parse(String),

    /// The raw listing title has no digit, so the cleanup pattern cannot
    /// anchor. No fallback rule exists; the run aborts.
    #[error("no digit in listing title: {0:?}")]
    Title(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
