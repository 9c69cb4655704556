// src/core/net.rs
// One blocking GET per call, shared agent, no retry.

use std::time::Duration;

use crate::config::consts::{CONNECT_TIMEOUT_S, READ_TIMEOUT_S};
use crate::error::ScrapeError;

/// Build the agent used for every request in a run.
pub fn agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(Duration::from_secs(CONNECT_TIMEOUT_S))
        .timeout_read(Duration::from_secs(READ_TIMEOUT_S))
        .build()
}

/// Fetch a page body as text. Transport errors and non-2xx statuses both
/// surface as `ScrapeError::Network`.
pub fn fetch(agent: &ureq::Agent, url: &str) -> Result<String, ScrapeError> {
    let body = agent.get(url).call().map_err(Box::new)?.into_string()?;
    Ok(body)
}
