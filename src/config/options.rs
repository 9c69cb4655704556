// src/config/options.rs

use std::env;
use std::path::PathBuf;

use crate::config::consts::{API_KEY_VAR, DEFAULT_OUT_FILE};
use crate::error::ScrapeError;

/// Resolved run options. Defaults reproduce a plain `tpb_scrape` invocation:
/// scrape the whole listing, write ./top100movies.csv.
#[derive(Clone, Debug)]
pub struct Params {
    pub out: PathBuf,
    pub api_key: Option<String>, // CLI override; env otherwise
    pub limit: Option<usize>,    // cap processed entries (quota guard)
}

impl Params {
    pub fn new() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUT_FILE),
            api_key: None,
            limit: None,
        }
    }

    /// CLI flag wins over `OMDB_APIKEY` from the environment / `.env`.
    /// Checked before any network I/O so a missing key fails fast.
    pub fn resolve_api_key(&self) -> Result<String, ScrapeError> {
        if let Some(k) = &self.api_key {
            return Ok(k.clone());
        }
        let _ = dotenvy::dotenv(); // absent .env is fine
        env::var(API_KEY_VAR).map_err(|_| {
            ScrapeError::Config(format!(
                "no API key: set {} or pass --api-key",
                API_KEY_VAR
            ))
        })
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_key_wins_over_env() {
        let mut p = Params::new();
        p.api_key = Some(s!("from-cli"));
        assert_eq!(p.resolve_api_key().unwrap(), "from-cli");
    }
}
