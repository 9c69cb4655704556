// src/cli.rs

use std::{env, path::PathBuf};

use log::info;

use crate::config::Params;
use crate::core::net;
use crate::error::ScrapeError;
use crate::omdb::OmdbClient;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Parse process args into run options. No flags at all is a valid run.
pub fn parse_args() -> Result<Params, ScrapeError> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| arg_err("Missing output path"))?;
                params.out = PathBuf::from(v);
            }
            "--api-key" => {
                let v = args.next().ok_or_else(|| arg_err("Missing value for --api-key"))?;
                params.api_key = Some(v);
            }
            "--limit" => {
                let v = args.next().ok_or_else(|| arg_err("Missing value for --limit"))?;
                let n: usize = v
                    .parse()
                    .map_err(|_| arg_err(&format!("Invalid --limit: {}", v)))?;
                params.limit = Some(n);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other => return Err(arg_err(&format!("Unknown arg: {}", other))),
        }
    }

    Ok(params)
}

fn arg_err(msg: &str) -> ScrapeError {
    ScrapeError::Config(s!(msg))
}

/// Prints one line per scraped entry plus a closing summary.
pub struct ConsoleProgress {
    total: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self { total: 0 }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Scraping {} entries...", total);
    }

    fn log(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn item_done(&mut self, index: usize, title: &str) {
        println!("[{}/{}] {}", index + 1, self.total, title);
    }
}

/// Full CLI run: resolve the API key, wire the OMDb client and console
/// progress, drive the pipeline, report the outcome.
pub fn run(params: Params) -> Result<RunSummary, ScrapeError> {
    let api_key = params.resolve_api_key()?;
    let client = OmdbClient::new(net::agent(), api_key);
    let mut progress = ConsoleProgress::new();

    info!("starting run");
    let summary = runner::run(&params, &client, &mut progress)?;

    println!(
        "Wrote {} ({} rows, {} with metadata)",
        summary.out_path.display(),
        summary.rows,
        summary.lookup_hits
    );
    Ok(summary)
}
