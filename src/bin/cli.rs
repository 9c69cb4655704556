// src/bin/cli.rs
use std::path::Path;

use tpb_scrape::{cli, config::consts::LOG_FILE, logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let params = cli::parse_args()?;
    logging::init(Path::new(LOG_FILE))?;

    let result = cli::run(params);
    logging::shutdown();

    result?;
    Ok(())
}
