// src/runner.rs
// Drives the whole run: fetch listing → extract anchors → per-entry lookup →
// merge → export. Strictly sequential; each entry's lookup happens after the
// previous one finished. Lookups across entries share no state, so they
// could be parallelized later, but the current behavior is one at a time.

use std::path::PathBuf;

use log::info;
use scraper::{ElementRef, Html};

use crate::config::consts::LISTING_URL;
use crate::config::Params;
use crate::core::net;
use crate::data::{MergedRow, ResultSet};
use crate::error::ScrapeError;
use crate::file;
use crate::logging::traced;
use crate::omdb::MetadataSource;
use crate::progress::Progress;
use crate::scrape;

/// Summary of what was produced.
pub struct RunSummary {
    pub out_path: PathBuf,
    pub rows: usize,
    pub lookup_hits: usize,
}

/// Parse + lookup + merge for every listing element, in document order.
///
/// No per-item recovery: the first parse or lookup failure propagates and
/// aborts the run before anything is exported. Rows gathered so far are
/// discarded with it. Catch-and-skip would be more robust, but this mirrors
/// the abort-on-first-error policy the output consumers already know.
pub fn collect_rows<'a>(
    elements: &[ElementRef<'a>],
    source: &dyn MetadataSource,
    progress: &mut dyn Progress,
) -> Result<ResultSet, ScrapeError> {
    let mut rows: ResultSet = Vec::with_capacity(elements.len());

    for (nr, element) in elements.iter().enumerate() {
        info!("getting data from element {nr}");

        let entry = traced("parse_entry", || scrape::parse_entry(*element))?;
        let meta = traced("metadata lookup", || {
            source.lookup(&entry.normalized_title)
        })?;

        let mut row = MergedRow::from_entry(&entry);
        if let Some(m) = &meta {
            row.merge_metadata(m);
        } else {
            info!("no metadata match for {:?}", entry.normalized_title);
        }

        progress.item_done(nr, &entry.normalized_title);
        rows.push(row);
    }

    Ok(rows)
}

/// Top-level runner. One pass, one output file.
pub fn run(
    params: &Params,
    source: &dyn MetadataSource,
    progress: &mut dyn Progress,
) -> Result<RunSummary, ScrapeError> {
    let agent = net::agent();

    let body = traced("fetch listing page", || net::fetch(&agent, LISTING_URL))?;
    let doc = Html::parse_document(&body);

    let mut elements = traced("extract entries", || scrape::entry_elements(&doc))?;
    if let Some(limit) = params.limit {
        elements.truncate(limit);
    }

    progress.begin(elements.len());
    info!("listing has {} entries", elements.len());

    let rows = collect_rows(&elements, source, progress)?;
    let lookup_hits = rows.iter().filter(|r| r.get("imdb_id").is_some()).count();

    info!("exporting {} rows to {}", rows.len(), params.out.display());
    let out_path = traced("export csv", || file::export(&rows, &params.out))?;

    progress.finish();
    Ok(RunSummary {
        out_path,
        rows: rows.len(),
        lookup_hits,
    })
}
