// src/scrape/listing.rs
// Extracts listing entries from the top-movies page. One anchor with class
// "detLink" per movie; the visible text is a release-style title like
// "Movie.Name.2001.1080p.x264".

use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::ENTRY_LINK_CLASS;
use crate::data::ListingEntry;
use crate::error::ScrapeError;

fn title_head() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Everything before the first digit. Titles without a digit don't match.
    RE.get_or_init(|| Regex::new(r"(.*?)\d").expect("title regex"))
}

fn entry_selector() -> Result<Selector, ScrapeError> {
    Selector::parse(&format!("a.{}", ENTRY_LINK_CLASS))
        .map_err(|e| ScrapeError::Parse(e.to_string()))
}

/// All detail-page links, in document order. May be empty.
pub fn entry_elements(doc: &Html) -> Result<Vec<ElementRef<'_>>, ScrapeError> {
    let sel = entry_selector()?;
    Ok(doc.select(&sel).collect())
}

/// One anchor → one entry. Fails only when the title can't be normalized.
pub fn parse_entry(element: ElementRef<'_>) -> Result<ListingEntry, ScrapeError> {
    let raw_title: String = element.text().collect();
    let source_url = s!(element.value().attr("href").unwrap_or_default());
    let normalized_title = normalize_title(&raw_title)?;

    Ok(ListingEntry {
        raw_title,
        source_url,
        normalized_title,
    })
}

/// Strip release-name markers from a raw listing title.
///
/// Takes everything before the first digit (usually the year), turns periods
/// into spaces, then trims: whitespace, leading '(', whitespace again,
/// leading/trailing '-'. The trim cascade order matters; the paren strip has
/// to run between the two whitespace trims.
///
/// Titles with no digit at all cannot be anchored and error out; the rule has
/// no fallback for them.
pub fn normalize_title(raw: &str) -> Result<String, ScrapeError> {
    let caps = title_head()
        .captures(raw)
        .ok_or_else(|| ScrapeError::Title(s!(raw)))?;

    let head = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    let spaced = head.replace('.', " ");
    let cleaned = spaced
        .trim()
        .trim_start_matches('(')
        .trim()
        .trim_matches('-');

    Ok(s!(cleaned))
}
