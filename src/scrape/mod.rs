// src/scrape/mod.rs
mod listing;

pub use listing::{entry_elements, normalize_title, parse_entry};
