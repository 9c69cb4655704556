// src/config/consts.rs

// Net config
pub const LISTING_URL: &str = "https://thepiratebay.org/top/201";
pub const OMDB_URL: &str = "http://www.omdbapi.com/";
pub const IMDB_TITLE_URL: &str = "https://www.imdb.com/title/";

// OMDb free tier allows 1000 requests per day. Documented, not enforced.
pub const API_KEY_VAR: &str = "OMDB_APIKEY";

// The listing marks detail-page links with this class
pub const ENTRY_LINK_CLASS: &str = "detLink";

// Export
pub const DEFAULT_OUT_FILE: &str = "top100movies.csv";
pub const EXPORT_SEP: char = ',';

// Diagnostics
pub const LOG_FILE: &str = "top100.log";

// Timeouts (seconds); no retry on top of these
pub const CONNECT_TIMEOUT_S: u64 = 5;
pub const READ_TIMEOUT_S: u64 = 15;
