// src/omdb.rs
// OMDb lookup: one GET per title, `Response: "True"` means a hit, anything
// else is a miss. A miss is not an error; the row just stays partial.

use serde::Deserialize;

use crate::config::consts::OMDB_URL;
use crate::data::MetadataRecord;
use crate::error::ScrapeError;

/// Seam between the aggregator and the metadata service, so the pipeline can
/// run against a stub in tests.
pub trait MetadataSource {
    /// `Ok(None)` = no match (or anything the service refuses to answer);
    /// `Err` = the HTTP call itself failed.
    fn lookup(&self, title: &str) -> Result<Option<MetadataRecord>, ScrapeError>;
}

/// Raw OMDb response shape. Only the fields we export are listed; everything
/// else in the payload is ignored. Missing fields default to empty rather
/// than failing: the `Response` flag is the only thing we validate.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OmdbPayload {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "Metascore")]
    pub metascore: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub media_type: String,
    #[serde(rename = "Poster")]
    pub poster: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
}

/// Map a payload to a record, or `None` on a miss. Pure; all the field
/// massaging (vote commas, IMDb URL synthesis) lives here.
pub fn record_from(payload: OmdbPayload) -> Option<MetadataRecord> {
    if payload.response != "True" {
        return None;
    }
    Some(MetadataRecord {
        imdb_url: MetadataRecord::imdb_url_for(&payload.imdb_id),
        title: payload.title,
        genre: payload.genre,
        plot: payload.plot,
        rating: payload.imdb_rating,
        metascore: payload.metascore,
        imdb_id: payload.imdb_id,
        media_type: payload.media_type,
        image_url: payload.poster,
        votes: payload.imdb_votes.replace(',', ""),
    })
}

/// Build the `t=` query value: spaces become '+', nothing else is encoded.
/// Punctuation passes through raw; that matches the source pipeline and OMDb
/// copes with it for real titles.
pub fn query_title(title: &str) -> String {
    title.replace(' ', "+")
}

pub struct OmdbClient {
    agent: ureq::Agent,
    api_key: String,
}

impl OmdbClient {
    pub fn new(agent: ureq::Agent, api_key: String) -> Self {
        Self { agent, api_key }
    }
}

impl MetadataSource for OmdbClient {
    fn lookup(&self, title: &str) -> Result<Option<MetadataRecord>, ScrapeError> {
        let url = format!(
            "{}?t={}&type=movie&apikey={}",
            OMDB_URL,
            query_title(title),
            self.api_key
        );
        let payload: OmdbPayload = self
            .agent
            .get(&url)
            .call()
            .map_err(Box::new)?
            .into_json()?;
        Ok(record_from(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_title_plus_joins_spaces_only() {
        assert_eq!(query_title("The Matrix"), "The+Matrix");
        // deliberately not percent-encoded
        assert_eq!(query_title("Who's Next?"), "Who's+Next?");
    }

    #[test]
    fn hit_maps_fields_and_strips_vote_commas() {
        let payload: OmdbPayload = serde_json::from_value(serde_json::json!({
            "Response": "True",
            "Title": "The Matrix",
            "Genre": "Action, Sci-Fi",
            "Plot": "A computer hacker learns the truth.",
            "imdbRating": "8.7",
            "Metascore": "73",
            "imdbID": "tt0133093",
            "Type": "movie",
            "Poster": "http://img/matrix.jpg",
            "imdbVotes": "1,851,767",
            "Year": "1999"
        }))
        .unwrap();

        let rec = record_from(payload).unwrap();
        assert_eq!(rec.votes, "1851767");
        assert_eq!(rec.imdb_url, "https://www.imdb.com/title/tt0133093/");
        assert_eq!(rec.metascore, "73");
        assert_eq!(rec.media_type, "movie");
    }

    #[test]
    fn miss_is_none() {
        let payload: OmdbPayload = serde_json::from_value(serde_json::json!({
            "Response": "False",
            "Error": "Movie not found!"
        }))
        .unwrap();
        assert!(record_from(payload).is_none());
    }

    #[test]
    fn absent_response_flag_is_none() {
        let payload: OmdbPayload = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(record_from(payload).is_none());
    }
}
