// src/data.rs
//
// Transient row model for one run. Nothing here is persisted; rows live in
// memory until the export step and are dropped afterwards.

use crate::config::consts::IMDB_TITLE_URL;

/// One anchor element from the listing page, already normalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingEntry {
    pub raw_title: String,
    pub source_url: String,
    pub normalized_title: String,
}

/// Flat OMDb record for one matched title. Numeric-looking fields stay raw
/// strings, mirroring the loose typing of the API itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataRecord {
    pub title: String,
    pub genre: String,
    pub plot: String,
    pub rating: String,
    pub metascore: String,
    pub imdb_id: String,
    pub imdb_url: String,
    pub media_type: String,
    pub image_url: String,
    pub votes: String,
}

impl MetadataRecord {
    /// Canonical IMDb detail-page URL for an id like "tt0133093".
    pub fn imdb_url_for(id: &str) -> String {
        format!("{}{}/", IMDB_TITLE_URL, id)
    }
}

/// Shallow field union of a ListingEntry and (optionally) a MetadataRecord,
/// keyed by field name. Insertion order is first-seen order; inserting an
/// existing name overwrites the value in place, so later merges win. The two
/// field sets are disjoint by construction, the precedence rule is just the
/// documented tie-break.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergedRow {
    fields: Vec<(String, String)>,
}

impl MergedRow {
    pub fn from_entry(entry: &ListingEntry) -> Self {
        let mut row = Self::default();
        row.set("tpb_title", &entry.raw_title);
        row.set("tpb_movie_url", &entry.source_url);
        row.set("tpb_clean_title", &entry.normalized_title);
        row
    }

    /// Last-merge-wins on name collision.
    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| n == name) {
            slot.1 = s!(value);
        } else {
            self.fields.push((s!(name), s!(value)));
        }
    }

    /// Fold a lookup hit into the row. A miss leaves the row untouched, so
    /// the export ends up with exactly the listing fields for that entry.
    pub fn merge_metadata(&mut self, m: &MetadataRecord) {
        self.set("title", &m.title);
        self.set("genre", &m.genre);
        self.set("plot", &m.plot);
        self.set("rating", &m.rating);
        self.set("metascore", &m.metascore);
        self.set("imdb_id", &m.imdb_id);
        self.set("imdb_url", &m.imdb_url);
        self.set("type", &m.media_type);
        self.set("image_url", &m.image_url);
        self.set("votes", &m.votes);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered rows, index = position in the listing. Order must survive to the
/// output file untouched.
pub type ResultSet = Vec<MergedRow>;

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ListingEntry {
        ListingEntry {
            raw_title: s!("The.Matrix.1999.720p.BluRay"),
            source_url: s!("/torrent/1"),
            normalized_title: s!("The Matrix"),
        }
    }

    #[test]
    fn entry_fields_in_order() {
        let row = MergedRow::from_entry(&entry());
        let names: Vec<_> = row.names().collect();
        assert_eq!(names, ["tpb_title", "tpb_movie_url", "tpb_clean_title"]);
        assert_eq!(row.get("tpb_clean_title"), Some("The Matrix"));
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut row = MergedRow::from_entry(&entry());
        row.set("tpb_title", "overwritten");
        assert_eq!(row.len(), 3);
        assert_eq!(row.get("tpb_title"), Some("overwritten"));
        // position unchanged
        assert_eq!(row.names().next(), Some("tpb_title"));
    }

    #[test]
    fn merge_appends_metadata_after_listing_fields() {
        let mut row = MergedRow::from_entry(&entry());
        let m = MetadataRecord {
            title: s!("The Matrix"),
            genre: s!("Action, Sci-Fi"),
            plot: s!("..."),
            rating: s!("8.7"),
            metascore: s!("73"),
            imdb_id: s!("tt0133093"),
            imdb_url: MetadataRecord::imdb_url_for("tt0133093"),
            media_type: s!("movie"),
            image_url: s!("http://img/poster.jpg"),
            votes: s!("1800000"),
        };
        row.merge_metadata(&m);
        assert_eq!(row.len(), 13);
        assert_eq!(row.get("imdb_url"), Some("https://www.imdb.com/title/tt0133093/"));
        assert_eq!(row.names().nth(3), Some("title"));
    }
}
