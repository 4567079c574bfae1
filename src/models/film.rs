use serde::{Deserialize, Serialize};

use super::ActorCandidate;

/// Year marker for credits the page lists without a release year.
pub const UPCOMING: &str = "Upcoming";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmEntry {
    pub title: String,
    pub year: String,
}

impl FilmEntry {
    /// Builds an entry from raw row text. Surrounding whitespace (including
    /// `&nbsp;`) is trimmed and a blank year becomes [`UPCOMING`].
    pub fn new(title: impl Into<String>, year_text: &str) -> Self {
        let year = year_text.trim();
        Self {
            title: title.into(),
            year: if year.is_empty() {
                UPCOMING.to_string()
            } else {
                year.to_string()
            },
        }
    }
}

/// The document persisted by `--save-to-disk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmographyReport {
    pub actor: String,
    pub movies: Vec<FilmEntry>,
}

impl FilmographyReport {
    pub fn new(actor: &ActorCandidate, movies: &[FilmEntry]) -> Self {
        Self {
            actor: actor.name.clone(),
            movies: movies.to_vec(),
        }
    }
}
