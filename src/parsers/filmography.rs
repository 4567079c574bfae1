use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::{extract_row, row_selector};
use crate::error::{Error, Result};
use crate::models::FilmEntry;

pub const FILMOGRAPHY_ROW_CLASS: &str = "filmo-row";

/// Section labels tried in order when looking for acting credits.
pub const ACTING_SECTIONS: &[&str] = &["actor", "actress"];

static SECTION_MARKER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[name]").expect("Invalid section marker selector"));

/// Parses the acting credits of a profile page in page order.
///
/// The credits are the `filmo-row` elements that follow the Actor section
/// marker (or Actress, when there is no Actor section) and precede the next
/// section marker of any label. A profile with neither section fails with
/// [`Error::NoFilmographySection`]; the whole page is never scanned.
///
/// Rows missing a title link or a year element are skipped with a warning.
pub fn parse_filmography(html: &str) -> Result<Vec<FilmEntry>> {
    let document = Html::parse_document(html);
    let row_selector = row_selector(FILMOGRAPHY_ROW_CLASS)?;

    let markers: Vec<ElementRef<'_>> = document.select(&SECTION_MARKER_SELECTOR).collect();
    let start = ACTING_SECTIONS
        .iter()
        .find_map(|label| markers.iter().position(|m| marker_label(m) == *label))
        .ok_or(Error::NoFilmographySection)?;

    let start_id = markers[start].id();
    let end_id = markers.get(start + 1).map(|m| m.id());
    debug!(
        "Using '{}' section, bounded by {}",
        marker_label(&markers[start]),
        markers
            .get(start + 1)
            .map(marker_label)
            .unwrap_or_else(|| "end of document".to_string())
    );

    let mut movies = Vec::new();
    let mut inside = false;

    for node in document.root_element().descendants() {
        if node.id() == start_id {
            inside = true;
            continue;
        }
        if !inside {
            continue;
        }
        if Some(node.id()) == end_id {
            break;
        }

        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        if !row_selector.matches(&element) {
            continue;
        }

        let row = extract_row(element);
        match (row.anchor, row.inline_text) {
            (Some(anchor), Some(year_text)) => movies.push(FilmEntry::new(anchor.text, &year_text)),
            (Some(anchor), None) => {
                warn!("Skipping filmography row '{}' without a year element", anchor.text)
            }
            (None, _) => warn!("Skipping filmography row without a title link"),
        }
    }

    debug!("Parsed {} filmography rows", movies.len());
    Ok(movies)
}

fn marker_label(marker: &ElementRef<'_>) -> String {
    marker
        .value()
        .attr("name")
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}
