use tracing::{debug, warn};

use super::extract_rows;
use crate::error::Result;
use crate::models::ActorCandidate;

/// Class of the text cell in a celebrity search result, as opposed to the
/// accompanying photo cell.
pub const RESULT_ROW_CLASS: &str = "result_text";

/// Turns a celebrity search page into candidates, in page order.
///
/// Rows without a linked name are skipped. A candidate only carries a
/// known-for pair when the row's note yields both a role and a work.
pub fn parse_candidates(html: &str) -> Result<Vec<ActorCandidate>> {
    let rows = extract_rows(html, RESULT_ROW_CLASS)?;
    let total = rows.len();

    let candidates: Vec<ActorCandidate> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let anchor = match row.anchor {
                Some(anchor) => anchor,
                None => {
                    warn!("Skipping search result {} without a name link", index + 1);
                    return None;
                }
            };
            let href = match anchor.href {
                Some(href) => href,
                None => {
                    warn!("Skipping search result '{}' without a profile link", anchor.text);
                    return None;
                }
            };

            let candidate = ActorCandidate::new(anchor.text, href);
            Some(match row.segments.as_slice() {
                [role, work, ..] => candidate.with_known_for(role.as_str(), work.as_str()),
                _ => candidate,
            })
        })
        .collect();

    debug!("Parsed {} candidates from {} search rows", candidates.len(), total);
    Ok(candidates)
}
