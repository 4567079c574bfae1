use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};

use super::clean_text;
use crate::error::{Error, Result};

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("Invalid anchor selector"));
static YEAR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.year_column").expect("Invalid year selector"));
static SPAN_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span").expect("Invalid span selector"));
static SMALL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("small").expect("Invalid small selector"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub text: String,
    pub href: Option<String>,
}

/// The pieces of one row that the search and filmography parsers care about.
/// Missing sub-elements show up as `None` or an empty `segments`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// First `<a>` with non-blank text.
    pub anchor: Option<Anchor>,
    /// Raw text of the year `<span>`, untrimmed.
    pub inline_text: Option<String>,
    /// Up to two leading segments of the row's `<small>` note.
    pub segments: Vec<String>,
}

/// Builds the selector for rows tagged with `row_class`.
pub fn row_selector(row_class: &str) -> Result<Selector> {
    Selector::parse(&format!(".{}", row_class))
        .map_err(|e| Error::Selector(format!("{}: {:?}", row_class, e)))
}

/// Extracts every row tagged with `row_class` from a whole page.
pub fn extract_rows(html: &str, row_class: &str) -> Result<Vec<Row>> {
    let selector = row_selector(row_class)?;
    let document = Html::parse_document(html);
    Ok(document.select(&selector).map(extract_row).collect())
}

pub fn extract_row(element: ElementRef<'_>) -> Row {
    let anchor = element.select(&ANCHOR_SELECTOR).find_map(|a| {
        let text = clean_text(&a.text().collect::<String>());
        if text.is_empty() {
            return None;
        }
        Some(Anchor {
            text,
            href: a.value().attr("href").map(str::to_string),
        })
    });

    let inline_text = element
        .select(&YEAR_SELECTOR)
        .next()
        .or_else(|| element.select(&SPAN_SELECTOR).next())
        .map(|span| span.text().collect::<String>());

    let segments = element
        .select(&SMALL_SELECTOR)
        .next()
        .map(small_segments)
        .unwrap_or_default();

    Row {
        anchor,
        inline_text,
        segments,
    }
}

/// Splits a note such as `(Actor, <a>Die Hard</a> (1988))` into
/// `["Actor", "Die Hard"]`. Each child node is one segment; a note that
/// arrives as a single text node is split on its first comma instead.
fn small_segments(small: ElementRef<'_>) -> Vec<String> {
    let mut raw: Vec<String> = small
        .children()
        .filter_map(|child| match child.value() {
            Node::Text(text) => Some(text.to_string()),
            Node::Element(_) => ElementRef::wrap(child).map(|e| e.text().collect::<String>()),
            _ => None,
        })
        .filter(|text| !text.trim().is_empty())
        .take(2)
        .collect();

    if raw.len() == 1 {
        let single = raw[0].clone();
        if let Some((first, rest)) = single.split_once(',') {
            let rest = rest.trim().trim_end_matches(')');
            raw = vec![first.to_string(), rest.to_string()];
        }
    }

    raw.into_iter()
        .enumerate()
        .map(|(i, segment)| {
            if i == 0 {
                clean_text(
                    segment
                        .trim_matches('(')
                        .trim_matches(|c: char| c == ',' || c.is_whitespace()),
                )
            } else {
                clean_text(&segment)
            }
        })
        .filter(|segment| !segment.is_empty())
        .collect()
}
