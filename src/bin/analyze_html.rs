use anyhow::{Context, Result};
use scraper::{Html, Selector};
use std::env;
use std::fs;

use actor_films::config::Config;
use actor_films::parsers::{parse_candidates, FILMOGRAPHY_ROW_CLASS, RESULT_ROW_CLASS};
use actor_films::scrapers::{ImdbScraper, PageSource};

// Saves the raw search and profile pages for a query and reports what the
// row and section selectors match, for checking the parsers against a
// changed page layout.
#[tokio::main]
async fn main() -> Result<()> {
    let query = env::args()
        .nth(1)
        .context("usage: analyze_html <actor name>")?;
    let config = Config::load(None)?;
    let scraper = ImdbScraper::new(&config)?;

    println!("Fetching search results for {}...", query);
    let html = scraper.search_page(&query).await?;
    fs::write("search_sample.html", &html)?;
    let result_rows = format!("td.{}", RESULT_ROW_CLASS);
    report_selectors(&html, &[result_rows.as_str(), "td.primary_photo", "small"]);

    let candidates = parse_candidates(&html)?;
    println!("Parsed {} candidates", candidates.len());
    for candidate in &candidates {
        println!("  {} -> {}", candidate.name, candidate.profile_ref);
    }

    let Some(first) = candidates.first() else {
        return Ok(());
    };

    println!("\nFetching profile of {}...", first.name);
    let html = scraper.profile_page(&first.profile_ref).await?;
    fs::write("profile_sample.html", &html)?;
    let filmo_rows = format!(".{}", FILMOGRAPHY_ROW_CLASS);
    report_selectors(&html, &[filmo_rows.as_str(), "span.year_column", "a[name]"]);

    let document = Html::parse_document(&html);
    if let Ok(selector) = Selector::parse("a[name]") {
        let labels: Vec<&str> = document
            .select(&selector)
            .filter_map(|marker| marker.value().attr("name"))
            .collect();
        println!("Section markers: {}", labels.join(", "));
    }

    Ok(())
}

fn report_selectors(html: &str, selectors: &[&str]) {
    let document = Html::parse_document(html);
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            let count = document.select(&selector).count();
            println!("Selector '{}' matched {} elements", selector_str, count);
        }
    }
}
