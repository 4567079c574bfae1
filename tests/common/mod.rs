#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;

use actor_films::error::{Error, Result};
use actor_films::models::ProfileRef;
use actor_films::scrapers::PageSource;

/// Serves fixed pages and records which profiles were requested.
pub struct StaticPages {
    pub search: String,
    pub profile: Option<String>,
    pub profile_requests: Mutex<Vec<String>>,
}

impl StaticPages {
    pub fn new(search: String, profile: Option<String>) -> Self {
        Self {
            search,
            profile,
            profile_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_profiles(&self) -> Vec<String> {
        self.profile_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for StaticPages {
    async fn search_page(&self, _query: &str) -> Result<String> {
        Ok(self.search.clone())
    }

    async fn profile_page(&self, profile_ref: &ProfileRef) -> Result<String> {
        self.profile_requests.lock().unwrap().push(profile_ref.0.clone());
        self.profile.clone().ok_or(Error::HttpStatus {
            status: 404,
            url: profile_ref.0.clone(),
        })
    }
}

/// Every request answers 503 Service Unavailable.
pub struct UnreachableSite;

#[async_trait]
impl PageSource for UnreachableSite {
    async fn search_page(&self, query: &str) -> Result<String> {
        Err(Error::HttpStatus {
            status: 503,
            url: format!("/find?q={}", query),
        })
    }

    async fn profile_page(&self, profile_ref: &ProfileRef) -> Result<String> {
        Err(Error::HttpStatus {
            status: 503,
            url: profile_ref.0.clone(),
        })
    }
}

pub fn search_row(name: &str, href: &str, known_for: Option<(&str, &str)>) -> String {
    let note = known_for
        .map(|(role, work)| {
            format!(r#" <small>({}, <a href="/title/tt0000001/">{}</a> (1988))</small>"#, role, work)
        })
        .unwrap_or_default();
    format!(
        r#"<tr class="findResult"><td class="primary_photo"><a href="{0}"><img src="p.jpg"/></a></td><td class="result_text"> <a href="{0}">{1}</a>{2}</td></tr>"#,
        href, name, note
    )
}

pub fn search_page(rows: &[String]) -> String {
    format!(
        r#"<html><body><h3 class="findSectionHeader">Names</h3><table class="findList">{}</table></body></html>"#,
        rows.concat()
    )
}

pub fn filmo_row(category: &str, index: usize, title: &str, year: &str) -> String {
    format!(
        r#"<div class="filmo-row odd" id="{0}-tt{1:07}"><span class="year_column">&nbsp;{2}</span><b><a href="/title/tt{1:07}/">{3}</a></b><br/>Role</div>"#,
        category, index, year, title
    )
}

pub fn filmo_section(label: &str, rows: &[String]) -> String {
    let category = label.to_lowercase();
    format!(
        r#"<div id="filmo-head-{0}" class="head" data-category="{0}"><span class="show-link">Show all</span><a name="{0}">{1}</a> ({2} credits)</div><div class="filmo-category-section">{3}</div>"#,
        category,
        label,
        rows.len(),
        rows.concat()
    )
}

pub fn profile_page(sections: &[String]) -> String {
    format!(
        r#"<html><body><div id="filmography">{}</div><div id="footer"><a name="trivia">Trivia</a></div></body></html>"#,
        sections.concat()
    )
}

/// 125 acting credits, newest first: "McClane" without a year down to
/// "The First Deadly Sin" (1980), surrounded by non-acting sections.
pub fn bruce_willis_profile() -> String {
    let mut acting = vec![filmo_row("actor", 0, "McClane", "")];
    for i in 1..124 {
        acting.push(filmo_row("actor", i, &format!("Film {}", i), &(2022 - (i % 40)).to_string()));
    }
    acting.push(filmo_row("actor", 124, "The First Deadly Sin", "1980"));

    profile_page(&[
        filmo_section("Actor", &acting),
        filmo_section("Producer", &[filmo_row("producer", 200, "Produced Film", "2010")]),
        filmo_section("Soundtrack", &[filmo_row("soundtrack", 300, "Sang", "1987")]),
    ])
}
