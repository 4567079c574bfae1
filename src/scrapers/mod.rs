use async_trait::async_trait;

use crate::error::Result;
use crate::models::ProfileRef;

mod imdb;

pub use imdb::ImdbScraper;

/// Where search and profile pages come from.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn search_page(&self, query: &str) -> Result<String>;
    async fn profile_page(&self, profile_ref: &ProfileRef) -> Result<String>;
}
