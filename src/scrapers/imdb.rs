use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::Config;
use crate::error::Result;
use crate::models::ProfileRef;
use crate::scrapers::PageSource;
use crate::utils::http::{create_client, fetch_text};

pub struct ImdbScraper {
    client: Client,
    base_url: Url,
}

impl ImdbScraper {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: create_client(config)?,
            base_url: Url::parse(&config.base_url)?,
        })
    }

    /// `s=nm` restricts the search to people.
    pub fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = self.base_url.join("/find")?;
        url.query_pairs_mut()
            .append_pair("s", "nm")
            .append_pair("q", query)
            .append_pair("ref_", "nv_sr_sm");
        Ok(url)
    }

    pub fn profile_url(&self, profile_ref: &ProfileRef) -> Result<Url> {
        let mut url = self.base_url.join(&profile_ref.0)?;
        url.set_fragment(Some("actor"));
        Ok(url)
    }
}

#[async_trait]
impl PageSource for ImdbScraper {
    async fn search_page(&self, query: &str) -> Result<String> {
        let url = self.search_url(query)?;
        fetch_text(&self.client, url.as_str()).await
    }

    async fn profile_page(&self, profile_ref: &ProfileRef) -> Result<String> {
        let url = self.profile_url(profile_ref)?;
        fetch_text(&self.client, url.as_str()).await
    }
}
