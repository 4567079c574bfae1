use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};

pub fn create_client(config: &Config) -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()?;

    Ok(client)
}

/// Single GET returning the body text. Failures are returned as they are;
/// nothing is retried.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    info!("Fetching {}", url);

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for {}: {}", url, e);
        Error::from(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!("HTTP error {}: {}", status, url);
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    info!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
