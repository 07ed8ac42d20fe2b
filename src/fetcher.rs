use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

use crate::ExtractError;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; PageExtract/0.1)";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP fetcher used for the single GET of a run
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>, user_agent: Option<&str>) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()?;

        Ok(Self { client })
    }

    /// Fetches `url` and returns the body as text.
    ///
    /// Any non-2xx status is an error; the body of such a response is never read.
    pub fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        info!("Fetching {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        debug!("{} answered {}", url, response.status());

        let html = response.text()?;
        debug!("Read {} bytes from {}", html.len(), url);
        Ok(html)
    }
}
