mod channel;
mod delivery;
mod types;

pub use channel::PushPlusChannel;
pub use types::DispatchConfig;

use anyhow::{Context, Result};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use url::Url;

use crate::http::USER_AGENT;

/// PushPlus push-gateway dispatcher with retries and backup routes
pub struct NotificationDispatcher {
    client: Client,
    config: DispatchConfig,
}

impl NotificationDispatcher {
    pub fn new() -> Result<Self> {
        Self::with_config(DispatchConfig::default())
    }

    pub fn with_config(config: DispatchConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(browser_headers())
            .build()
            .context("Failed to create notification HTTP client")?;

        Ok(Self { client, config })
    }

    /// Build a gateway URL carrying the message as query parameters
    fn build_send_url(
        base: &str,
        token: &str,
        title: &str,
        content: &str,
    ) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(base)?;
        url.query_pairs_mut()
            .append_pair("token", token)
            .append_pair("title", title)
            .append_pair("content", content)
            .append_pair("template", types::TEMPLATE);
        Ok(url)
    }
}

/// Headers a desktop browser would send; reqwest adds Accept-Encoding itself
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.5"),
    );
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers
}
