//! Remote SVG retrieval.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use url::Url;

use crate::config::UpstreamConfig;
use crate::fetch::content_type::content_type_is_svg;
use crate::fetch::error::FetchError;
use crate::observability::metrics;

/// Fetches SVG text over HTTP(S).
///
/// Built once at startup and cloned into handlers; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct SvgFetcher {
    client: reqwest::Client,
}

impl SvgFetcher {
    /// Build a fetcher from upstream settings.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(Policy::limited(config.max_redirects));

        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// GET `url` once and return the body if it is a non-empty SVG response.
    pub async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        tracing::debug!(url = %url, "Fetching SVG");

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
        match content_type {
            Some(ref value) if content_type_is_svg(value) => {}
            other => {
                return Err(FetchError::ContentType(
                    other.unwrap_or_else(|| "null".to_string()),
                ))
            }
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Err(FetchError::EmptyBody);
        }

        metrics::record_upstream_bytes(text.len());
        tracing::debug!(url = %url, bytes = text.len(), "Fetched SVG");

        Ok(text)
    }
}
