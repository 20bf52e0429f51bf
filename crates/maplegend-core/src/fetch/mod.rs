//! Legend JSON fetching.
//!
//! Uses the curl crate (libcurl) to GET `{service}/legend?f=json`. No retry is
//! attempted here; any transport failure, non-2xx status or empty body is
//! returned to the caller.

mod body;

use std::time::Duration;

use crate::config::LegendConfig;
use crate::error::FetchError;
use crate::url_model::legend_query_url;

/// Retrieves the raw legend JSON for a sanitized service URL.
pub trait LegendFetcher {
    fn fetch_legend_json(&self, service_url: &str) -> Result<String, FetchError>;
}

/// Blocking libcurl fetcher configured from [`LegendConfig`].
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    timeout: Duration,
    proxy: Option<String>,
    user_agent: Option<String>,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::from_config(&LegendConfig::default())
    }
}

impl CurlFetcher {
    pub fn from_config(cfg: &LegendConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            proxy: cfg.effective_proxy().map(String::from),
            user_agent: cfg.user_agent.clone(),
        }
    }

    /// Performs a GET on `url` and returns the status code and body bytes.
    fn get(&self, url: &str) -> Result<(u32, Vec<u8>), FetchError> {
        let mut data = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if let Some(proxy) = &self.proxy {
            easy.proxy(proxy)?;
        }
        if let Some(agent) = &self.user_agent {
            easy.useragent(agent)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|chunk| {
                data.extend_from_slice(chunk);
                Ok(chunk.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, data))
    }
}

impl LegendFetcher for CurlFetcher {
    fn fetch_legend_json(&self, service_url: &str) -> Result<String, FetchError> {
        let url = legend_query_url(service_url);
        tracing::debug!(url = %url, "fetching legend");

        let (code, data) = self.get(&url).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "legend request failed");
            e
        })?;
        if !(200..300).contains(&code) {
            tracing::warn!(url = %url, status = code, "legend request returned non-success status");
            return Err(FetchError::Http(code));
        }

        body::decode_body(data)
    }
}
