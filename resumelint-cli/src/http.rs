//! HTTP link probing

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use resumelint_core::{LinkProbe, ProbeError};
use std::time::Duration;

use crate::config::LinksConfig;

/// Probes links with blocking HEAD requests
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(config: &LinksConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl LinkProbe for HttpProbe {
    fn probe(&self, url: &str) -> Result<u16, ProbeError> {
        let target = with_scheme(url);
        match self.client.head(target.as_str()).send() {
            Ok(response) => Ok(response.status().as_u16()),
            Err(e) if e.is_timeout() => Err(ProbeError::Timeout {
                url: url.to_string(),
            }),
            Err(e) => Err(ProbeError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

/// Bare `www.` links are probed over https
fn with_scheme(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
