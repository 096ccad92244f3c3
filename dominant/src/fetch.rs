//! Remote image retrieval

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{FetchError, InputError};

/// An absolute `http`/`https` URL that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(Url);

impl ImageUrl {
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(InputError::Missing);
        }

        // Url::parse rejects relative references, so anything that parses is absolute
        let url = Url::parse(raw).map_err(InputError::Invalid)?;
        match url.scheme() {
            "http" | "https" => Ok(ImageUrl(url)),
            scheme => Err(InputError::UnsupportedScheme(scheme.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Fetcher {
    timeout: Duration,
    user_agent: String,
}

impl Fetcher {
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self {
            timeout,
            user_agent: user_agent.into(),
        }
    }

    /// Download the full response body in a single blocking request.
    ///
    /// The status code is not checked: whatever body comes back is handed to the
    /// decoder. A fresh client is built for every call so nothing is shared between requests.
    pub fn fetch(&self, url: &ImageUrl) -> Result<Vec<u8>, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(FetchError::Request)?;

        let response = client
            .get(url.0.clone())
            .send()
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Fetching {url} returned {status}, decoding the body anyway");
        }

        let bytes = response.bytes().map_err(FetchError::Read)?;
        log::debug!("Fetched {} bytes from {url}", bytes.len());

        Ok(bytes.to_vec())
    }
}
