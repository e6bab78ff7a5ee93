//! Access point manufacturer lookup by BSSID prefix (OUI).
//!
//! The HTTP transport sits behind `HttpFetch` so lookups can be exercised
//! without network access.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_VENDOR_API_URL: &str = "https://macvendors.co/api";
pub const DEFAULT_VENDOR_TIMEOUT_SECONDS: u64 = 5;

/// Manufacturer reported when the service knows the prefix but not the company.
pub const UNKNOWN_MANUFACTURER: &str = "Unknown";

static OUI_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Fa-f]{2}[:-][0-9A-Fa-f]{2}[:-][0-9A-Fa-f]{2}")
        .expect("OUI pattern is valid")
});

#[derive(Debug, thiserror::Error)]
pub enum VendorError {
    #[error("'{0}' does not start with a MAC address prefix")]
    InvalidBssid(String),

    #[error("vendor service returned status {0}")]
    Status(u16),

    #[error("vendor request failed: {0}")]
    Transport(String),

    #[error("vendor response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Minimal HTTP response seen by the lookup.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP GET capability.
pub trait HttpFetch {
    fn get(&self, url: &str) -> Result<HttpResponse, VendorError>;
}

/// Blocking `reqwest` client with a request timeout.
pub struct ReqwestFetcher {
    client: reqwest::blocking::Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration) -> Result<Self, VendorError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VendorError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl HttpFetch for ReqwestFetcher {
    fn get(&self, url: &str) -> Result<HttpResponse, VendorError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| VendorError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| VendorError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, Deserialize)]
struct VendorBody {
    #[serde(default)]
    result: Option<VendorResult>,
}

#[derive(Debug, Deserialize)]
struct VendorResult {
    #[serde(default)]
    company: Option<String>,
}

/// First three octets of a BSSID, hyphen-separated and upper-cased
/// (`a4:2b:b0:..` -> `A4-2B-B0`).
pub fn mac_prefix(bssid: &str) -> Result<String, VendorError> {
    let bssid = bssid.trim();
    let prefix = OUI_PATTERN
        .find(bssid)
        .ok_or_else(|| VendorError::InvalidBssid(bssid.to_string()))?;
    Ok(prefix.as_str().replace(':', "-").to_uppercase())
}

/// Resolves manufacturers through a MAC vendor web service.
pub struct VendorLookup<F> {
    fetcher: F,
    base_url: String,
}

impl<F: HttpFetch> VendorLookup<F> {
    pub fn new(fetcher: F, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Manufacturer for `bssid`. Any non-200 status is an error.
    pub fn lookup(&self, bssid: &str) -> Result<String, VendorError> {
        let prefix = mac_prefix(bssid)?;
        let url = format!("{}/{}/json", self.base_url, prefix);
        debug!("Looking up manufacturer for {} via {}", bssid, url);

        let response = self.fetcher.get(&url)?;
        if response.status != 200 {
            return Err(VendorError::Status(response.status));
        }

        let body: VendorBody = serde_json::from_str(&response.body)?;
        Ok(body
            .result
            .and_then(|r| r.company)
            .unwrap_or_else(|| UNKNOWN_MANUFACTURER.to_string()))
    }
}
