use std::time::Duration;

use serde::Serialize;

use crate::{ScanError, ScanFailureKind, ScanVerdict};

/// Public endpoint of the Link Shield scanning service.
pub const DEFAULT_ENDPOINT: &str = "https://public-link-shield-api.onrender.com/api/scan";

#[derive(Debug, Clone)]
pub struct ScanSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Serialize)]
struct ScanRequestBody<'a> {
    url: &'a str,
}

#[async_trait::async_trait]
pub trait Scanner: Send + Sync {
    async fn scan(&self, url: &str) -> Result<ScanVerdict, ScanError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestScanner {
    settings: ScanSettings,
}

impl ReqwestScanner {
    pub fn new(settings: ScanSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ScanError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ScanError::new(ScanFailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Scanner for ReqwestScanner {
    /// Single request/response exchange: POSTs the target URL and parses the
    /// service verdict.
    async fn scan(&self, url: &str) -> Result<ScanVerdict, ScanError> {
        let target = reqwest::Url::parse(url)
            .map_err(|err| ScanError::new(ScanFailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .post(&self.settings.endpoint)
            .json(&ScanRequestBody {
                url: target.as_str(),
            })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::new(
                ScanFailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        response.json::<ScanVerdict>().await.map_err(|err| {
            if err.is_decode() {
                ScanError::new(ScanFailureKind::MalformedResponse, err.to_string())
            } else {
                map_reqwest_error(err)
            }
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ScanError {
    if err.is_timeout() {
        return ScanError::new(ScanFailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ScanError::new(ScanFailureKind::MalformedResponse, err.to_string());
    }
    ScanError::new(ScanFailureKind::Network, err.to_string())
}
