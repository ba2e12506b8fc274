// OTA client - sends the build list request and reports whatever comes back

use std::io::Write;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

use super::request::BuildRequest;
use crate::config::OtaConfig;

/// Raw server reply. The body is never parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Anything that can carry a `BuildRequest` to the server.
///
/// Any HTTP status counts as a response; only a failure to get one at all
/// is an error.
#[async_trait]
pub trait Transport {
    async fn fetch(&self, request: &BuildRequest) -> Result<BuildResponse>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &OtaConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// Turn the descriptor into a concrete GET with no body.
    pub fn prepare(&self, request: &BuildRequest) -> Result<reqwest::Request> {
        let mut headers = HeaderMap::new();
        for (name, value) in request.headers() {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes())
                    .with_context(|| format!("invalid header name {name}"))?,
                HeaderValue::from_str(value)
                    .with_context(|| format!("invalid value for header {name}"))?,
            );
        }

        self.client
            .request(BuildRequest::METHOD, request.url())
            .headers(headers)
            .build()
            .with_context(|| format!("invalid request URL {}", request.url()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, request: &BuildRequest) -> Result<BuildResponse> {
        let prepared = self.prepare(request)?;

        let response = self
            .client
            .execute(prepared)
            .await
            .with_context(|| format!("request to {} failed", request.url()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .with_context(|| format!("failed to read response body from {}", request.url()))?;

        Ok(BuildResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// The single completion step.
///
/// A response body goes to `out` byte for byte, whatever the status. A
/// transport error takes the same path and is written as one line of text.
/// Only a failing `out` is returned as an error.
pub fn report<W: Write>(outcome: Result<BuildResponse>, out: &mut W) -> std::io::Result<()> {
    match outcome {
        Ok(response) => {
            log::info!(
                "Server answered HTTP {} ({} bytes)",
                response.status,
                response.body.len()
            );
            out.write_all(&response.body)?;
        }
        Err(e) => {
            log::warn!("No response from OTA server: {:#}", e);
            writeln!(out, "{:#}", e)?;
        }
    }

    out.flush()
}

/// Fetch the build list and report it.
pub async fn check_for_builds<T, W>(
    transport: &T,
    request: &BuildRequest,
    out: &mut W,
) -> std::io::Result<()>
where
    T: Transport + Sync,
    W: Write,
{
    log::info!("Querying {}", request.url());
    let outcome = transport.fetch(request).await;
    report(outcome, out)
}
