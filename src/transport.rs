//! # Transport
//!
//! The network seam: one descriptor in, body text out. The renderer never
//! looks at status codes, so the response carries only the body. Tests
//! substitute their own [`Transport`] to observe descriptors without a
//! network.

use anyhow::{Context, Result};

use crate::request::{RequestDescriptor, Verb};

/// Raw response body as returned by the remote catalog
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub body: String,
}

/// Capability to execute one outbound call
pub trait Transport {
    fn send(&self, request: &RequestDescriptor) -> Result<RawResponse>;
}

/// Production transport over a blocking reqwest client
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &RequestDescriptor) -> Result<RawResponse> {
        tracing::debug!("Executing {} {}", request.verb.as_str(), request.url);

        let mut builder = match request.verb {
            Verb::Get => self.client.get(&request.url),
            Verb::Post => self.client.post(&request.url),
            Verb::Delete => self.client.delete(&request.url),
        };
        if let Some(body) = &request.body {
            // .json() also sets Content-Type: application/json
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .with_context(|| format!("request to {} failed", request.url))?;
        let body = response
            .text()
            .context("failed to read response body")?;

        tracing::debug!("Received {} bytes", body.len());
        Ok(RawResponse { body })
    }
}
