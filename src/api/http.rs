use anyhow::Context;
use serde::Serialize;
use std::future::Future;
use url::Url;

/// A single HTTP call, fully described before it is sent
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: reqwest::Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Already-encoded request body
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: reqwest::Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Attach a JSON body and the matching content type
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_string(body)?);
        self.headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        Ok(self)
    }
}

/// What came back over the wire, before any interpretation
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// HTTP status code (200, 404, etc.)
    pub status: u16,

    /// Human-readable status text ("OK", "Not Found", etc.), may be empty
    pub status_text: String,

    /// Raw response body
    pub body: String,
}

/// Performs the raw exchange. An `Err` means no usable HTTP response was
/// obtained; any status code, success or not, is an `Ok`.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = anyhow::Result<RawResponse>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(accept_invalid_certs: bool) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> anyhow::Result<RawResponse> {
        let mut request_builder = self.client.request(request.method, &request.url);

        for (key, value) in &request.headers {
            request_builder = request_builder.header(key, value);
        }

        if let Some(body) = request.body {
            request_builder = request_builder.body(body);
        }

        let response = request_builder.send().await?;

        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string();

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(RawResponse {
            status,
            status_text,
            body,
        })
    }
}

/// Build `{base}/{id}` with the id as a single percent-encoded path segment
pub(crate) fn resource_url(base_url: &str, id: &str) -> Result<String, String> {
    // `url` resolves dot segments instead of encoding them
    if id == "." || id == ".." {
        return Err(format!("Invalid ID: {id}"));
    }

    let mut url = Url::parse(base_url).map_err(|e| format!("Invalid URL: {e}"))?;

    url.path_segments_mut()
        .map_err(|_| format!("Invalid URL: {base_url} cannot have path segments"))?
        .pop_if_empty()
        .push(id);

    Ok(url.to_string())
}
