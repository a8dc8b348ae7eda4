//! HTTP client for Buy API communication.
//!
//! This module provides [`HttpClient`], the default [`Transport`]. It owns
//! base URL composition and authentication; callers only hand it relative
//! paths and query parameters.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::BuyConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to a shop's Buy API.
///
/// The client handles:
/// - Base URI construction from the shop domain or the `api_host` override
/// - Default headers: `Authorization` (basic auth with the API key),
///   `Accept` and `User-Agent`
/// - Classifying non-2xx responses as [`HttpError::Response`]
///
/// Each call sends exactly one request. There is no retry loop; a failure is
/// returned as soon as it happens.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_buy::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "api/apps/8/product_listings.json")
///     .query_param("page", "1")
///     .build();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &BuyConfig) -> Result<Self, HttpError> {
        let base_uri = config.api_host().map_or_else(
            || format!("https://{}", config.shop_domain().as_ref()),
            |host| host.as_ref().to_string(),
        );

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shopify Buy Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Basic {}", BASE64.encode(config.api_key().as_ref())),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_uri,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the absolute URL (without query string) for a relative path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_uri, path.trim_start_matches('/'))
    }

    /// Returns the full URL a request is sent to, query string included.
    ///
    /// The query is [`HttpRequest::query_string`] verbatim.
    #[must_use]
    pub fn request_url(&self, request: &HttpRequest) -> String {
        let url = self.url_for(&request.path);
        let query = request.query_string();
        if query.is_empty() {
            url
        } else {
            format!("{url}?{query}")
        }
    }

    /// Sends a request to the Buy API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A network error or timeout occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = self.request_url(&request);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::debug!("Sending {} request to {}", request.http_method, request.path);
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;
        let response = HttpResponse::new(code, res_headers, body);

        tracing::debug!("Received {} from {}", code, request.path);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify Buy API at {}, received reason: {}",
                request.path,
                reason
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response into a compact JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(serde_json::Value::Object(body)) => {
                for key in ["errors", "error", "error_description"] {
                    if let Some(value) = body.get(key) {
                        error_body.insert(key.to_string(), value.clone());
                    }
                }
            }
            _ if !response.body.trim().is_empty() => {
                error_body.insert(
                    "raw_body".to_string(),
                    serde_json::Value::String(response.body.clone()),
                );
            }
            _ => {}
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.request(request).await
    }
}
