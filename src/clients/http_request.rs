//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder.

use std::fmt;

/// HTTP methods a request can use.
///
/// The Buy API product listing endpoints are read-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
        }
    }
}

/// A request to be sent through a [`Transport`](crate::clients::Transport).
///
/// Query parameters keep the order in which they were added, and
/// [`query_string`](Self::query_string) is exactly the query the transport
/// puts on the wire.
///
/// # Example
///
/// ```rust
/// use shopify_buy::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "api/apps/8/product_listings.json")
///     .query_param("page", 1.to_string())
///     .query_param("limit", 50.to_string())
///     .build();
///
/// assert_eq!(request.query_string(), "page=1&limit=50");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path, relative to the transport's base URI.
    pub path: String,
    /// Query parameters in insertion order.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns the value of the first query parameter named `key`.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Encodes the query parameters as `key=value` pairs joined by `&`.
    ///
    /// Keys and values are percent-encoded (a space becomes `%20`). Returns
    /// an empty string when there are no parameters.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Adds a single query parameter.
    ///
    /// Parameters with an empty value are dropped rather than sent as `key=`.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.query.push((key.into(), value));
        }
        self
    }

    /// Adds every parameter from `params`, in iteration order.
    #[must_use]
    pub fn query<K, V>(self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        params
            .into_iter()
            .fold(self, |builder, (key, value)| builder.query_param(key, value))
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
    }

    #[test]
    fn test_builder_creates_get_request() {
        let request =
            HttpRequest::builder(HttpMethod::Get, "api/apps/8/product_listings.json").build();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "api/apps/8/product_listings.json");
        assert!(request.query.is_empty());
        assert_eq!(request.query_string(), "");
    }

    #[test]
    fn test_query_params_keep_insertion_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "x.json")
            .query_param("page", "2")
            .query_param("limit", "25")
            .build();

        assert_eq!(request.query_string(), "page=2&limit=25");
        assert_eq!(request.query_value("limit"), Some("25"));
    }

    #[test]
    fn test_empty_query_values_are_omitted() {
        let request = HttpRequest::builder(HttpMethod::Get, "x.json")
            .query([("handle", ""), ("page", "1")])
            .build();

        assert_eq!(request.query, vec![("page".to_string(), "1".to_string())]);
        assert!(request.query_value("handle").is_none());
    }

    #[test]
    fn test_query_string_percent_encodes_values() {
        let request = HttpRequest::builder(HttpMethod::Get, "x.json")
            .query_param("handle", "red shirt&co")
            .build();

        assert_eq!(request.query_string(), "handle=red%20shirt%26co");
    }
}
