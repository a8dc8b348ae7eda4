//! The seam between request assembly and the network.

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Sends a single request and returns the raw response.
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation. Tests and applications with their own HTTP stack can
/// provide another one and hand it to
/// [`BuyClient::with_transport`](crate::buy::BuyClient::with_transport).
///
/// Implementations are expected to classify non-2xx responses as
/// [`HttpError::Response`]; callers do not look at status codes of
/// successful sends.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use shopify_buy::clients::{HttpError, HttpRequest, HttpResponse, Transport};
///
/// struct Canned(&'static str);
///
/// impl Transport for Canned {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(200, HashMap::new(), self.0))
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Sends `request` once.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation failures, network failures and
    /// non-2xx responses.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}
