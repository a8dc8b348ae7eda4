//! HTTP transport for the Buy API.
//!
//! This module provides the layer that actually talks to the network. It
//! composes URLs, attaches authentication headers and turns non-2xx
//! responses into errors.
//!
//! # Overview
//!
//! - [`Transport`]: the trait the product accessors are written against
//! - [`HttpClient`]: the reqwest-backed [`Transport`]
//! - [`HttpRequest`]: a request to be sent, built with [`HttpRequest::builder`]
//! - [`HttpResponse`]: a raw response with a typed [`HttpResponse::json`] decode
//! - [`HttpMethod`]: supported HTTP methods
//! - [`HttpError`]: everything a send can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_buy::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "api/apps/8/product_listings.json")
//!     .query_param("handle", "red-shirt")
//!     .build();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Every call sends one request and returns its outcome; callers that
//! want retries wrap the call themselves.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::Transport;
