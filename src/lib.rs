//! # Shopify Buy API Rust client
//!
//! A Rust client for the Shopify Buy API: the read-only product listing
//! endpoints a sales channel app uses to show a shop's catalogue.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BuyConfig`] and [`BuyConfigBuilder`]
//! - Validated newtypes for the API key, app id and shop domain
//! - An async HTTP transport ([`HttpClient`]) behind the [`Transport`] trait
//! - The [`ProductService`] operations: list products, look up a product by
//!   handle, list product tags
//! - Plain product records ([`Product`], [`ProductVariant`], ...) that keep
//!   prices exactly as the service sent them
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_buy::{ApiKey, AppId, BuyConfig, ShopDomain};
//!
//! let config = BuyConfig::builder()
//!     .api_key(ApiKey::new("your-storefront-api-key").unwrap())
//!     .app_id(AppId::new("8").unwrap())
//!     .shop_domain(ShopDomain::new("your-store").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Fetching Products
//!
//! ```rust,ignore
//! use shopify_buy::{BuyClient, ProductService};
//!
//! let client = BuyClient::new(&config)?;
//!
//! // One page of products
//! let products = client.get_products(1, 50).await?;
//!
//! // A product by handle (zero or one result in practice)
//! let matches = client.get_product_by_handle("red-shirt").await?;
//!
//! // One page of tags
//! let tags = client.get_product_tags(1, 50).await?;
//! ```
//!
//! ## Testing Against a Fake Transport
//!
//! ```rust
//! use std::collections::HashMap;
//! use shopify_buy::clients::{HttpError, HttpRequest, HttpResponse, Transport};
//! use shopify_buy::{AppId, BuyClient, ProductService};
//!
//! struct Canned;
//!
//! impl Transport for Canned {
//!     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
//!         Ok(HttpResponse::new(200, HashMap::new(), r#"{"tags":[{"id":1,"title":"sale"}]}"#))
//!     }
//! }
//!
//! let client = BuyClient::with_transport(Canned, AppId::new("8").unwrap());
//! let tags = tokio_test::block_on(client.get_product_tags(1, 10)).unwrap();
//! assert_eq!(tags[0].title, "sale");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is built once and passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **No hidden recovery**: one request per call, no retries, no caching;
//!   every error reaches the caller as it happened
//! - **Thread-safe**: the client and configuration are `Send + Sync`

pub mod buy;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use buy::{
    BuyClient, BuyError, CompareAtPrice, Product, ProductImage, ProductOption,
    ProductOptionValue, ProductService, ProductTag, ProductVariant, TemplateError, VariantRef,
};
pub use config::{ApiKey, AppId, BuyConfig, BuyConfigBuilder, HostUrl, ShopDomain};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, Transport,
};
