//! Buy API product listings.
//!
//! This module contains everything between a configured client and typed
//! product records:
//!
//! - [`PathTemplate`] / [`PathParams`]: endpoint paths with `{app_id}` placeholders
//! - [`BuyClient`]: holds the transport and the resolved path parameters
//! - [`ProductService`]: list products, look up by handle, list tags
//! - [`Product`] and friends: the records returned
//! - [`BuyError`] / [`TemplateError`]: what can go wrong
//!
//! # Endpoints
//!
//! | Operation | Path | Query | Envelope field |
//! |---|---|---|---|
//! | `get_products` | `api/apps/{app_id}/product_listings.json` | `page`, `limit` | `product_listings` |
//! | `get_product_by_handle` | `api/apps/{app_id}/product_listings.json` | `handle` | `product_listings` |
//! | `get_product_tags` | `api/apps/{app_id}/product_listings/tags.json` | `page`, `limit` | `tags` |

mod client;
mod decode;
mod errors;
mod path;
mod product;
mod service;

pub use client::BuyClient;
pub use errors::{BuyError, TemplateError};
pub use path::{PathParams, PathTemplate};
pub use product::{
    CompareAtPrice, Product, ProductImage, ProductOption, ProductOptionValue, ProductTag,
    ProductVariant, VariantRef,
};
pub use service::{ProductService, PRODUCT_LISTINGS_PATH, PRODUCT_LISTINGS_TAGS_PATH};
