//! Product listing operations.
//!
//! [`ProductService`] has one method per Buy API product operation. Each is a
//! straight composition: resolve the endpoint path, build the query, send one
//! request, decode the envelope. Results come back exactly as the service
//! returned them and every failure is passed to the caller unchanged.
//!
//! Pagination is page-number based and driven by the caller: ask for page 1,
//! then page 2, and so on until a page comes back shorter than `limit`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_buy::ProductService;
//!
//! let mut page = 1;
//! loop {
//!     let products = client.get_products(page, 50).await?;
//!     for product in &products {
//!         println!("{} ({})", product.title, product.handle);
//!     }
//!     if products.len() < 50 {
//!         break;
//!     }
//!     page += 1;
//! }
//! ```

use crate::buy::decode::{ProductListings, ProductTags};
use crate::buy::{BuyClient, BuyError, PathTemplate, Product, ProductTag};
use crate::clients::Transport;

/// The product listings endpoint. Also serves lookups by handle.
pub const PRODUCT_LISTINGS_PATH: PathTemplate =
    PathTemplate::new("api/apps/{app_id}/product_listings.json");

/// The product listing tags endpoint.
pub const PRODUCT_LISTINGS_TAGS_PATH: PathTemplate =
    PathTemplate::new("api/apps/{app_id}/product_listings/tags.json");

/// Read access to a sales channel's product listings.
#[allow(async_fn_in_trait)]
pub trait ProductService {
    /// Lists one page of products.
    ///
    /// `page` and `limit` are sent as-is; the service decides what an
    /// out-of-range value means.
    ///
    /// # Errors
    ///
    /// Returns [`BuyError`] if the request fails or the response does not
    /// contain a `product_listings` array.
    async fn get_products(&self, page: u32, limit: u32) -> Result<Vec<Product>, BuyError>;

    /// Fetches the products whose handle is `handle`.
    ///
    /// Handles are unique within a shop, so this normally yields zero or one
    /// product, but whatever the service returns is passed through. An empty
    /// handle sends no `handle` parameter at all.
    ///
    /// # Errors
    ///
    /// Returns [`BuyError`] if the request fails or the response does not
    /// contain a `product_listings` array.
    async fn get_product_by_handle(&self, handle: &str) -> Result<Vec<Product>, BuyError>;

    /// Lists one page of product tags.
    ///
    /// # Errors
    ///
    /// Returns [`BuyError`] if the request fails or the response does not
    /// contain a `tags` array.
    async fn get_product_tags(&self, page: u32, limit: u32) -> Result<Vec<ProductTag>, BuyError>;
}

impl<T: Transport> ProductService for BuyClient<T> {
    async fn get_products(&self, page: u32, limit: u32) -> Result<Vec<Product>, BuyError> {
        self.fetch::<ProductListings, _, _>(
            &PRODUCT_LISTINGS_PATH,
            [("page", page.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    async fn get_product_by_handle(&self, handle: &str) -> Result<Vec<Product>, BuyError> {
        self.fetch::<ProductListings, _, _>(&PRODUCT_LISTINGS_PATH, [("handle", handle)])
            .await
    }

    async fn get_product_tags(&self, page: u32, limit: u32) -> Result<Vec<ProductTag>, BuyError> {
        self.fetch::<ProductTags, _, _>(
            &PRODUCT_LISTINGS_TAGS_PATH,
            [("page", page.to_string()), ("limit", limit.to_string())],
        )
        .await
    }
}
