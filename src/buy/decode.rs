//! Response envelopes and their decoding.
//!
//! Each Buy API listing endpoint wraps its records in a single top-level
//! field. An [`Envelope`] names that field and the record type; [`decode`]
//! deserializes the body and hands back the records. A missing field, a
//! `null` field or a body that is not JSON fails with [`BuyError::Decode`];
//! there are no partial results.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::buy::product::{Product, ProductTag};
use crate::buy::BuyError;
use crate::clients::HttpResponse;

/// A top-level response object wrapping a sequence of records.
pub(crate) trait Envelope: DeserializeOwned {
    /// The record type inside the envelope.
    type Item;

    /// The JSON field holding the records.
    const FIELD: &'static str;

    fn into_items(self) -> Vec<Self::Item>;
}

/// `{"product_listings": [...]}`
#[derive(Debug, Deserialize)]
pub(crate) struct ProductListings {
    product_listings: Vec<Product>,
}

impl Envelope for ProductListings {
    type Item = Product;
    const FIELD: &'static str = "product_listings";

    fn into_items(self) -> Vec<Product> {
        self.product_listings
    }
}

/// `{"tags": [...]}`
#[derive(Debug, Deserialize)]
pub(crate) struct ProductTags {
    tags: Vec<ProductTag>,
}

impl Envelope for ProductTags {
    type Item = ProductTag;
    const FIELD: &'static str = "tags";

    fn into_items(self) -> Vec<ProductTag> {
        self.tags
    }
}

/// Decodes `response` as envelope `E` and returns its records.
pub(crate) fn decode<E: Envelope>(response: &HttpResponse) -> Result<Vec<E::Item>, BuyError> {
    response
        .json::<E>()
        .map(Envelope::into_items)
        .map_err(|source| BuyError::Decode {
            field: E::FIELD,
            source,
        })
}
