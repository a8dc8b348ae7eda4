//! Product listing records.
//!
//! These types mirror the JSON returned by the Buy API's product listing
//! endpoints. They carry no behaviour beyond a few read-only helpers and are
//! returned to the caller exactly as received: sequences keep the service's
//! order, prices stay strings, number literals keep their text, and
//! timestamps are opaque strings.
//!
//! A missing field and a `null` field both fall back to the default (empty
//! string, zero, `false`, empty list). Fields the service documents as
//! nullable are `Option`s instead, so the absence stays visible.
//!
//! # Example
//!
//! ```rust
//! use shopify_buy::Product;
//!
//! let product: Product = serde_json::from_str(r#"{
//!     "product_id": 7,
//!     "title": "Red Shirt",
//!     "handle": "red-shirt",
//!     "vendor": null,
//!     "tags": "sale, summer",
//!     "variants": [{"id": 70, "price": "19.99", "compare_at_price": null}]
//! }"#).unwrap();
//!
//! assert_eq!(product.vendor, "");
//! assert_eq!(product.tag_list(), vec!["sale", "summer"]);
//! assert_eq!(product.variant(70).unwrap().price, "19.99");
//! ```

use std::fmt;

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

/// Deserializes `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A JSON number or string. Numbers keep their literal text.
enum Scalar {
    Number(String),
    Text(String),
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let literal = raw.get();
        if literal.starts_with('"') {
            serde_json::from_str(literal)
                .map(Self::Text)
                .map_err(de::Error::custom)
        } else if literal.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
            Ok(Self::Number(literal.to_string()))
        } else {
            Err(de::Error::invalid_type(
                de::Unexpected::Other(literal),
                &"a number or a string",
            ))
        }
    }
}

/// Writes a number literal back out unchanged.
fn serialize_literal<S: Serializer>(literal: &str, serializer: S) -> Result<S::Ok, S::Error> {
    RawValue::from_string(literal.to_string())
        .map_err(ser::Error::custom)?
        .serialize(serializer)
}

/// A product as published to a sales channel.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Product {
    /// The identifier of the product.
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: i64,

    /// When the listing was created.
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,

    /// When the listing was last updated.
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,

    /// The description of the product in HTML format.
    pub body_html: Option<String>,

    /// The URL-safe slug identifying the product within the shop.
    #[serde(deserialize_with = "null_as_default")]
    pub handle: String,

    /// A categorization for the product.
    #[serde(deserialize_with = "null_as_default")]
    pub product_type: String,

    /// The name of the product.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    /// The name of the product's vendor.
    #[serde(deserialize_with = "null_as_default")]
    pub vendor: String,

    /// Whether any variant of the product can be purchased.
    #[serde(deserialize_with = "null_as_default")]
    pub available: bool,

    /// A comma-separated list of tags. See [`Product::tag_list`].
    #[serde(deserialize_with = "null_as_default")]
    pub tags: String,

    /// When the listing was published, if it has been.
    pub published_at: Option<String>,

    /// The product's images, in the order received.
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<ProductImage>,

    /// The product's options (e.g., Size, Color), in the order received.
    #[serde(deserialize_with = "null_as_default")]
    pub options: Vec<ProductOption>,

    /// The product's variants, in the order received.
    #[serde(deserialize_with = "null_as_default")]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Splits [`tags`](Self::tags) into trimmed, non-empty tags.
    ///
    /// Order and duplicates are kept as received.
    #[must_use]
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// Returns the variant with the given id.
    #[must_use]
    pub fn variant(&self, id: i64) -> Option<&ProductVariant> {
        self.variants.iter().find(|variant| variant.id == id)
    }
}

/// An image associated with a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProductImage {
    /// The identifier of the image.
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,

    /// When the image was created.
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,

    /// The position of the image in the product's image list.
    #[serde(deserialize_with = "null_as_default")]
    pub position: i64,

    /// When the image was last updated.
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,

    /// The identifier of the product this image belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: i64,

    /// The source URL of the image.
    #[serde(deserialize_with = "null_as_default")]
    pub src: String,

    /// Variants that use this image.
    #[serde(deserialize_with = "null_as_default")]
    pub variant_ids: Vec<VariantRef>,
}

/// A reference to a variant from [`ProductImage::variant_ids`].
///
/// The upstream schema does not pin down the element type, so both numeric
/// and string ids are accepted. Numbers keep their literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantRef {
    /// A JSON number, as its literal text.
    Number(String),
    /// A JSON string.
    Text(String),
}

impl VariantRef {
    /// Returns the reference as a variant id, if it is an integer.
    ///
    /// String references are parsed as decimal integers.
    #[must_use]
    pub fn as_id(&self) -> Option<i64> {
        match self {
            Self::Number(literal) => literal.parse().ok(),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl<'de> Deserialize<'de> for VariantRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Scalar::deserialize(deserializer)? {
            Scalar::Number(literal) => Self::Number(literal),
            Scalar::Text(text) => Self::Text(text),
        })
    }
}

impl Serialize for VariantRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(literal) => serialize_literal(literal, serializer),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// A product option (e.g., Size, Color).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProductOption {
    /// The identifier of the option.
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,

    /// The name of the option.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// The identifier of the product this option belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: i64,

    /// The position of the option in the product's option list.
    #[serde(deserialize_with = "null_as_default")]
    pub position: i64,
}

/// A purchasable combination of a product's option values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProductVariant {
    /// The identifier of the variant.
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,

    /// The title of the variant.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    /// The option values selecting this variant, in the order received.
    #[serde(deserialize_with = "null_as_default")]
    pub option_values: Vec<ProductOptionValue>,

    /// The price exactly as sent by the service (e.g., `"19.99"`).
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,

    /// The original price shown for comparison, when the variant is on sale.
    pub compare_at_price: Option<CompareAtPrice>,

    /// The price formatted in the shop's currency format.
    #[serde(deserialize_with = "null_as_default")]
    pub formatted_price: String,

    /// The weight of the variant in grams.
    #[serde(deserialize_with = "null_as_default")]
    pub grams: i64,

    /// Whether the variant needs to be shipped.
    #[serde(deserialize_with = "null_as_default")]
    pub requires_shipping: bool,

    /// The stock keeping unit.
    pub sku: Option<String>,

    /// The barcode, UPC or ISBN number.
    pub barcode: Option<String>,

    /// Whether taxes are charged for the variant.
    #[serde(deserialize_with = "null_as_default")]
    pub taxable: bool,

    /// The position of the variant in the product's variant list.
    #[serde(deserialize_with = "null_as_default")]
    pub position: i64,

    /// Whether the variant can be purchased.
    #[serde(deserialize_with = "null_as_default")]
    pub available: bool,

    /// When the variant was created.
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,

    /// When the variant was last updated.
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl ProductVariant {
    /// Returns the value this variant has for the option called `name`.
    #[must_use]
    pub fn option_value(&self, name: &str) -> Option<&str> {
        self.option_values
            .iter()
            .find(|option_value| option_value.name == name)
            .map(|option_value| option_value.value.as_str())
    }
}

/// A variant's compare-at price.
///
/// The service sends either a JSON number or a string. Both are kept as the
/// text received, so `25.00` stays `25.00` when displayed or re-serialized.
/// `null` and a missing field both decode to `None` on
/// [`ProductVariant::compare_at_price`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareAtPrice {
    /// A JSON number, as its literal text.
    Number(String),
    /// A JSON string, kept exactly as sent.
    Text(String),
}

impl fmt::Display for CompareAtPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(literal) => f.write_str(literal),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for CompareAtPrice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Scalar::deserialize(deserializer)? {
            Scalar::Number(literal) => Self::Number(literal),
            Scalar::Text(text) => Self::Text(text),
        })
    }
}

impl Serialize for CompareAtPrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(literal) => serialize_literal(literal, serializer),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// The value a variant has for one product option.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProductOptionValue {
    /// The identifier of the option this value belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub option_id: i64,

    /// The option name (e.g., "Size").
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// The option value (e.g., "Large").
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

/// A tag used by the shop's product listings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProductTag {
    /// The identifier of the tag.
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,

    /// The tag text.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
}
