//! Configuration error types for the Shopify Buy client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid credentials or domains are rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use shopify_buy::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`BuyConfig`](crate::BuyConfig).
///
/// Each variant carries enough context to fix the offending value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide the storefront API key of your sales channel.")]
    EmptyApiKey,

    /// App id is empty or contains characters that cannot appear in a path segment.
    #[error("Invalid app id '{app_id}'. The app id must be non-empty and cannot contain whitespace or '/'.")]
    InvalidAppId {
        /// The invalid app id that was provided.
        app_id: String,
    },

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name', 'shop-name.myshopify.com' or a custom host name.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
