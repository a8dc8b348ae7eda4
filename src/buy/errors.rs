//! Error types for Buy API operations.
//!
//! Every accessor fails with a [`BuyError`], which keeps the three failure
//! kinds apart:
//!
//! - [`BuyError::Template`]: an endpoint path could not be resolved. This is
//!   a programming error in the client, never a runtime condition.
//! - [`BuyError::Http`]: the transport failed (network or non-2xx).
//! - [`BuyError::Decode`]: the body was not JSON or lacked the expected field.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_buy::{BuyError, ProductService};
//!
//! match client.get_products(1, 50).await {
//!     Ok(products) => println!("{} products", products.len()),
//!     Err(BuyError::Http(e)) => println!("request failed: {e}"),
//!     Err(BuyError::Decode { field, .. }) => println!("bad '{field}' payload"),
//!     Err(BuyError::Template(e)) => panic!("client bug: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// A path template could not be turned into a concrete path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template names a placeholder that has no value.
    #[error("No value for placeholder '{{{placeholder}}}' in path template '{template}'")]
    UnresolvedPlaceholder {
        /// The template being resolved.
        template: String,
        /// The placeholder name without braces.
        placeholder: String,
    },

    /// The template has an unbalanced brace or an empty placeholder.
    #[error("Malformed path template '{template}'")]
    Malformed {
        /// The template being resolved.
        template: String,
    },
}

/// Error type for Buy API operations.
#[derive(Debug, Error)]
pub enum BuyError {
    /// An endpoint path could not be resolved.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The transport reported a failure.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body could not be decoded into the expected envelope.
    #[error("Failed to decode '{field}' from response body: {source}")]
    Decode {
        /// The envelope field that was being extracted.
        field: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl BuyError {
    /// Returns the HTTP status code if the service answered with an error status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::Template(_) | Self::Decode { .. } => None,
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_unresolved_placeholder_message_names_placeholder() {
        let error = TemplateError::UnresolvedPlaceholder {
            template: "api/apps/{app_id}/product_listings.json".to_string(),
            placeholder: "app_id".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("'{app_id}'"));
        assert!(message.contains("api/apps/{app_id}/product_listings.json"));
    }

    #[test]
    fn test_http_error_passes_through_unchanged() {
        let error: BuyError = HttpError::Response(HttpResponseError {
            code: 500,
            message: r#"{"errors":"boom"}"#.to_string(),
            error_reference: Some("req-9".to_string()),
        })
        .into();

        assert_eq!(error.to_string(), r#"{"errors":"boom"}"#);
        assert_eq!(error.status(), Some(500));
        assert_eq!(error.request_id(), Some("req-9"));
    }

    #[test]
    fn test_decode_error_names_field_and_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = BuyError::Decode {
            field: "tags",
            source,
        };

        assert!(error.to_string().contains("'tags'"));
        assert!(std::error::Error::source(&error).is_some());
        assert_eq!(error.status(), None);
    }
}
