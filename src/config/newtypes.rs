//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated storefront API key.
///
/// The Buy API authenticates every request with the sales channel's API key,
/// so the value is masked in debug output to keep it out of logs.
///
/// # Example
///
/// ```rust
/// use shopify_buy::ApiKey;
///
/// let key = ApiKey::new("bf081e860bc9dc1ce0654fdfbc20892d").unwrap();
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// The identifier of the sales channel app whose listings are read.
///
/// The app id is substituted into every endpoint path, so it must be a
/// single non-empty path segment.
///
/// # Example
///
/// ```rust
/// use shopify_buy::AppId;
///
/// let app_id = AppId::new("8").unwrap();
/// assert_eq!(app_id.as_ref(), "8");
/// assert!(AppId::new("8/9").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AppId(String);

impl AppId {
    /// Creates a new validated app id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAppId`] if the id is empty or contains
    /// whitespace or `/`.
    pub fn new(app_id: impl Into<String>) -> Result<Self, ConfigError> {
        let app_id = app_id.into();
        if app_id.is_empty() || app_id.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(ConfigError::InvalidAppId { app_id });
        }
        Ok(Self(app_id))
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated shop host name.
///
/// # Accepted Formats
///
/// - `shop-name` - normalized to `shop-name.myshopify.com`
/// - `shop-name.myshopify.com` - used as-is
/// - `shop.example.com` - a custom storefront domain, used as-is
///
/// Host names are lowercased. Every dot-separated label must be non-empty,
/// made of ASCII letters, digits and hyphens, and cannot start or end with a
/// hyphen.
///
/// # Example
///
/// ```rust
/// use shopify_buy::ShopDomain;
///
/// let domain = ShopDomain::new("my-store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), Some("my-store"));
///
/// let custom = ShopDomain::new("shop.example.com").unwrap();
/// assert_eq!(custom.shop_name(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain(String);

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is invalid.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into().trim().to_lowercase();

        let full_domain = if domain.contains('.') {
            domain
        } else {
            format!("{domain}{}", Self::SUFFIX)
        };

        if !full_domain.split('.').all(Self::is_valid_label) {
            return Err(ConfigError::InvalidShopDomain {
                domain: full_domain,
            });
        }

        Ok(Self(full_domain))
    }

    /// Returns the shop name for `*.myshopify.com` domains.
    ///
    /// Custom domains have no shop name and return `None`.
    #[must_use]
    pub fn shop_name(&self) -> Option<&str> {
        self.0.strip_suffix(Self::SUFFIX)
    }

    fn is_valid_label(label: &str) -> bool {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated base URL that overrides the shop domain for requests.
///
/// Useful when requests go through a proxy, or to point the client at a
/// local mock server. Trailing slashes are dropped so the value can be used
/// directly as a base URI.
///
/// # Example
///
/// ```rust
/// use shopify_buy::HostUrl;
///
/// let url = HostUrl::new("http://localhost:3000/").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// assert_eq!(url.as_ref(), "http://localhost:3000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let host_end = url[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
