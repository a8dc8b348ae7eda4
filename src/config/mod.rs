//! Configuration types for the Shopify Buy client.
//!
//! # Overview
//!
//! - [`BuyConfig`]: everything needed to reach a shop's Buy API
//! - [`BuyConfigBuilder`]: a builder for constructing [`BuyConfig`] instances
//! - [`ApiKey`]: the storefront API key, masked in debug output
//! - [`AppId`]: the sales channel app id substituted into endpoint paths
//! - [`ShopDomain`]: the shop host name
//! - [`HostUrl`]: an optional base URL override
//!
//! # Example
//!
//! ```rust
//! use shopify_buy::{ApiKey, AppId, BuyConfig, ShopDomain};
//!
//! let config = BuyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .app_id(AppId::new("8").unwrap())
//!     .shop_domain(ShopDomain::new("my-store").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.app_id().as_ref(), "8");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, AppId, HostUrl, ShopDomain};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the Shopify Buy client.
///
/// Built once and injected into the client at construction; nothing is read
/// from global state afterwards.
///
/// # Thread Safety
///
/// `BuyConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct BuyConfig {
    api_key: ApiKey,
    app_id: AppId,
    shop_domain: ShopDomain,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl BuyConfig {
    /// Creates a new builder for constructing a `BuyConfig`.
    #[must_use]
    pub fn builder() -> BuyConfigBuilder {
        BuyConfigBuilder::new()
    }

    /// Returns the storefront API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the app id.
    #[must_use]
    pub const fn app_id(&self) -> &AppId {
        &self.app_id
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop_domain(&self) -> &ShopDomain {
        &self.shop_domain
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout handed to the HTTP client, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify BuyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BuyConfig>();
};

/// Builder for constructing [`BuyConfig`] instances.
///
/// `api_key`, `app_id` and `shop_domain` are required. There is no default
/// timeout; requests wait as long as the underlying HTTP client allows.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use shopify_buy::{ApiKey, AppId, BuyConfig, HostUrl, ShopDomain};
///
/// let config = BuyConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .app_id(AppId::new("8").unwrap())
///     .shop_domain(ShopDomain::new("my-store").unwrap())
///     .api_host(HostUrl::new("https://proxy.example.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct BuyConfigBuilder {
    api_key: Option<ApiKey>,
    app_id: Option<AppId>,
    shop_domain: Option<ShopDomain>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl BuyConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the storefront API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the app id (required).
    #[must_use]
    pub fn app_id(mut self, app_id: AppId) -> Self {
        self.app_id = Some(app_id);
        self
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop_domain(mut self, domain: ShopDomain) -> Self {
        self.shop_domain = Some(domain);
        self
    }

    /// Sends requests to `host` instead of `https://{shop_domain}`.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the total request timeout enforced by the HTTP client.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`BuyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key`, `app_id`
    /// or `shop_domain` are not set.
    pub fn build(self) -> Result<BuyConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let app_id = self
            .app_id
            .ok_or(ConfigError::MissingRequiredField { field: "app_id" })?;
        let shop_domain = self.shop_domain.ok_or(ConfigError::MissingRequiredField {
            field: "shop_domain",
        })?;

        Ok(BuyConfig {
            api_key,
            app_id,
            shop_domain,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required() -> BuyConfigBuilder {
        BuyConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .app_id(AppId::new("8").unwrap())
            .shop_domain(ShopDomain::new("my-store").unwrap())
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = BuyConfigBuilder::new()
            .app_id(AppId::new("8").unwrap())
            .shop_domain(ShopDomain::new("my-store").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_requires_app_id() {
        let result = BuyConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .shop_domain(ShopDomain::new("my-store").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "app_id" })
        ));
    }

    #[test]
    fn test_builder_requires_shop_domain() {
        let result = BuyConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .app_id(AppId::new("8").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "shop_domain"
            })
        ));
    }

    #[test]
    fn test_builder_leaves_optional_fields_unset() {
        let config = required().build().unwrap();

        assert!(config.api_host().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let host = HostUrl::new("https://proxy.example.com").unwrap();
        let config = required()
            .api_host(host.clone())
            .user_agent_prefix("MyApp/1.0")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.api_host(), Some(&host));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_config_debug_does_not_leak_api_key() {
        let config = BuyConfig::builder()
            .api_key(ApiKey::new("very-secret").unwrap())
            .app_id(AppId::new("8").unwrap())
            .shop_domain(ShopDomain::new("my-store").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("BuyConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
