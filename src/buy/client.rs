//! The Buy API client.

use crate::buy::decode::{decode, Envelope};
use crate::buy::{BuyError, PathParams, PathTemplate};
use crate::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
use crate::config::{AppId, BuyConfig};

/// Client for a single sales channel app's Buy API.
///
/// The client is generic over its [`Transport`] so tests can swap in a fake;
/// [`BuyClient::new`] wires up the default [`HttpClient`]. Product operations
/// come from the [`ProductService`](crate::buy::ProductService) trait.
///
/// The client holds no mutable state. Every call resolves its path, sends one
/// request and decodes the response; nothing is cached between calls.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_buy::{ApiKey, AppId, BuyClient, BuyConfig, ProductService, ShopDomain};
///
/// let config = BuyConfig::builder()
///     .api_key(ApiKey::new("bf081e860bc9dc1ce0654fdfbc20892d")?)
///     .app_id(AppId::new("8")?)
///     .shop_domain(ShopDomain::new("my-store")?)
///     .build()?;
///
/// let client = BuyClient::new(&config)?;
/// let products = client.get_products(1, 50).await?;
/// ```
#[derive(Debug)]
pub struct BuyClient<T = HttpClient> {
    transport: T,
    path_params: PathParams,
}

impl BuyClient<HttpClient> {
    /// Creates a client that talks to the shop described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BuyError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &BuyConfig) -> Result<Self, BuyError> {
        let transport = HttpClient::new(config)?;
        Ok(Self::with_transport(transport, config.app_id().clone()))
    }
}

impl<T> BuyClient<T> {
    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(transport: T, app_id: AppId) -> Self {
        Self {
            transport,
            path_params: PathParams::new().with("app_id", app_id.as_ref()),
        }
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the values substituted into endpoint paths.
    #[must_use]
    pub const fn path_params(&self) -> &PathParams {
        &self.path_params
    }
}

impl<T: Transport> BuyClient<T> {
    /// Sends a GET to `template` with `query` and decodes envelope `E`.
    pub(crate) async fn fetch<E, K, V>(
        &self,
        template: &PathTemplate,
        query: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Vec<E::Item>, BuyError>
    where
        E: Envelope,
        K: Into<String>,
        V: Into<String>,
    {
        let path = template.resolve(&self.path_params)?;
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query)
            .build();
        let response = self.transport.send(request).await?;
        decode::<E>(&response)
    }
}

// Verify BuyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BuyClient>();
};
